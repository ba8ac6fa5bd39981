use {
    crate::{
        index::{FieldInfo, FieldInfos, Status, StoredFieldVisitor, StoredFields},
        LuceneError,
    },
    log::{debug, trace},
    std::io::{ErrorKind as IoErrorKind, Result as IoResult},
};

/// A stored value as it sits in storage, before a visitor has asked for it.
#[derive(Clone, Debug, PartialEq)]
enum StoredRecord {
    Binary(Vec<u8>),
    String(Vec<u8>),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
}

/// Stored fields held in memory, keyed by the position of each field in a [FieldInfos].
///
/// Documents are written with [MemoryStoredFields::start_document], any number of `write_*` calls, and
/// [MemoryStoredFields::finish_document]; they are numbered from 0 in the order they are finished.
/// Reads drive a [StoredFieldVisitor] the same way an on-disk stored fields reader does: the visitor
/// is asked about each field before its value is handed over.
#[derive(Debug)]
pub struct MemoryStoredFields {
    field_infos: FieldInfos,
    docs: Vec<Vec<(usize, StoredRecord)>>,
    pending: Option<Vec<(usize, StoredRecord)>>,
}

impl MemoryStoredFields {
    /// Creates an empty store for fields described by `field_infos`.
    pub fn new(field_infos: FieldInfos) -> Self {
        Self {
            field_infos,
            docs: Vec::new(),
            pending: None,
        }
    }

    /// The fields this store accepts.
    pub fn field_infos(&self) -> &FieldInfos {
        &self.field_infos
    }

    /// Called before writing the stored fields of a document.
    pub fn start_document(&mut self) -> Result<(), LuceneError> {
        if self.pending.is_some() {
            return Err(LuceneError::IllegalState("start_document called twice without finish_document".to_string()));
        }

        self.pending = Some(Vec::new());
        Ok(())
    }

    /// Called when a document and all its fields have been written. Returns the new document's id.
    pub fn finish_document(&mut self) -> Result<i32, LuceneError> {
        let fields = self
            .pending
            .take()
            .ok_or_else(|| LuceneError::IllegalState("finish_document called without start_document".to_string()))?;

        let doc_id = self.docs.len() as i32;
        debug!("Finished document {doc_id} with {} stored fields", fields.len());
        self.docs.push(fields);
        Ok(doc_id)
    }

    /// Stores a binary value for `field` in the current document.
    pub fn write_binary(&mut self, field: &str, value: &[u8]) -> Result<(), LuceneError> {
        self.write(field, StoredRecord::Binary(value.to_vec()))
    }

    /// Stores a string value for `field` in the current document.
    pub fn write_string(&mut self, field: &str, value: &str) -> Result<(), LuceneError> {
        self.write(field, StoredRecord::String(value.as_bytes().to_vec()))
    }

    /// Stores an int value for `field` in the current document.
    pub fn write_int(&mut self, field: &str, value: i32) -> Result<(), LuceneError> {
        self.write(field, StoredRecord::Int(value))
    }

    /// Stores a long value for `field` in the current document.
    pub fn write_long(&mut self, field: &str, value: i64) -> Result<(), LuceneError> {
        self.write(field, StoredRecord::Long(value))
    }

    /// Stores a float value for `field` in the current document.
    pub fn write_float(&mut self, field: &str, value: f32) -> Result<(), LuceneError> {
        self.write(field, StoredRecord::Float(value))
    }

    /// Stores a double value for `field` in the current document.
    pub fn write_double(&mut self, field: &str, value: f64) -> Result<(), LuceneError> {
        self.write(field, StoredRecord::Double(value))
    }

    fn write(&mut self, field: &str, record: StoredRecord) -> Result<(), LuceneError> {
        let ordinal =
            self.field_infos.ordinal(field).ok_or_else(|| LuceneError::UnknownField(field.to_string()))?;

        let pending = self
            .pending
            .as_mut()
            .ok_or_else(|| LuceneError::IllegalState(format!("field {field:?} written outside of a document")))?;
        pending.push((ordinal, record));
        Ok(())
    }
}

fn deliver(visitor: &mut dyn StoredFieldVisitor, field_info: &FieldInfo, record: &StoredRecord) -> IoResult<()> {
    match record {
        StoredRecord::Binary(value) => visitor.binary_field(field_info, value.clone()),
        StoredRecord::String(value) => visitor.string_field(field_info, value),
        StoredRecord::Int(value) => visitor.int_field(field_info, *value),
        StoredRecord::Long(value) => visitor.long_field(field_info, *value),
        StoredRecord::Float(value) => visitor.float_field(field_info, *value),
        StoredRecord::Double(value) => visitor.double_field(field_info, *value),
    }
}

impl StoredFields for MemoryStoredFields {
    fn max_doc(&self) -> i32 {
        self.docs.len() as i32
    }

    fn visit_document(&mut self, doc_id: i32, visitor: &mut dyn StoredFieldVisitor) -> IoResult<()> {
        let max_doc = self.max_doc();
        if doc_id < 0 || doc_id >= max_doc {
            return Err(LuceneError::InvalidDocId(doc_id, max_doc).into_io_error(IoErrorKind::InvalidInput));
        }

        for (ordinal, record) in &self.docs[doc_id as usize] {
            let field_info = self.field_infos.by_ordinal(*ordinal);

            match visitor.needs_field(field_info)? {
                Status::Yes => deliver(visitor, field_info, record)?,
                Status::No => trace!("Skipping field {:?} of doc {doc_id}", field_info.get_name()),
                Status::Stop => {
                    trace!("Visitor stopped doc {doc_id} at field {:?}", field_info.get_name());
                    return Ok(());
                }
            }
        }

        Ok(())
    }
}
