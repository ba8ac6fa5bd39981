use {
    crate::document::{Document, FieldCollector, FieldFilter, StoredField},
    log::{debug, trace, warn},
    std::collections::HashSet,
};

/// A [crate::index::StoredFieldVisitor] that creates a list of [Document]s containing all stored fields, or only
/// the fields accepted by its [FieldFilter].
///
/// The visitor does not know which document it is on. Every accepted value is appended to the
/// current document; [MultiDocumentStoredFieldVisitor::new_document] seals the current document onto
/// the result list and starts an empty one. The driver must call `new_document` once after every
/// document, including the last: fields added after the final call are not part of
/// [MultiDocumentStoredFieldVisitor::get_documents].
///
/// Filtering happens only in [crate::index::StoredFieldVisitor::needs_field]. The typed callbacks append whatever
/// they are given; a reader must not deliver values for fields the visitor declined.
///
/// This is used by [crate::index::StoredFields::documents] to load a batch of documents.
#[derive(Debug, Default)]
pub struct MultiDocumentStoredFieldVisitor {
    fields_to_add: FieldFilter,
    current_document: Document,
    documents: Vec<Document>,
}

impl MultiDocumentStoredFieldVisitor {
    /// Load only fields accepted by the provided filter.
    pub fn new(fields_to_add: FieldFilter) -> Self {
        Self {
            fields_to_add,
            current_document: Document::new(),
            documents: Vec::new(),
        }
    }

    /// Load all stored fields.
    pub fn all() -> Self {
        Self::new(FieldFilter::all())
    }

    /// Load only fields named in the provided set, or all fields if `fields_to_add` is `None`.
    pub fn from_set(fields_to_add: Option<HashSet<String>>) -> Self {
        Self::new(FieldFilter::new(fields_to_add))
    }

    /// Load only the named fields.
    pub fn from_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(FieldFilter::from_fields(fields))
    }

    /// Seal the current document onto the result list and start a new, empty one.
    ///
    /// Sealing a document with no fields is legal; the empty document is kept.
    pub fn new_document(&mut self) {
        let sealed = std::mem::take(&mut self.current_document);
        debug!("Sealing document {} with {} fields", self.documents.len(), sealed.len());
        self.documents.push(sealed);
    }

    /// Retrieve the visited documents, one per [Self::new_document] call, in call order.
    ///
    /// Only the stored information in each field is valid. String fields carry the indexing options
    /// of the field they were read from, but nothing else about how the field was indexed is kept.
    pub fn get_documents(&self) -> &[Document] {
        self.documents.as_slice()
    }

    /// Consume the visitor and return the visited documents.
    ///
    /// The document under construction is dropped. If it holds fields, a warning is logged: the
    /// driver most likely forgot the final [Self::new_document] call.
    pub fn into_documents(self) -> Vec<Document> {
        if !self.current_document.is_empty() {
            warn!(
                "Dropping {} stored fields that were not sealed into a document; new_document() must be called after the last document",
                self.current_document.len()
            );
        }

        self.documents
    }

    /// The document currently being built.
    pub fn current_document(&self) -> &Document {
        &self.current_document
    }
}

impl FieldCollector for MultiDocumentStoredFieldVisitor {
    fn fields_to_add(&self) -> &FieldFilter {
        &self.fields_to_add
    }

    fn collect(&mut self, field: StoredField) {
        trace!("Adding field {:?} to document {}", field.name(), self.documents.len());
        self.current_document.add(field);
    }
}
