use crate::document::{Document, FieldCollector, FieldFilter, StoredField};

/// A [crate::index::StoredFieldVisitor] that creates a single [Document] containing all stored fields, or only the
/// fields accepted by its [FieldFilter].
///
/// This is used by [crate::index::StoredFields::document] to load a document.
#[derive(Debug, Default)]
pub struct DocumentStoredFieldVisitor {
    fields_to_add: FieldFilter,
    doc: Document,
}

impl DocumentStoredFieldVisitor {
    /// Load only fields accepted by the provided filter.
    pub fn new(fields_to_add: FieldFilter) -> Self {
        Self {
            fields_to_add,
            doc: Document::new(),
        }
    }

    /// Load all stored fields.
    pub fn all() -> Self {
        Self::default()
    }

    /// Load only the named fields.
    pub fn from_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(FieldFilter::from_fields(fields))
    }

    /// The document built so far.
    pub fn get_document(&self) -> &Document {
        &self.doc
    }

    /// Consume the visitor and return the visited document.
    pub fn into_document(self) -> Document {
        self.doc
    }
}

impl FieldCollector for DocumentStoredFieldVisitor {
    fn fields_to_add(&self) -> &FieldFilter {
        &self.fields_to_add
    }

    fn collect(&mut self, field: StoredField) {
        self.doc.add(field);
    }
}
