use {
    crate::{
        document::{Document, DocumentStoredFieldVisitor, FieldFilter, MultiDocumentStoredFieldVisitor},
        index::StoredFieldVisitor,
    },
    log::debug,
    std::{collections::HashSet, io::Result as IoResult},
};

/// API for reading stored fields.
pub trait StoredFields {
    /// The number of documents readable from this instance; valid ids are `0..max_doc()`.
    fn max_doc(&self) -> i32;

    /// Visits the fields of a stored document for custom processing/loading of each field.
    ///
    /// For every stored field, in storage order, [StoredFieldVisitor::needs_field] is asked first; the
    /// value is decoded and delivered only on [crate::index::Status::Yes], and
    /// [crate::index::Status::Stop] ends the document. If you simply want to load all fields, use
    /// [StoredFields::document].
    ///
    /// # Errors
    /// * [std::io::Error] with [std::io::ErrorKind::InvalidInput] if `doc_id` is out of range
    /// * [std::io::Error] with [std::io::ErrorKind::InvalidData] if the stored data is corrupt
    /// * Any error returned by the visitor
    fn visit_document(&mut self, doc_id: i32, visitor: &mut dyn StoredFieldVisitor) -> IoResult<()>;

    /// Returns the stored fields of the `doc_id`th [Document]. This is just sugar for using
    /// [DocumentStoredFieldVisitor].
    ///
    /// Only the content of a field is returned, if that field was stored during indexing. Metadata like
    /// boost and tokenization are not preserved.
    fn document(&mut self, doc_id: i32) -> IoResult<Document> {
        let mut visitor = DocumentStoredFieldVisitor::all();
        self.visit_document(doc_id, &mut visitor)?;
        Ok(visitor.into_document())
    }

    /// Like [StoredFields::document] but only loads the specified fields.
    fn document_fields(&mut self, doc_id: i32, fields: &[&str]) -> IoResult<Document> {
        let mut visitor = DocumentStoredFieldVisitor::new(FieldFilter::from_fields(fields.iter().copied()));
        self.visit_document(doc_id, &mut visitor)?;
        Ok(visitor.into_document())
    }

    /// Returns the stored fields of several documents, one [Document] per id in `doc_ids`, in the same
    /// order. If `fields` is `Some`, only the named fields are loaded.
    ///
    /// Duplicate ids yield duplicate documents. A document with none of the requested fields is
    /// returned empty rather than skipped.
    fn documents(&mut self, doc_ids: &[i32], fields: Option<HashSet<String>>) -> IoResult<Vec<Document>> {
        let mut visitor = MultiDocumentStoredFieldVisitor::from_set(fields);

        for doc_id in doc_ids {
            self.visit_document(*doc_id, &mut visitor)?;
            visitor.new_document();
        }

        debug!("Loaded {} documents", visitor.get_documents().len());
        Ok(visitor.into_documents())
    }
}
