use {crate::index::FieldInfo, std::io::Result as IoResult};

/// Enumeration of possible return values for [StoredFieldVisitor::needs_field].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Status {
    /// YES: the field should be visited.
    Yes,

    /// NO: don't visit this field, but continue processing fields for this document.
    No,

    /// STOP: don't visit this field and stop processing any other fields for this document.
    Stop,
}

/// Provides a low-level means of accessing the stored field values in an index. See
/// [crate::index::StoredFields::visit_document].
///
/// The stored fields reader calls [StoredFieldVisitor::needs_field] for every stored field of a
/// document before decoding it, and then calls exactly one of the typed methods for each field
/// the visitor accepted. Values are delivered in the order they were stored.
///
/// # Note
/// A [StoredFieldVisitor] implementation should not try to load or visit other
/// stored documents in the same reader because the implementation of stored fields for most codecs
/// is not reentrant and you will see strange errors as a result.
///
/// See [crate::document::MultiDocumentStoredFieldVisitor], which is a [StoredFieldVisitor] that
/// builds a [crate::document::Document] for each visited document.
pub trait StoredFieldVisitor {
    /// Process a binary field
    fn binary_field(&mut self, _field_info: &FieldInfo, _value: Vec<u8>) -> IoResult<()> {
        Ok(())
    }

    /// Process a string field; the value is the UTF-8 encoding of the stored text.
    fn string_field(&mut self, _field_info: &FieldInfo, _value: &[u8]) -> IoResult<()> {
        Ok(())
    }

    /// Process an int numeric field.
    fn int_field(&mut self, _field_info: &FieldInfo, _value: i32) -> IoResult<()> {
        Ok(())
    }

    /// Process a long numeric field.
    fn long_field(&mut self, _field_info: &FieldInfo, _value: i64) -> IoResult<()> {
        Ok(())
    }

    /// Process a float numeric field.
    fn float_field(&mut self, _field_info: &FieldInfo, _value: f32) -> IoResult<()> {
        Ok(())
    }

    /// Process a double numeric field.
    fn double_field(&mut self, _field_info: &FieldInfo, _value: f64) -> IoResult<()> {
        Ok(())
    }

    /// Hook before processing a field. Before a field is processed, this method is invoked so that
    /// implementations can return a [Status] representing whether they need that particular field or not,
    /// or to stop processing entirely.
    fn needs_field(&mut self, field_info: &FieldInfo) -> IoResult<Status>;
}
