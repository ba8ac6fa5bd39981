use {
    crate::{
        document::{FieldFilter, StoredField},
        index::{FieldInfo, Status, StoredFieldVisitor},
    },
    log::trace,
    std::io::Result as IoResult,
};

/// A visitor that builds documents out of stored fields.
///
/// Every `FieldCollector` is a [StoredFieldVisitor]: [StoredFieldVisitor::needs_field] answers from
/// [FieldCollector::fields_to_add], and each typed callback turns its value into a [StoredField] and
/// hands it to [FieldCollector::collect]. The callbacks do not consult the filter again.
pub trait FieldCollector {
    /// The filter deciding which fields are loaded.
    fn fields_to_add(&self) -> &FieldFilter;

    /// Take one decoded field.
    fn collect(&mut self, field: StoredField);
}

impl<C: FieldCollector> StoredFieldVisitor for C {
    fn binary_field(&mut self, field_info: &FieldInfo, value: Vec<u8>) -> IoResult<()> {
        self.collect(StoredField::from_binary(field_info, value));
        Ok(())
    }

    fn string_field(&mut self, field_info: &FieldInfo, value: &[u8]) -> IoResult<()> {
        self.collect(StoredField::from_string_bytes(field_info, value));
        Ok(())
    }

    fn int_field(&mut self, field_info: &FieldInfo, value: i32) -> IoResult<()> {
        self.collect(StoredField::from_int(field_info, value));
        Ok(())
    }

    fn long_field(&mut self, field_info: &FieldInfo, value: i64) -> IoResult<()> {
        self.collect(StoredField::from_long(field_info, value));
        Ok(())
    }

    fn float_field(&mut self, field_info: &FieldInfo, value: f32) -> IoResult<()> {
        self.collect(StoredField::from_float(field_info, value));
        Ok(())
    }

    fn double_field(&mut self, field_info: &FieldInfo, value: f64) -> IoResult<()> {
        self.collect(StoredField::from_double(field_info, value));
        Ok(())
    }

    fn needs_field(&mut self, field_info: &FieldInfo) -> IoResult<Status> {
        let status = self.fields_to_add().needs_field(field_info.get_name());
        trace!("needs_field({:?}) -> {status:?}", field_info.get_name());
        Ok(status)
    }
}
