use {
    crate::{
        document::{FieldType, StoredValue},
        index::{FieldInfo, IndexOptions},
    },
    std::fmt::{Display, Formatter, Result as FmtResult},
};

/// A single stored field of a [crate::document::Document]: a name and a [StoredValue].
///
/// Names are not unique within a document; a multi-valued field is several entries with the same name.
#[derive(Clone, Debug, PartialEq)]
pub struct StoredField {
    name: String,
    value: StoredValue,
}

impl StoredField {
    /// Create a stored field with the given name and value.
    pub fn new(name: &str, value: StoredValue) -> Self {
        Self {
            name: name.to_string(),
            value,
        }
    }

    /// Build a binary field read from storage. The bytes are taken as-is.
    pub fn from_binary(field_info: &FieldInfo, value: Vec<u8>) -> Self {
        Self::new(field_info.get_name(), StoredValue::Binary(value))
    }

    /// Build a string field read from storage.
    ///
    /// Invalid UTF-8 sequences are replaced with `U+FFFD`. The field type is derived from
    /// `field_info` at the time of the call.
    pub fn from_string_bytes(field_info: &FieldInfo, value: &[u8]) -> Self {
        let text = String::from_utf8_lossy(value).into_owned();
        Self::new(field_info.get_name(), StoredValue::String(text, FieldType::from_field_info(field_info)))
    }

    /// Build an int field read from storage.
    pub fn from_int(field_info: &FieldInfo, value: i32) -> Self {
        Self::new(field_info.get_name(), StoredValue::Int(value))
    }

    /// Build a long field read from storage.
    pub fn from_long(field_info: &FieldInfo, value: i64) -> Self {
        Self::new(field_info.get_name(), StoredValue::Long(value))
    }

    /// Build a float field read from storage.
    pub fn from_float(field_info: &FieldInfo, value: f32) -> Self {
        Self::new(field_info.get_name(), StoredValue::Float(value))
    }

    /// Build a double field read from storage.
    pub fn from_double(field_info: &FieldInfo, value: f64) -> Self {
        Self::new(field_info.get_name(), StoredValue::Double(value))
    }

    /// Field name
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The stored value.
    pub fn value(&self) -> &StoredValue {
        &self.value
    }

    /// Consume the field and return its value.
    pub fn into_value(self) -> StoredValue {
        self.value
    }

    /// [FieldType] describing the properties of this field.
    pub fn field_type(&self) -> FieldType {
        self.value.field_type()
    }
}

impl Display for StoredField {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let field_type = self.field_type();
        write!(f, "stored")?;

        if !matches!(field_type.index_options(), IndexOptions::None) {
            write!(f, ",indexed")?;
            if field_type.tokenized() {
                write!(f, ",tokenized")?;
            }
            if field_type.store_term_vectors() {
                write!(f, ",termVector")?;
            }
            if field_type.omit_norms() {
                write!(f, ",omitNorms")?;
            }
            write!(f, ",indexOptions={:?}", field_type.index_options())?;
        }

        write!(f, "<{}:{}>", self.name, self.value)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::StoredField,
        crate::{
            document::{StoredValue, STORED_ONLY},
            index::{FieldInfo, IndexOptions},
        },
        pretty_assertions::assert_eq,
        test_log::test,
    };

    #[test]
    fn test_string_copies_field_info() {
        let fi = FieldInfo::new("greeting", 4, true, true, false, IndexOptions::DocsAndFreqs).unwrap();
        let field = StoredField::from_string_bytes(&fi, "héllo".as_bytes());
        assert_eq!(field.name(), "greeting");
        assert_eq!(field.value().string_value(), Some("héllo"));
        let ft = field.field_type();
        assert!(ft.store_term_vectors());
        assert!(ft.omit_norms());
        assert_eq!(ft.index_options(), IndexOptions::DocsAndFreqs);
    }

    #[test]
    fn test_string_invalid_utf8_is_replaced() {
        let fi = FieldInfo::stored_only("raw", 0);
        let field = StoredField::from_string_bytes(&fi, &[b'a', 0xff, b'b']);
        assert_eq!(field.value().string_value(), Some("a\u{fffd}b"));
    }

    #[test]
    fn test_scalars() {
        let fi = FieldInfo::stored_only("n", 0);
        assert_eq!(StoredField::from_int(&fi, 1).into_value(), StoredValue::Int(1));
        assert_eq!(StoredField::from_long(&fi, 2).into_value(), StoredValue::Long(2));
        assert_eq!(StoredField::from_float(&fi, 3.0).into_value(), StoredValue::Float(3.0));
        assert_eq!(StoredField::from_double(&fi, 4.0).into_value(), StoredValue::Double(4.0));
        assert_eq!(StoredField::from_binary(&fi, vec![5]).into_value(), StoredValue::Binary(vec![5]));
        assert_eq!(StoredField::from_int(&fi, 1).field_type(), STORED_ONLY);
    }

    #[test]
    fn test_display() {
        let fi = FieldInfo::new("title", 0, false, true, false, IndexOptions::Docs).unwrap();
        assert_eq!(
            StoredField::from_string_bytes(&fi, b"Rust").to_string(),
            "stored,indexed,tokenized,omitNorms,indexOptions=Docs<title:Rust>"
        );
        assert_eq!(StoredField::new("views", StoredValue::Long(10)).to_string(), "stored<views:10>");
    }
}
