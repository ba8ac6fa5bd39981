use {
    crate::{
        document::{FieldType, STORED_ONLY},
        util::Number,
    },
    std::fmt::{Display, Formatter, Result as FmtResult},
};

/// The value of a stored field, tagged with the kind it was stored as.
///
/// Stored fields come in exactly six kinds. Only strings carry indexing metadata: it is copied from
/// the field's [crate::index::FieldInfo] when the value is read so the field can be re-indexed. Every
/// other kind is stored-only.
#[derive(Clone, Debug, PartialEq)]
pub enum StoredValue {
    /// Opaque bytes.
    Binary(Vec<u8>),

    /// Text, with the type derived from the field's metadata at read time.
    String(String, FieldType),

    /// A 32-bit integer.
    Int(i32),

    /// A 64-bit integer.
    Long(i64),

    /// A 32-bit float.
    Float(f32),

    /// A 64-bit float.
    Double(f64),
}

impl StoredValue {
    /// The [FieldType] this value would be re-added to an index with.
    pub fn field_type(&self) -> FieldType {
        match self {
            Self::String(_, field_type) => *field_type,
            _ => STORED_ONLY,
        }
    }

    /// `Some` if this is a binary value.
    pub fn binary_value(&self) -> Option<&[u8]> {
        match self {
            Self::Binary(value) => Some(value.as_slice()),
            _ => None,
        }
    }

    /// `Some` if this is a string value.
    pub fn string_value(&self) -> Option<&str> {
        match self {
            Self::String(value, _) => Some(value.as_str()),
            _ => None,
        }
    }

    /// `Some` if this is a numeric value.
    pub fn numeric_value(&self) -> Option<Number> {
        match self {
            Self::Int(value) => Some(Number::from(*value)),
            Self::Long(value) => Some(Number::from(*value)),
            Self::Float(value) => Some(Number::from(*value)),
            Self::Double(value) => Some(Number::from(*value)),
            Self::Binary(_) | Self::String(..) => None,
        }
    }
}

impl Display for StoredValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Binary(value) => write!(f, "{value:#x?}"),
            Self::String(value, _) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Long(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Double(value) => write!(f, "{value}"),
        }
    }
}

impl From<Vec<u8>> for StoredValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Binary(value)
    }
}

impl From<&str> for StoredValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string(), STORED_ONLY)
    }
}

impl From<i32> for StoredValue {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<i64> for StoredValue {
    fn from(value: i64) -> Self {
        Self::Long(value)
    }
}

impl From<f32> for StoredValue {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<f64> for StoredValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}
