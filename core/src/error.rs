use std::{
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
    io::{Error as IoError, ErrorKind as IoErrorKind},
};

/// Errors that can occur in Lucene.
#[derive(Debug)]
pub enum LuceneError {
    /// A field was configured inconsistently (for example, payloads without positions).
    IllegalFieldInfo(String /* field */, String /* message */),

    /// An operation was attempted in a state that does not allow it.
    IllegalState(String),

    /// A document id was outside of `0..max_doc`.
    InvalidDocId(i32 /* doc_id */, i32 /* max_doc */),

    /// A field name was not present in the [crate::index::FieldInfos] of a segment.
    UnknownField(String),
}

impl Display for LuceneError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::IllegalFieldInfo(field, message) => write!(f, "Illegal field info for field {field:?}: {message}"),
            Self::IllegalState(message) => write!(f, "Illegal state: {message}"),
            Self::InvalidDocId(doc_id, max_doc) => {
                write!(f, "Invalid doc id: {doc_id} must be >= 0 and < max_doc ({max_doc})")
            }
            Self::UnknownField(name) => write!(f, "Unknown field: {name:?}"),
        }
    }
}

impl Error for LuceneError {}

impl LuceneError {
    /// Wrap this error in a [std::io::Error] of the given kind, for use at the stored field visitor boundary.
    pub fn into_io_error(self, kind: IoErrorKind) -> IoError {
        IoError::new(kind, self)
    }
}
