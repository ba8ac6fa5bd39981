use {
    crate::{index::IndexOptions, LuceneError},
    std::io::{ErrorKind as IoErrorKind, Result as IoResult},
};

/// Describes a single field of a segment: its name, number, and how it was indexed.
///
/// Stored field visitors receive a reference to one of these with every callback. Only the
/// name is needed to rebuild most stored values; string values additionally copy the term
/// vector, norms, and index options settings.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldInfo {
    /// Field's name
    pub name: String,

    /// Internal field number
    pub number: i32,

    /// True if any document indexed term vectors
    store_term_vector: bool,

    /// Omit norms associated with indexed fields
    omit_norms: bool,

    index_options: IndexOptions,

    /// Whether this field stores payloads together with term positions
    store_payloads: bool,
}

impl FieldInfo {
    /// Creates a new field info.
    ///
    /// Fields that are not indexed ([IndexOptions::None]) cannot carry term vectors, payloads or
    /// omitted norms; those flags are cleared before the consistency check runs.
    pub fn new(
        name: &str,
        number: i32,
        mut store_term_vector: bool,
        mut omit_norms: bool,
        mut store_payloads: bool,
        index_options: IndexOptions,
    ) -> IoResult<Self> {
        if matches!(index_options, IndexOptions::None) {
            store_term_vector = false;
            store_payloads = false;
            omit_norms = false;
        }

        let result = Self {
            name: name.to_string(),
            number,
            store_term_vector,
            omit_norms,
            index_options,
            store_payloads,
        };

        result.check_consistency()?;
        Ok(result)
    }

    /// Creates a field info for a field that is stored but not indexed.
    pub fn stored_only(name: &str, number: i32) -> Self {
        Self {
            name: name.to_string(),
            number,
            store_term_vector: false,
            omit_norms: false,
            index_options: IndexOptions::None,
            store_payloads: false,
        }
    }

    fn check_consistency(&self) -> IoResult<()> {
        // Cannot store payloads unless positions are indexed.
        if self.store_payloads && !self.index_options.positions_indexed() {
            return Err(LuceneError::IllegalFieldInfo(
                self.name.clone(),
                "indexed field cannot have payloads without positions".to_string(),
            )
            .into_io_error(IoErrorKind::InvalidData));
        }

        Ok(())
    }

    /// Field's name
    pub fn get_name(&self) -> &str {
        self.name.as_str()
    }

    /// Internal field number
    pub fn get_field_number(&self) -> i32 {
        self.number
    }

    /// [IndexOptions] the field was indexed with
    pub fn get_index_options(&self) -> IndexOptions {
        self.index_options
    }

    /// Returns true if norms are explicitly omitted for this field
    pub fn omits_norms(&self) -> bool {
        self.omit_norms
    }

    /// Returns true if this field actually has any norms.
    pub fn has_norms(&self) -> bool {
        !matches!(self.index_options, IndexOptions::None) && !self.omit_norms
    }

    /// Returns true if any payloads exist for this field.
    pub fn has_payloads(&self) -> bool {
        self.store_payloads
    }

    /// Returns true if any term vectors exist for this field.
    pub fn has_vectors(&self) -> bool {
        self.store_term_vector
    }
}
