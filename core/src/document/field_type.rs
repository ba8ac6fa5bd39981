use crate::index::{FieldInfo, IndexOptions};

/// Describes the properties of a field.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct FieldType {
    stored: bool,
    tokenized: bool,
    store_term_vectors: bool,
    omit_norms: bool,
    index_options: IndexOptions,
}

/// Type for a value that is only stored, never indexed.
pub const STORED_ONLY: FieldType = FieldType {
    stored: true,
    tokenized: false,
    store_term_vectors: false,
    omit_norms: false,
    index_options: IndexOptions::None,
};

/// Type for stored, tokenized text indexed with positions.
pub const TEXT_STORED: FieldType = FieldType {
    stored: true,
    tokenized: true,
    store_term_vectors: false,
    omit_norms: false,
    index_options: IndexOptions::DocsAndFreqsAndPositions,
};

impl FieldType {
    /// Derives the type of a stored string from the metadata of the field it was read from.
    ///
    /// Starts from [TEXT_STORED] and copies the term vector, norms, and index options settings
    /// of `field_info`.
    pub fn from_field_info(field_info: &FieldInfo) -> Self {
        Self {
            store_term_vectors: field_info.has_vectors(),
            omit_norms: field_info.omits_norms(),
            index_options: field_info.get_index_options(),
            ..TEXT_STORED
        }
    }

    /// True if the field's value should be stored.
    pub fn stored(&self) -> bool {
        self.stored
    }

    /// True if this field's value should be analyzed.
    ///
    /// This has no effect if [Self::index_options] returns [IndexOptions::None].
    pub fn tokenized(&self) -> bool {
        self.tokenized
    }

    /// True if this field's indexed form should be also stored into term vectors.
    pub fn store_term_vectors(&self) -> bool {
        self.store_term_vectors
    }

    /// True if normalization values should be omitted for the field.
    pub fn omit_norms(&self) -> bool {
        self.omit_norms
    }

    /// [IndexOptions] describing what should be recorded into the inverted index.
    pub fn index_options(&self) -> IndexOptions {
        self.index_options
    }
}

#[cfg(test)]
mod tests {
    use {
        super::{FieldType, STORED_ONLY, TEXT_STORED},
        crate::index::{FieldInfo, IndexOptions},
        pretty_assertions::assert_eq,
        test_log::test,
    };

    #[test]
    fn test_constants() {
        assert!(STORED_ONLY.stored());
        assert!(!STORED_ONLY.tokenized());
        assert_eq!(STORED_ONLY.index_options(), IndexOptions::None);

        assert!(TEXT_STORED.stored());
        assert!(TEXT_STORED.tokenized());
        assert!(!TEXT_STORED.store_term_vectors());
        assert!(!TEXT_STORED.omit_norms());
        assert_eq!(TEXT_STORED.index_options(), IndexOptions::DocsAndFreqsAndPositions);
    }

    #[test]
    fn test_from_field_info() {
        let fi = FieldInfo::new("body", 0, true, true, false, IndexOptions::DocsAndFreqs).unwrap();
        let ft = FieldType::from_field_info(&fi);
        assert!(ft.stored());
        assert!(ft.tokenized());
        assert!(ft.store_term_vectors());
        assert!(ft.omit_norms());
        assert_eq!(ft.index_options(), IndexOptions::DocsAndFreqs);

        let ft = FieldType::from_field_info(&FieldInfo::stored_only("id", 1));
        assert!(!ft.store_term_vectors());
        assert_eq!(ft.index_options(), IndexOptions::None);
    }
}
