use {
    crate::index::{FieldInfo, IndexOptions},
    std::{
        collections::HashMap,
        io::{Error as IoError, ErrorKind as IoErrorKind, Result as IoResult},
        slice::Iter as SliceIter,
    },
};

/// Collection of [FieldInfo]s (accessible by number or by name).
#[derive(Clone, Debug, Default)]
pub struct FieldInfos {
    has_postings: bool,
    has_vectors: bool,
    has_norms: bool,

    // Insertion order, used for iteration.
    values: Vec<FieldInfo>,

    // Indexes into `values`. Field numbers may be sparse.
    by_number: HashMap<i32, usize>,
    by_name: HashMap<String, usize>,
}

impl TryFrom<&[FieldInfo]> for FieldInfos {
    type Error = IoError;

    fn try_from(infos: &[FieldInfo]) -> IoResult<Self> {
        let mut has_postings = false;
        let mut has_vectors = false;
        let mut has_norms = false;
        let mut values = Vec::with_capacity(infos.len());
        let mut by_number = HashMap::with_capacity(infos.len());
        let mut by_name = HashMap::with_capacity(infos.len());

        for info in infos {
            if info.number < 0 {
                return Err(IoError::new(
                    IoErrorKind::InvalidData,
                    format!("invalid field number: {} for field {}", info.number, info.name),
                ));
            }

            if let Some(previous) = by_number.get(&info.number) {
                let previous: &FieldInfo = &values[*previous];
                return Err(IoError::new(
                    IoErrorKind::InvalidData,
                    format!("duplicate field numbers: {} and {} have: {}", previous.name, info.name, info.number),
                ));
            }

            if let Some(previous) = by_name.get(&info.name) {
                let previous: &FieldInfo = &values[*previous];
                return Err(IoError::new(
                    IoErrorKind::InvalidData,
                    format!("duplicate field names: {} and {} have: {}", previous.number, info.number, info.name),
                ));
            }

            by_number.insert(info.number, values.len());
            by_name.insert(info.name.clone(), values.len());
            values.push(info.clone());

            has_postings |= !matches!(info.get_index_options(), IndexOptions::None);
            has_vectors |= info.has_vectors();
            has_norms |= info.has_norms();
        }

        Ok(Self {
            has_postings,
            has_vectors,
            has_norms,
            values,
            by_number,
            by_name,
        })
    }
}

impl FieldInfos {
    /// Returns true if any fields have postings
    pub fn has_postings(&self) -> bool {
        self.has_postings
    }

    /// Returns true if any fields have vectors
    pub fn has_vectors(&self) -> bool {
        self.has_vectors
    }

    /// Returns true if any fields have norms
    pub fn has_norms(&self) -> bool {
        self.has_norms
    }

    /// Returns the number of fields
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if there are no fields
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the fields in the order they were given.
    pub fn iter(&self) -> SliceIter<'_, FieldInfo> {
        self.values.iter()
    }

    /// Return the [FieldInfo] object referenced by the field name, or `None` if the field does not exist.
    pub fn field_info(&self, field_name: &str) -> Option<&FieldInfo> {
        self.by_name.get(field_name).map(|i| &self.values[*i])
    }

    /// Return the [FieldInfo] object referenced by the field number, or `None` if the field does not exist.
    pub fn field_info_by_number(&self, field_number: i32) -> Option<&FieldInfo> {
        self.by_number.get(&field_number).map(|i| &self.values[*i])
    }

    /// Position of the named field in [Self::iter] order.
    pub(crate) fn ordinal(&self, field_name: &str) -> Option<usize> {
        self.by_name.get(field_name).copied()
    }

    /// The field at an ordinal returned by [Self::ordinal].
    pub(crate) fn by_ordinal(&self, ordinal: usize) -> &FieldInfo {
        &self.values[ordinal]
    }
}

impl<'a> IntoIterator for &'a FieldInfos {
    type Item = &'a FieldInfo;
    type IntoIter = SliceIter<'a, FieldInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use {
        super::FieldInfos,
        crate::index::{FieldInfo, IndexOptions},
        pretty_assertions::assert_eq,
        std::io::ErrorKind as IoErrorKind,
        test_log::test,
    };

    fn infos() -> Vec<FieldInfo> {
        vec![
            FieldInfo::new("title", 0, false, false, false, IndexOptions::DocsAndFreqsAndPositions).unwrap(),
            FieldInfo::stored_only("views", 2),
            FieldInfo::new("body", 1, true, true, false, IndexOptions::DocsAndFreqs).unwrap(),
        ]
    }

    #[test]
    fn test_lookup() {
        let fis = FieldInfos::try_from(infos().as_slice()).unwrap();
        assert_eq!(fis.len(), 3);
        assert!(!fis.is_empty());
        assert_eq!(fis.field_info("views").map(|fi| fi.number), Some(2));
        assert_eq!(fis.field_info_by_number(1).map(|fi| fi.get_name()), Some("body"));
        assert!(fis.field_info("missing").is_none());
        assert!(fis.field_info_by_number(3).is_none());
        assert!(fis.field_info_by_number(-1).is_none());
        assert!(fis.has_postings());
        assert!(fis.has_vectors());
        assert!(fis.has_norms());

        let names: Vec<&str> = fis.iter().map(|fi| fi.get_name()).collect();
        assert_eq!(names, vec!["title", "views", "body"]);
    }

    #[test]
    fn test_stored_only_aggregates() {
        let fis = FieldInfos::try_from([FieldInfo::stored_only("id", 0)].as_slice()).unwrap();
        assert!(!fis.has_postings());
        assert!(!fis.has_vectors());
        assert!(!fis.has_norms());
    }

    #[test]
    fn test_duplicates_rejected() {
        let mut dup_number = infos();
        dup_number.push(FieldInfo::stored_only("other", 2));
        let e = FieldInfos::try_from(dup_number.as_slice()).unwrap_err();
        assert_eq!(e.kind(), IoErrorKind::InvalidData);

        let mut dup_name = infos();
        dup_name.push(FieldInfo::stored_only("title", 7));
        let e = FieldInfos::try_from(dup_name.as_slice()).unwrap_err();
        assert_eq!(e.to_string(), "duplicate field names: 0 and 7 have: title");

        let e = FieldInfos::try_from([FieldInfo::stored_only("neg", -1)].as_slice()).unwrap_err();
        assert_eq!(e.to_string(), "invalid field number: -1 for field neg");
    }

    #[test]
    fn test_sparse_field_numbers() {
        let infos = [FieldInfo::stored_only("big", i32::MAX), FieldInfo::stored_only("small", 0)];
        let fis = FieldInfos::try_from(infos.as_slice()).unwrap();
        assert_eq!(fis.len(), 2);
        assert_eq!(fis.field_info_by_number(i32::MAX).map(|fi| fi.get_name()), Some("big"));
        assert_eq!(fis.field_info_by_number(0).map(|fi| fi.get_name()), Some("small"));
        assert!(fis.field_info_by_number(1).is_none());
        assert_eq!(fis.ordinal("small"), Some(1));
        assert_eq!(fis.by_ordinal(0).number, i32::MAX);
    }
}
