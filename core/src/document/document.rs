use {
    crate::document::StoredField,
    std::{
        fmt::{Display, Formatter, Result as FmtResult},
        slice::Iter as SliceIter,
        vec::IntoIter as VecIntoIter,
    },
};

/// Documents are the unit of retrieval.
///
/// A Document is an ordered list of stored fields, kept in the order they were added (for documents
/// read from an index, the order the stored fields reader delivered them). Several fields may share a
/// name.
///
/// Only the stored content of each field is meaningful on a document read back from an index; see
/// [crate::index::StoredFields::document].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    fields: Vec<StoredField>,
}

impl Document {
    /// Constructs a new document with no fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterates over the fields in the order they were added.
    pub fn iter(&self) -> SliceIter<'_, StoredField> {
        self.fields.iter()
    }

    /// Number of fields in this document, counting every value of a multi-valued field.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the document has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Adds a field to a document. Several fields may be added with the same name.
    pub fn add(&mut self, field: StoredField) {
        self.fields.push(field);
    }

    /// Removes field with the specified name from the document. If multiple fields exist with this
    /// name, this method removes the first field that has been added. If there is no field with the
    /// specified name, the document remains unchanged.
    ///
    /// Returns `true` if a field has been removed, `false` otherwise. This differs from the Lucene
    /// Java implementation which returns void.
    pub fn remove_field(&mut self, name: &str) -> bool {
        match self.fields.iter().position(|field| field.name() == name) {
            Some(i) => {
                self.fields.remove(i);
                true
            }
            None => false,
        }
    }

    /// Removes all fields with the given name from the document. If there is no field with the
    /// specified name, the document remains unchanged.
    ///
    /// Returns the number of fields removed. This differs from the Lucene Java implementation which
    /// returns void.
    pub fn remove_fields(&mut self, name: &str) -> usize {
        let start_size = self.fields.len();
        self.fields.retain(|field| field.name() != name);
        start_size - self.fields.len()
    }

    /// Returns a Vec of byte slices for the fields that have the name specified as the method parameter.
    /// This method returns an empty Vec when there are no matching fields.
    pub fn get_binary_values(&self, name: &str) -> Vec<&[u8]> {
        self.fields
            .iter()
            .filter_map(|field| {
                if field.name() == name {
                    field.value().binary_value()
                } else {
                    None
                }
            })
            .collect()
    }

    /// Returns a slice for the first binary field that has the name specified as the method
    /// parameter. This method will return `None` if no binary fields with the specified name are
    /// available. There may be non-binary fields with the same name.
    pub fn get_binary_value(&self, name: &str) -> Option<&[u8]> {
        self.fields.iter().filter(|field| field.name() == name).find_map(|field| field.value().binary_value())
    }

    /// Returns a Vec of [StoredField] references with the given name. This method returns an
    /// empty Vec when there are no matching fields.
    pub fn get_field(&self, name: &str) -> Vec<&StoredField> {
        self.fields.iter().filter(|field| field.name() == name).collect()
    }

    /// Returns all the fields in a document, in the order they were added.
    pub fn get_fields(&self) -> &[StoredField] {
        self.fields.as_slice()
    }

    /// Returns a Vec of string values of the field specified as the method parameter. This method
    /// returns an empty Vec when there are no matching string fields. Numeric and binary values are
    /// skipped; use [Self::get_field] to get at them.
    pub fn get_values(&self, name: &str) -> Vec<&str> {
        self.fields
            .iter()
            .filter_map(|field| {
                if field.name() == name {
                    field.value().string_value()
                } else {
                    None
                }
            })
            .collect()
    }

    /// Returns the string value of the field with the given name if any exist in this document, or
    /// `None`. If multiple fields exist with this name, this method returns the first string value
    /// added.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.iter().filter(|field| field.name() == name).find_map(|field| field.value().string_value())
    }

    /// Removes all fields from the document.
    pub fn clear(&mut self) {
        self.fields.clear();
    }
}

impl Display for Document {
    /// Prints the fields of a document for human consumption.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Document<")?;

        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }

            write!(f, "{}", field)?;
        }

        write!(f, ">")
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a StoredField;
    type IntoIter = SliceIter<'a, StoredField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl IntoIterator for Document {
    type Item = StoredField;
    type IntoIter = VecIntoIter<StoredField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl FromIterator<StoredField> for Document {
    fn from_iter<I: IntoIterator<Item = StoredField>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
