use {
    crate::index::Status,
    std::collections::HashSet,
};

/// Decides, before a stored field is decoded, whether a visitor wants its value.
///
/// With no accept-set every field is wanted. Otherwise only fields whose name is in the set are.
/// The filter never answers [Status::Stop]: a visitor using it always reads every requested field of
/// every document.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FieldFilter {
    fields_to_add: Option<HashSet<String>>,
}

impl FieldFilter {
    /// A filter that accepts every field.
    pub fn all() -> Self {
        Self {
            fields_to_add: None,
        }
    }

    /// A filter that accepts only the named fields; `None` accepts every field.
    pub fn new(fields_to_add: Option<HashSet<String>>) -> Self {
        Self {
            fields_to_add,
        }
    }

    /// A filter that accepts only the given field names.
    pub fn from_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields_to_add: Some(fields.into_iter().map(Into::into).collect()),
        }
    }

    /// The accept-set, or `None` if every field is accepted.
    pub fn fields_to_add(&self) -> Option<&HashSet<String>> {
        self.fields_to_add.as_ref()
    }

    /// Returns true if the named field should be loaded.
    pub fn accepts(&self, field_name: &str) -> bool {
        match &self.fields_to_add {
            None => true,
            Some(fields) => fields.contains(field_name),
        }
    }

    /// [Status::Yes] if the named field should be loaded, [Status::No] otherwise.
    pub fn needs_field(&self, field_name: &str) -> Status {
        if self.accepts(field_name) {
            Status::Yes
        } else {
            Status::No
        }
    }
}

impl From<HashSet<String>> for FieldFilter {
    fn from(fields_to_add: HashSet<String>) -> Self {
        Self::new(Some(fields_to_add))
    }
}
