use serde::{Deserialize, Serialize};

/// One roster row after header normalization.
///
/// `id` and `section` are always trimmed. `section` is kept as written in the
/// file; see [`crate::normalize_section`] for its canonical form.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct StudentRecord {
    pub name: String,
    pub id: String,
    pub section: String,
}

impl StudentRecord {
    pub fn new<A, B, C>(name: A, id: B, section: C) -> Self
    where
        A: Into<String>,
        B: Into<String>,
        C: Into<String>,
    {
        Self {
            name: name.into(),
            id: id.into(),
            section: section.into(),
        }
    }

    /// Exact comparison of the lower-cased record id with a query already
    /// passed through [`normalize_id`].
    pub fn id_matches(&self, normalized: &str) -> bool {
        self.id.to_lowercase() == normalized
    }
}

/// Search form of an id query: trimmed and lower-cased.
pub fn normalize_id(query: &str) -> String {
    query.trim().to_lowercase()
}
