//! A single word list entry

/// A term and its description
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Word {
    term: String,
    pub(super) description: String,
}

impl Word {
    /// Create a new entry
    pub fn new(term: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            description: description.into(),
        }
    }

    /// The lookup key of this entry. Fixed for the lifetime of the entry.
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
