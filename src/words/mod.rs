//! Word list model: an ordered collection of terms and descriptions

mod sample;
mod word;

pub use sample::sample_word_list;
pub use word::Word;

use crate::error::{Result, WordListError};
use rustc_hash::FxHashSet;

/// Ordered list of entries keyed by term text.
///
/// Terms are not required to be unique. Removal drops every matching entry
/// while update only touches the first one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<Word>,
    /// Monotonic version counter, bumped on every state change
    version: u64,
}

impl WordList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the end of the list
    pub fn add_word(&mut self, term: impl Into<String>, description: impl Into<String>) {
        let word = Word::new(term, description);
        if self.find(word.term()).is_some() {
            log::debug!("adding duplicate term {:?}", word.term());
        }
        self.words.push(word);
        self.version += 1;
    }

    /// Remove all entries with the given term. Returns how many were removed.
    pub fn remove_word(&mut self, term: &str) -> usize {
        let before = self.words.len();
        self.words.retain(|word| word.term() != term);
        let removed = before - self.words.len();

        if removed > 0 {
            self.version += 1;
            log::debug!("removed {} entries for term {:?}", removed, term);
        } else {
            log::trace!("remove of absent term {:?} ignored", term);
        }
        removed
    }

    /// Overwrite the description of the first entry with the given term
    pub fn update_word(&mut self, term: &str, description: impl Into<String>) -> Result<()> {
        let word = self
            .words
            .iter_mut()
            .find(|word| word.term() == term)
            .ok_or_else(|| WordListError::NotFound(term.to_string()))?;

        word.description = description.into();
        self.version += 1;
        Ok(())
    }

    /// First entry with the given term
    pub fn find(&self, term: &str) -> Option<&Word> {
        self.words.iter().find(|word| word.term() == term)
    }

    pub fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// All terms in list order
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(Word::term)
    }

    /// Terms that occur more than once, in order of first appearance
    pub fn duplicate_terms(&self) -> Vec<&str> {
        let mut seen = FxHashSet::default();
        let mut reported = FxHashSet::default();
        let mut duplicates = Vec::new();

        for term in self.terms() {
            if !seen.insert(term) && reported.insert(term) {
                duplicates.push(term);
            }
        }
        duplicates
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

impl<T, D> FromIterator<(T, D)> for WordList
where
    T: Into<String>,
    D: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (T, D)>>(iter: I) -> Self {
        let mut list = WordList::new();
        for (term, description) in iter {
            list.add_word(term, description);
        }
        list
    }
}
