//! Term dictionary mapping terms to dense integer identifiers.
//!
//! Identifiers are assigned contiguously from 0 in first-seen order and are never
//! reused, which lets the inverted index keep its posting lists in a plain vector
//! indexed by term id.
//!
//! # Examples
//!
//! ```
//! use pilum::lexical::dictionary::{Dictionary, InMemoryDictionary};
//!
//! let mut dictionary = InMemoryDictionary::new();
//! assert_eq!(dictionary.add_if_absent("apple"), 0);
//! assert_eq!(dictionary.add_if_absent("banana"), 1);
//! assert_eq!(dictionary.add_if_absent("apple"), 0);
//! assert_eq!(dictionary.get_term_id("banana"), Some(1));
//! assert_eq!(dictionary.get_term_id("cherry"), None);
//! ```

use std::fmt::Debug;

use ahash::AHashMap;

/// Trait for term dictionaries.
pub trait Dictionary: Send + Sync + Debug {
    /// Return the id of `term`, assigning the next free id if it is new.
    fn add_if_absent(&mut self, term: &str) -> u64;

    /// Return the id of `term`, if it is known.
    fn get_term_id(&self, term: &str) -> Option<u64>;

    /// Iterate over `(term, id)` pairs in insertion order.
    fn iter(&self) -> Box<dyn Iterator<Item = (&str, u64)> + '_>;

    /// Number of distinct terms.
    fn size(&self) -> usize;
}

/// A dictionary held in memory.
#[derive(Clone, Debug, Default)]
pub struct InMemoryDictionary {
    ids: AHashMap<String, u64>,
    terms: Vec<String>,
}

impl InMemoryDictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        InMemoryDictionary {
            ids: AHashMap::new(),
            terms: Vec::new(),
        }
    }

    /// The term with the given id, if any.
    pub fn get_term(&self, term_id: u64) -> Option<&str> {
        usize::try_from(term_id)
            .ok()
            .and_then(|index| self.terms.get(index))
            .map(String::as_str)
    }
}

impl Dictionary for InMemoryDictionary {
    fn add_if_absent(&mut self, term: &str) -> u64 {
        if let Some(&term_id) = self.ids.get(term) {
            return term_id;
        }
        let term_id = self.terms.len() as u64;
        self.ids.insert(term.to_owned(), term_id);
        self.terms.push(term.to_owned());
        term_id
    }

    fn get_term_id(&self, term: &str) -> Option<u64> {
        self.ids.get(term).copied()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (&str, u64)> + '_> {
        Box::new(
            self.terms
                .iter()
                .enumerate()
                .map(|(term_id, term)| (term.as_str(), term_id as u64)),
        )
    }

    fn size(&self) -> usize {
        self.terms.len()
    }
}
