//! Postings and posting lists.
//!
//! A [`Posting`] records that a term occurs `term_frequency` times in one document.
//! A [`PostingList`] holds the postings of a single term in strictly increasing
//! document-id order. Lists are filled once by the index builder through
//! [`PostingList::append_posting`] and are read-only afterwards.
//!
//! Two representations are provided:
//!
//! - [`InMemoryPostingList`] stores postings directly in a vector.
//! - [`compressed::CompressedInMemoryPostingList`] stores document-id gaps and term
//!   frequencies as codec-encoded bits and decodes them lazily while iterating.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::error::{PilumError, Result};

pub mod compressed;

pub use compressed::CompressedInMemoryPostingList;

/// A single posting in a posting list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Posting {
    /// Document ID.
    pub document_id: u64,
    /// Term frequency in the document.
    pub term_frequency: u64,
}

impl Posting {
    /// Create a new posting.
    pub fn new(document_id: u64, term_frequency: u64) -> Self {
        Posting {
            document_id,
            term_frequency,
        }
    }
}

/// Lazy stream of postings in ascending document-id order.
pub type PostingStream<'a> = Box<dyn Iterator<Item = Posting> + 'a>;

/// Trait for posting list representations.
pub trait PostingList: Send + Sync + Debug {
    /// Append a posting. Its document id must be larger than every id appended
    /// before, and its term frequency must be positive.
    fn append_posting(&mut self, posting: Posting) -> Result<()>;

    /// A fresh iterator over the postings, starting from the first one.
    fn get_iterator(&self) -> PostingStream<'_>;

    /// Number of postings in the list.
    fn get_length(&self) -> usize;

    /// Size of the encoded representation in bits, 0 for uncompressed lists.
    fn size_in_bits(&self) -> usize {
        0
    }
}

/// Check the ordering and frequency preconditions of an append.
pub(crate) fn check_append(last_document_id: Option<u64>, posting: &Posting) -> Result<()> {
    if posting.term_frequency == 0 {
        return Err(PilumError::index(format!(
            "posting for document {} has a zero term frequency",
            posting.document_id
        )));
    }
    if let Some(last) = last_document_id {
        if posting.document_id <= last {
            return Err(PilumError::index(format!(
                "document {} appended after document {last}; postings must be strictly increasing",
                posting.document_id
            )));
        }
    }
    Ok(())
}

/// A posting list backed by a vector.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InMemoryPostingList {
    postings: Vec<Posting>,
}

impl InMemoryPostingList {
    /// Create a new empty posting list.
    pub fn new() -> Self {
        InMemoryPostingList {
            postings: Vec::new(),
        }
    }

    /// The postings as a slice.
    pub fn postings(&self) -> &[Posting] {
        &self.postings
    }
}

impl PostingList for InMemoryPostingList {
    fn append_posting(&mut self, posting: Posting) -> Result<()> {
        check_append(self.postings.last().map(|p| p.document_id), &posting)?;
        self.postings.push(posting);
        Ok(())
    }

    fn get_iterator(&self) -> PostingStream<'_> {
        Box::new(self.postings.iter().copied())
    }

    fn get_length(&self) -> usize {
        self.postings.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posting_creation() {
        let posting = Posting::new(3, 2);
        assert_eq!(posting.document_id, 3);
        assert_eq!(posting.term_frequency, 2);
    }

    #[test]
    fn test_append_and_iterate() {
        let mut list = InMemoryPostingList::new();
        assert_eq!(list.get_length(), 0);
        assert_eq!(list.get_iterator().count(), 0);

        list.append_posting(Posting::new(1, 3)).unwrap();
        list.append_posting(Posting::new(4, 1)).unwrap();
        list.append_posting(Posting::new(9, 2)).unwrap();

        assert_eq!(list.get_length(), 3);
        let doc_ids: Vec<u64> = list.get_iterator().map(|p| p.document_id).collect();
        assert_eq!(doc_ids, vec![1, 4, 9]);

        // Each call restarts from the beginning.
        assert_eq!(list.get_iterator().next(), Some(Posting::new(1, 3)));
        assert_eq!(list.size_in_bits(), 0);
    }

    #[test]
    fn test_rejects_out_of_order_append() {
        let mut list = InMemoryPostingList::new();
        list.append_posting(Posting::new(5, 1)).unwrap();

        assert!(matches!(
            list.append_posting(Posting::new(2, 1)),
            Err(PilumError::Index(_))
        ));
        assert!(list.append_posting(Posting::new(5, 1)).is_err());
        assert_eq!(list.get_length(), 1);
    }

    #[test]
    fn test_rejects_zero_frequency() {
        let mut list = InMemoryPostingList::new();
        assert!(list.append_posting(Posting::new(0, 0)).is_err());
        assert!(list.append_posting(Posting::new(0, 1)).is_ok());
    }
}
