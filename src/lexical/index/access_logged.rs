//! Wrapper index that records every posting handed out.
//!
//! Every posting pulled from an iterator returned by
//! [`get_postings_iterator`](InvertedIndex::get_postings_iterator) is appended to the
//! access history as a `(term, document_id)` pair, in the order postings are
//! consumed. Postings that are never pulled are not recorded, which makes the
//! history a direct measure of how much of each list a query evaluator touched.

use std::fmt;

use parking_lot::Mutex;

use crate::analysis::analyzer::TermStream;
use crate::lexical::index::InvertedIndex;
use crate::lexical::posting::{Posting, PostingStream};

/// An inverted index wrapper with an access log.
pub struct AccessLoggedInvertedIndex<I: InvertedIndex> {
    wrapped: I,
    accesses: Mutex<Vec<(String, u64)>>,
}

impl<I: InvertedIndex> AccessLoggedInvertedIndex<I> {
    /// Wrap `index` with an empty history.
    pub fn new(index: I) -> Self {
        AccessLoggedInvertedIndex {
            wrapped: index,
            accesses: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of the accesses made so far.
    pub fn get_history(&self) -> Vec<(String, u64)> {
        self.accesses.lock().clone()
    }

    /// Forget all recorded accesses.
    pub fn clear_history(&self) {
        self.accesses.lock().clear();
    }

    /// The wrapped index.
    pub fn inner(&self) -> &I {
        &self.wrapped
    }

    /// Unwrap, discarding the history.
    pub fn into_inner(self) -> I {
        self.wrapped
    }
}

impl<I: InvertedIndex> fmt::Debug for AccessLoggedInvertedIndex<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessLoggedInvertedIndex")
            .field("wrapped", &self.wrapped)
            .field("accesses", &self.accesses.lock().len())
            .finish()
    }
}

impl<I: InvertedIndex> InvertedIndex for AccessLoggedInvertedIndex<I> {
    fn get_terms(&self, buffer: &str) -> TermStream {
        self.wrapped.get_terms(buffer)
    }

    fn get_indexed_terms(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        self.wrapped.get_indexed_terms()
    }

    fn get_postings_iterator(&self, term: &str) -> PostingStream<'_> {
        Box::new(AccessLoggedIterator {
            term: term.to_string(),
            inner: self.wrapped.get_postings_iterator(term),
            accesses: &self.accesses,
        })
    }

    fn get_document_frequency(&self, term: &str) -> usize {
        self.wrapped.get_document_frequency(term)
    }
}

struct AccessLoggedIterator<'a> {
    term: String,
    inner: PostingStream<'a>,
    accesses: &'a Mutex<Vec<(String, u64)>>,
}

impl Iterator for AccessLoggedIterator<'_> {
    type Item = Posting;

    fn next(&mut self) -> Option<Self::Item> {
        let posting = self.inner.next()?;
        self.accesses
            .lock()
            .push((self.term.clone(), posting.document_id));
        Some(posting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::Analyzer;
    use crate::document::corpus::InMemoryCorpus;
    use crate::lexical::index::{InMemoryInvertedIndex, InvertedIndexConfig};

    fn build() -> AccessLoggedInvertedIndex<InMemoryInvertedIndex> {
        let mut corpus = InMemoryCorpus::new();
        corpus.add_document([("body", "a b")]);
        corpus.add_document([("body", "b c")]);
        corpus.add_document([("body", "a b c")]);
        let index = InMemoryInvertedIndex::build(
            &corpus,
            Analyzer::simple().unwrap(),
            InvertedIndexConfig::default(),
        )
        .unwrap();
        AccessLoggedInvertedIndex::new(index)
    }

    #[test]
    fn test_records_consumed_postings() {
        let index = build();
        assert!(index.get_history().is_empty());

        let mut b = index.get_postings_iterator("b");
        assert_eq!(b.next().map(|p| p.document_id), Some(0));
        let a: Vec<u64> = index
            .get_postings_iterator("a")
            .map(|p| p.document_id)
            .collect();
        assert_eq!(a, vec![0, 2]);
        assert_eq!(b.next().map(|p| p.document_id), Some(1));

        assert_eq!(
            index.get_history(),
            vec![
                ("b".to_string(), 0),
                ("a".to_string(), 0),
                ("a".to_string(), 2),
                ("b".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_other_operations_are_not_logged() {
        let index = build();
        assert_eq!(index.get_document_frequency("c"), 2);
        assert_eq!(index.get_terms("A B").count(), 2);
        assert_eq!(index.get_postings_iterator("zzz").count(), 0);
        assert!(index.get_history().is_empty());

        let _ = index.get_postings_iterator("c").count();
        assert_eq!(index.get_history().len(), 2);
        index.clear_history();
        assert!(index.get_history().is_empty());
    }
}
