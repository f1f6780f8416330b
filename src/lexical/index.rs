//! Inverted index abstraction and implementations.
//!
//! An index maps each term of its vocabulary to a posting list. Terms that were
//! never indexed are not an error anywhere: they have document frequency 0 and an
//! empty posting iterator.
//!
//! # Implementations
//!
//! - [`in_memory::InMemoryInvertedIndex`] - full index with plain or compressed lists
//! - [`frequency_only::FrequencyOnlyInvertedIndex`] - document frequencies only
//! - [`access_logged::AccessLoggedInvertedIndex`] - records every posting it hands out

use std::fmt::Debug;

use ahash::AHashMap;
use log::trace;

use crate::analysis::analyzer::{Analyzer, TermStream};
use crate::document::corpus::Corpus;
use crate::error::Result;
use crate::lexical::dictionary::{Dictionary, InMemoryDictionary};
use crate::lexical::posting::PostingStream;

pub mod access_logged;
pub mod config;
pub mod frequency_only;
pub mod in_memory;
pub mod stats;

pub use access_logged::AccessLoggedInvertedIndex;
pub use config::{CompressionConfig, InvertedIndexConfig};
pub use frequency_only::FrequencyOnlyInvertedIndex;
pub use in_memory::InMemoryInvertedIndex;
pub use stats::PostingStats;

/// Trait for inverted indexes.
pub trait InvertedIndex: Send + Sync + Debug {
    /// Normalized terms of `buffer`, processed exactly as indexed text is. The
    /// terms need not occur in the index.
    fn get_terms(&self, buffer: &str) -> TermStream;

    /// All vocabulary terms, in no particular order.
    fn get_indexed_terms(&self) -> Box<dyn Iterator<Item = &str> + '_>;

    /// Postings of `term` in ascending document-id order; empty for unknown terms.
    fn get_postings_iterator(&self, term: &str) -> PostingStream<'_>;

    /// Number of documents containing `term`.
    fn get_document_frequency(&self, term: &str) -> usize;

    /// Total number of occurrences of `term` across the corpus.
    fn get_collection_frequency(&self, term: &str) -> u64 {
        self.get_postings_iterator(term)
            .map(|posting| posting.term_frequency)
            .sum()
    }

    /// Check if `term` occurs in at least one document.
    fn contains(&self, term: &str) -> bool {
        self.get_document_frequency(term) > 0
    }
}

/// Single-pass, single-block scan of a corpus.
///
/// For each document the terms of all `fields` are counted, and `sink` receives one
/// `(term_id, document_id, term_frequency)` call per distinct term, in the order the
/// terms first appear in the document. New terms are added to `dictionary` before
/// their first call, so ids always arrive in contiguous, increasing order.
pub(crate) fn scan_corpus<F>(
    corpus: &dyn Corpus,
    analyzer: &Analyzer,
    fields: &[String],
    dictionary: &mut InMemoryDictionary,
    mut sink: F,
) -> Result<usize>
where
    F: FnMut(u64, u64, u64) -> Result<()>,
{
    let mut document_count = 0;
    let mut slots: AHashMap<String, usize> = AHashMap::new();
    let mut counts: Vec<(String, u64)> = Vec::new();

    for document in corpus.iter() {
        slots.clear();
        counts.clear();

        for field in fields {
            for term in analyzer.terms(document.get_field(field)) {
                match slots.get(&term) {
                    Some(&slot) => counts[slot].1 += 1,
                    None => {
                        slots.insert(term.clone(), counts.len());
                        counts.push((term, 1));
                    }
                }
            }
        }

        trace!(
            "document {} has {} distinct terms",
            document.document_id(),
            counts.len()
        );
        for (term, term_frequency) in &counts {
            let term_id = dictionary.add_if_absent(term);
            sink(term_id, document.document_id(), *term_frequency)?;
        }
        document_count += 1;
    }

    Ok(document_count)
}
