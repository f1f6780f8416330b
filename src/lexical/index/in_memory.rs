//! In-memory inverted index built in a single pass.
//!
//! Construction follows single-pass in-memory indexing with the whole corpus
//! treated as one block: documents are scanned in corpus order, so every posting
//! list is filled in ascending document-id order and never needs sorting. Only
//! posting lists can be compressed; the dictionary is always kept as is.
//!
//! # Examples
//!
//! ```
//! use pilum::analysis::analyzer::Analyzer;
//! use pilum::document::corpus::InMemoryCorpus;
//! use pilum::lexical::index::{InMemoryInvertedIndex, InvertedIndex, InvertedIndexConfig};
//!
//! let mut corpus = InMemoryCorpus::new();
//! corpus.add_document([("body", "apple banana apple")]);
//! corpus.add_document([("body", "banana cherry")]);
//!
//! let index = InMemoryInvertedIndex::build(
//!     &corpus,
//!     Analyzer::simple().unwrap(),
//!     InvertedIndexConfig::new(["body"]),
//! )
//! .unwrap();
//!
//! assert_eq!(index.get_document_frequency("banana"), 2);
//! assert_eq!(index.get_collection_frequency("apple"), 2);
//! assert_eq!(index.get_document_frequency("durian"), 0);
//! ```

use std::collections::BTreeMap;

use log::debug;

use crate::analysis::analyzer::{Analyzer, TermStream};
use crate::document::corpus::Corpus;
use crate::error::{PilumError, Result};
use crate::lexical::dictionary::{Dictionary, InMemoryDictionary};
use crate::lexical::index::config::InvertedIndexConfig;
use crate::lexical::index::stats::PostingStats;
use crate::lexical::index::{InvertedIndex, scan_corpus};
use crate::lexical::posting::{Posting, PostingList, PostingStream};

/// An inverted index held entirely in memory.
#[derive(Debug)]
pub struct InMemoryInvertedIndex {
    analyzer: Analyzer,
    config: InvertedIndexConfig,
    dictionary: InMemoryDictionary,
    /// Slot `i` holds the postings of dictionary id `i`.
    posting_lists: Vec<Box<dyn PostingList>>,
    document_count: usize,
}

impl InMemoryInvertedIndex {
    /// Build an index over `corpus`.
    pub fn build(
        corpus: &dyn Corpus,
        analyzer: Analyzer,
        config: InvertedIndexConfig,
    ) -> Result<Self> {
        debug!(
            "building inverted index over {} documents, fields {:?}, compression {:?}",
            corpus.size(),
            config.fields,
            config.compression
        );

        let mut dictionary = InMemoryDictionary::new();
        let mut posting_lists: Vec<Box<dyn PostingList>> = Vec::new();
        let compression = config.compression;

        let document_count = scan_corpus(
            corpus,
            &analyzer,
            &config.fields,
            &mut dictionary,
            |term_id, document_id, term_frequency| {
                let slot = term_id as usize;
                if slot == posting_lists.len() {
                    posting_lists.push(compression.new_posting_list());
                } else if slot > posting_lists.len() {
                    return Err(PilumError::index(format!(
                        "term id {term_id} skips past {} posting lists",
                        posting_lists.len()
                    )));
                }
                posting_lists[slot].append_posting(Posting::new(document_id, term_frequency))
            },
        )?;

        debug!(
            "indexed {} documents, {} terms",
            document_count,
            dictionary.size()
        );

        Ok(InMemoryInvertedIndex {
            analyzer,
            config,
            dictionary,
            posting_lists,
            document_count,
        })
    }

    /// The configuration used at build time.
    pub fn config(&self) -> &InvertedIndexConfig {
        &self.config
    }

    /// The term dictionary.
    pub fn dictionary(&self) -> &InMemoryDictionary {
        &self.dictionary
    }

    /// Number of documents scanned at build time.
    pub fn document_count(&self) -> usize {
        self.document_count
    }

    /// The posting list of `term`, if it is in the vocabulary.
    pub fn posting_list(&self, term: &str) -> Option<&dyn PostingList> {
        let term_id = self.dictionary.get_term_id(term)?;
        self.posting_lists
            .get(term_id as usize)
            .map(|list| list.as_ref())
    }

    /// Gather statistics about the posting lists.
    pub fn statistics(&self) -> PostingStats {
        let mut stats = PostingStats {
            posting_list_count: self.posting_lists.len(),
            ..PostingStats::default()
        };

        for list in &self.posting_lists {
            stats.total_postings += list.get_length();
            stats.max_posting_list_size = stats.max_posting_list_size.max(list.get_length());
            stats.compressed_bits += list.size_in_bits();

            let mut previous: Option<u64> = None;
            for posting in list.get_iterator() {
                let gap = match previous {
                    Some(previous) => posting.document_id - previous,
                    None => posting.document_id,
                };
                previous = Some(posting.document_id);
                *stats.gap_histogram.entry(gap).or_insert(0) += 1;
                *stats
                    .frequency_histogram
                    .entry(posting.term_frequency)
                    .or_insert(0) += 1;
            }
        }

        if stats.posting_list_count > 0 {
            stats.avg_postings_per_list =
                stats.total_postings as f64 / stats.posting_list_count as f64;
        }
        stats
    }

    /// Per-term view of the index, keyed by term, for inspection and tests.
    pub fn to_map(&self) -> BTreeMap<String, Vec<Posting>> {
        self.dictionary
            .iter()
            .map(|(term, term_id)| {
                let postings = self.posting_lists[term_id as usize].get_iterator().collect();
                (term.to_owned(), postings)
            })
            .collect()
    }
}

impl InvertedIndex for InMemoryInvertedIndex {
    fn get_terms(&self, buffer: &str) -> TermStream {
        self.analyzer.terms(buffer)
    }

    fn get_indexed_terms(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.dictionary.iter().map(|(term, _)| term))
    }

    fn get_postings_iterator(&self, term: &str) -> PostingStream<'_> {
        match self.posting_list(term) {
            Some(list) => list.get_iterator(),
            None => Box::new(std::iter::empty()),
        }
    }

    fn get_document_frequency(&self, term: &str) -> usize {
        self.posting_list(term).map_or(0, |list| list.get_length())
    }
}
