//! Inverted index that keeps document frequencies but no postings.
//!
//! Useful when only vocabulary and document-frequency information is needed, such
//! as when computing idf weights or inspecting a vocabulary. Posting iterators are
//! always empty, so the collection frequency of every term is 0.

use log::debug;

use crate::analysis::analyzer::{Analyzer, TermStream};
use crate::document::corpus::Corpus;
use crate::error::Result;
use crate::lexical::dictionary::{Dictionary, InMemoryDictionary};
use crate::lexical::index::{InvertedIndex, scan_corpus};
use crate::lexical::posting::PostingStream;

/// Document-frequency-only index.
#[derive(Debug)]
pub struct FrequencyOnlyInvertedIndex {
    analyzer: Analyzer,
    dictionary: InMemoryDictionary,
    document_frequencies: Vec<usize>,
}

impl FrequencyOnlyInvertedIndex {
    /// Scan `fields` of `corpus` and count, per term, the documents it occurs in.
    pub fn build(corpus: &dyn Corpus, analyzer: Analyzer, fields: &[String]) -> Result<Self> {
        let mut dictionary = InMemoryDictionary::new();
        let mut document_frequencies: Vec<usize> = Vec::new();

        let document_count = scan_corpus(
            corpus,
            &analyzer,
            fields,
            &mut dictionary,
            |term_id, _document_id, _term_frequency| {
                let slot = term_id as usize;
                if slot >= document_frequencies.len() {
                    document_frequencies.resize(slot + 1, 0);
                }
                document_frequencies[slot] += 1;
                Ok(())
            },
        )?;

        debug!(
            "counted document frequencies of {} terms over {} documents",
            dictionary.size(),
            document_count
        );

        Ok(FrequencyOnlyInvertedIndex {
            analyzer,
            dictionary,
            document_frequencies,
        })
    }

    /// The term dictionary.
    pub fn dictionary(&self) -> &InMemoryDictionary {
        &self.dictionary
    }
}

impl InvertedIndex for FrequencyOnlyInvertedIndex {
    fn get_terms(&self, buffer: &str) -> TermStream {
        self.analyzer.terms(buffer)
    }

    fn get_indexed_terms(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.dictionary.iter().map(|(term, _)| term))
    }

    fn get_postings_iterator(&self, _term: &str) -> PostingStream<'_> {
        Box::new(std::iter::empty())
    }

    fn get_document_frequency(&self, term: &str) -> usize {
        self.dictionary
            .get_term_id(term)
            .and_then(|term_id| self.document_frequencies.get(term_id as usize))
            .copied()
            .unwrap_or(0)
    }
}
