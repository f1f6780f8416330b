//! Per-document scoring used during query evaluation.
//!
//! A ranker is stateful between [`Ranker::reset`] and [`Ranker::evaluate`]: the
//! evaluator resets it for a candidate document, feeds it one update per query term
//! present in that document, and then asks for the score.

use std::fmt::Debug;

use crate::lexical::index::InvertedIndex;
use crate::lexical::posting::Posting;

/// Trait for document rankers.
pub trait Ranker: Send + Debug {
    /// Start scoring `document_id`, forgetting any previous state.
    fn reset(&mut self, document_id: u64);

    /// Account for one query term found in the current document. `multiplicity` is
    /// how many times the term occurs in the query.
    fn update(&mut self, term: &str, multiplicity: usize, posting: &Posting);

    /// Score of the current document.
    fn evaluate(&self) -> f64;

    /// Get the name of this ranker.
    fn name(&self) -> &'static str;
}

/// Scores a document by how often the query terms occur in it.
///
/// The score is the sum over matched terms of query multiplicity times term
/// frequency.
#[derive(Debug, Clone, Default)]
pub struct SimpleRanker {
    document_id: Option<u64>,
    score: f64,
}

impl SimpleRanker {
    /// Create a new ranker.
    pub fn new() -> Self {
        Self::default()
    }

    /// The document currently being scored.
    pub fn document_id(&self) -> Option<u64> {
        self.document_id
    }
}

impl Ranker for SimpleRanker {
    fn reset(&mut self, document_id: u64) {
        self.document_id = Some(document_id);
        self.score = 0.0;
    }

    fn update(&mut self, _term: &str, multiplicity: usize, posting: &Posting) {
        self.score += multiplicity as f64 * posting.term_frequency as f64;
    }

    fn evaluate(&self) -> f64 {
        self.score
    }

    fn name(&self) -> &'static str {
        "simple"
    }
}

/// Classic tf-idf ranker.
///
/// Each matched term contributes `multiplicity * (1 + ln tf) * ln(N / df)`, where `N`
/// is the number of documents in the collection and `df` comes from the index. A term
/// found in every document contributes nothing.
#[derive(Debug)]
pub struct TfIdfRanker<'a> {
    index: &'a dyn InvertedIndex,
    document_count: usize,
    score: f64,
}

impl<'a> TfIdfRanker<'a> {
    /// Create a ranker over `index`, which covers `document_count` documents.
    pub fn new(index: &'a dyn InvertedIndex, document_count: usize) -> Self {
        TfIdfRanker {
            index,
            document_count,
            score: 0.0,
        }
    }

    fn idf(&self, term: &str) -> f64 {
        let document_frequency = self.index.get_document_frequency(term);
        if document_frequency == 0 || self.document_count == 0 {
            return 0.0;
        }
        (self.document_count as f64 / document_frequency as f64)
            .ln()
            .max(0.0)
    }
}

impl Ranker for TfIdfRanker<'_> {
    fn reset(&mut self, _document_id: u64) {
        self.score = 0.0;
    }

    fn update(&mut self, term: &str, multiplicity: usize, posting: &Posting) {
        if posting.term_frequency == 0 {
            return;
        }
        let tf = 1.0 + (posting.term_frequency as f64).ln();
        self.score += multiplicity as f64 * tf * self.idf(term);
    }

    fn evaluate(&self) -> f64 {
        self.score
    }

    fn name(&self) -> &'static str {
        "tfidf"
    }
}
