//! N-of-M ranked query evaluation.
//!
//! A query with `M` distinct terms matches every document that contains at least `N`
//! of them, where `N = max(1, min(M, floor(T * M)))` for the match threshold `T`.
//! `T = 1` is an AND over the query terms; any `T` small enough to give `N = 1` is an OR.
//! For example, with the terms `orange apple banana` and `N = 2`, the query is
//! equivalent to `(orange AND apple) OR (orange AND banana) OR (apple AND banana)`.
//!
//! Evaluation is a K-way merge of the terms' posting iterators: every document id is
//! visited once, in increasing order, and each posting is pulled exactly once.
//! Postings must be sorted by document id; this is not checked.

use ahash::AHashMap;
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::document::corpus::Corpus;
use crate::document::document::InMemoryDocument;
use crate::error::{PilumError, Result};
use crate::lexical::index::InvertedIndex;
use crate::lexical::posting::{Posting, PostingStream};
use crate::search::ranker::Ranker;
use crate::search::sieve::Sieve;

/// Options controlling a single query evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Fraction `T` of distinct query terms a document must contain. Values above 1
    /// behave like 1, and values too small to require one term behave like OR.
    pub match_threshold: f64,

    /// Maximum number of hits returned.
    pub hit_count: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            match_threshold: 1.0,
            hit_count: 10,
        }
    }
}

impl SearchOptions {
    /// Create options with the given threshold and hit count.
    pub fn new(match_threshold: f64, hit_count: usize) -> Self {
        SearchOptions {
            match_threshold,
            hit_count,
        }
    }

    /// Check that the threshold is a non-negative number.
    pub fn validate(&self) -> Result<()> {
        if self.match_threshold.is_nan() || self.match_threshold < 0.0 {
            return Err(PilumError::query(format!(
                "match threshold must be a non-negative number, got {}",
                self.match_threshold
            )));
        }
        Ok(())
    }

    /// Number of the `distinct_terms` query terms a document must contain.
    pub fn required_matches(&self, distinct_terms: usize) -> usize {
        let wanted = (self.match_threshold * distinct_terms as f64).floor() as usize;
        wanted.min(distinct_terms).max(1)
    }
}

/// A ranked search result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// The document ID.
    pub document_id: u64,
    /// The relevance score.
    pub score: f64,
    /// The document, if the corpus has it.
    pub document: Option<InMemoryDocument>,
}

/// Read position in one query term's posting list.
struct Cursor<'a> {
    term: String,
    multiplicity: usize,
    postings: PostingStream<'a>,
    current: Option<Posting>,
}

impl Cursor<'_> {
    fn is_at(&self, document_id: u64) -> bool {
        self.current
            .is_some_and(|posting| posting.document_id == document_id)
    }
}

/// Query evaluator over a corpus and an index built from it.
#[derive(Debug, Clone, Copy)]
pub struct SimpleSearchEngine<'a> {
    corpus: &'a dyn Corpus,
    index: &'a dyn InvertedIndex,
}

impl<'a> SimpleSearchEngine<'a> {
    /// Create an evaluator.
    pub fn new(corpus: &'a dyn Corpus, index: &'a dyn InvertedIndex) -> Self {
        SimpleSearchEngine { corpus, index }
    }

    /// Evaluate `query` and return the best matches, highest score first.
    ///
    /// Among equal scores the smaller document id comes first.
    pub fn evaluate(
        &self,
        query: &str,
        options: &SearchOptions,
        ranker: &mut dyn Ranker,
    ) -> Result<Vec<SearchHit>> {
        options.validate()?;

        let multiplicities = query_multiplicities(self.index, query);
        let distinct_terms = multiplicities.len();
        let required = options.required_matches(distinct_terms);
        debug!(
            "evaluating {:?}: {} of {} terms, {} hits, ranker {}",
            query,
            required,
            distinct_terms,
            options.hit_count,
            ranker.name()
        );

        let mut cursors: Vec<Cursor<'_>> = multiplicities
            .into_iter()
            .map(|(term, multiplicity)| {
                let mut postings = self.index.get_postings_iterator(&term);
                let current = postings.next();
                Cursor {
                    term,
                    multiplicity,
                    postings,
                    current,
                }
            })
            .collect();

        let mut sieve = Sieve::new(options.hit_count);
        let mut candidates = 0usize;

        while let Some(document_id) = cursors
            .iter()
            .filter_map(|cursor| cursor.current.map(|posting| posting.document_id))
            .min()
        {
            let matches = cursors
                .iter()
                .filter(|cursor| cursor.is_at(document_id))
                .count();

            if matches >= required {
                ranker.reset(document_id);
                for cursor in &cursors {
                    if let Some(posting) = cursor.current.filter(|p| p.document_id == document_id) {
                        ranker.update(&cursor.term, cursor.multiplicity, &posting);
                    }
                }
                let score = ranker.evaluate();
                trace!("document {document_id} matched {matches} terms, score {score}");
                sieve.sift(score, document_id);
                candidates += 1;
            }

            for cursor in cursors.iter_mut() {
                if cursor.is_at(document_id) {
                    cursor.current = cursor.postings.next();
                }
            }
        }

        debug!(
            "{} candidate documents, returning {}",
            candidates,
            sieve.len()
        );

        Ok(sieve
            .winners()
            .into_iter()
            .map(|(score, document_id)| {
                let document = self.corpus.get_document(document_id).cloned();
                if document.is_none() {
                    warn!("document {document_id} is in the index but not in the corpus");
                }
                SearchHit {
                    document_id,
                    score,
                    document,
                }
            })
            .collect())
    }
}

/// Distinct query terms with their multiplicities, in first-seen order.
fn query_multiplicities(index: &dyn InvertedIndex, query: &str) -> Vec<(String, usize)> {
    let mut slots: AHashMap<String, usize> = AHashMap::new();
    let mut multiplicities: Vec<(String, usize)> = Vec::new();
    for term in index.get_terms(query) {
        match slots.get(&term) {
            Some(&slot) => multiplicities[slot].1 += 1,
            None => {
                slots.insert(term.clone(), multiplicities.len());
                multiplicities.push((term, 1));
            }
        }
    }
    multiplicities
}
