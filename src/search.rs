//! Ranked retrieval over an inverted index.
//!
//! - [`engine::SimpleSearchEngine`] - N-of-M query evaluation
//! - [`ranker`] - per-document scoring
//! - [`sieve::Sieve`] - bounded top-K selection

pub mod engine;
pub mod ranker;
pub mod sieve;

pub use engine::{SearchHit, SearchOptions, SimpleSearchEngine};
pub use ranker::{Ranker, SimpleRanker, TfIdfRanker};
pub use sieve::Sieve;
