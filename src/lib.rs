//! # Pilum
//!
//! A small in-memory text retrieval library: an inverted index over a document
//! corpus, optionally bit-compressed posting lists, streaming set algebra over
//! posting lists, and ranked "at least N of M terms" query evaluation.
//!
//! ## Features
//!
//! - Self-delimiting integer codecs (variable-byte, Elias-Gamma, oneshot)
//! - Plain and gap-compressed posting lists
//! - Single-pass in-memory index construction
//! - Pluggable rankers with bounded top-K selection
//!
//! ## Example
//!
//! ```
//! use pilum::prelude::*;
//!
//! let mut corpus = InMemoryCorpus::new();
//! corpus.add_document([("body", "the quick brown fox")]);
//! corpus.add_document([("body", "the lazy dog")]);
//! corpus.add_document([("body", "a quick dog")]);
//!
//! let index = InMemoryInvertedIndex::build(
//!     &corpus,
//!     Analyzer::simple().unwrap(),
//!     InvertedIndexConfig::default().with_compression(CompressionConfig::compressed()),
//! )
//! .unwrap();
//!
//! let engine = SimpleSearchEngine::new(&corpus, &index);
//! let hits = engine
//!     .evaluate("quick dog", &SearchOptions::new(1.0, 10), &mut SimpleRanker::new())
//!     .unwrap();
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].document_id, 2);
//! ```

pub mod analysis;
pub mod cli;
pub mod codec;
pub mod document;
pub mod error;
pub mod lexical;
pub mod search;
pub mod util;

pub mod prelude {
    pub use crate::analysis::analyzer::Analyzer;
    pub use crate::codec::{CodecKind, IntegerCodec};
    pub use crate::document::corpus::{Corpus, InMemoryCorpus};
    pub use crate::document::document::InMemoryDocument;
    pub use crate::error::{PilumError, Result};
    pub use crate::lexical::index::{
        AccessLoggedInvertedIndex, CompressionConfig, FrequencyOnlyInvertedIndex,
        InMemoryInvertedIndex, InvertedIndex, InvertedIndexConfig,
    };
    pub use crate::lexical::merger::PostingsMerger;
    pub use crate::lexical::posting::{Posting, PostingList};
    pub use crate::search::{
        Ranker, SearchHit, SearchOptions, Sieve, SimpleRanker, SimpleSearchEngine, TfIdfRanker,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
