//! Text analysis for indexing and querying.
//!
//! A [`Tokenizer`](tokenizer::Tokenizer) splits a buffer into raw tokens, a
//! [`Normalizer`](normalizer::Normalizer) canonicalizes the buffer and maps each
//! token to a term, and an [`Analyzer`](analyzer::Analyzer) pairs the two so that
//! documents and queries are processed identically.

pub mod analyzer;
pub mod normalizer;
pub mod token;
pub mod tokenizer;
