//! Documents and corpora.
//!
//! A [`document::InMemoryDocument`] is a document identifier plus named text
//! fields. A [`corpus::Corpus`] is an ordered collection of documents that the
//! inverted index scans once at build time and that search results point back into.

pub mod corpus;
pub mod document;
