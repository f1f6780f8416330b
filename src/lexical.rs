//! Lexical search implementation using inverted indexes.
//!
//! This module provides the term dictionary, plain and compressed posting lists,
//! inverted index construction, and streaming set algebra over posting lists.

// Core data structures
pub mod dictionary;
pub mod posting;

// Index construction and access
pub mod index;

// Posting list combination
pub mod merger;
