//! Normalizers that turn raw tokens into index terms.
//!
//! # Examples
//!
//! ```
//! use pilum::analysis::normalizer::{Normalizer, SimpleNormalizer};
//!
//! let normalizer = SimpleNormalizer::new();
//! assert_eq!(normalizer.normalize("WÖRLD"), "wörld");
//! ```

use std::fmt::Debug;

/// Trait for text normalizers.
pub trait Normalizer: Send + Sync + Debug {
    /// Canonicalize a whole buffer before it is tokenized.
    fn canonicalize(&self, buffer: &str) -> String;

    /// Map a single raw token to the term that is indexed or queried.
    fn normalize(&self, token: &str) -> String;

    /// Get the name of this normalizer.
    fn name(&self) -> &'static str;
}

/// Lowercases every token; leaves the buffer itself untouched.
#[derive(Clone, Debug, Default)]
pub struct SimpleNormalizer;

impl SimpleNormalizer {
    /// Create a new simple normalizer.
    pub fn new() -> Self {
        SimpleNormalizer
    }
}

impl Normalizer for SimpleNormalizer {
    fn canonicalize(&self, buffer: &str) -> String {
        buffer.to_owned()
    }

    fn normalize(&self, token: &str) -> String {
        if token.is_ascii() {
            token.to_ascii_lowercase()
        } else {
            token.to_lowercase()
        }
    }

    fn name(&self) -> &'static str {
        "simple"
    }
}

/// Passes buffers and tokens through unchanged.
#[derive(Clone, Debug, Default)]
pub struct DummyNormalizer;

impl DummyNormalizer {
    /// Create a new dummy normalizer.
    pub fn new() -> Self {
        DummyNormalizer
    }
}

impl Normalizer for DummyNormalizer {
    fn canonicalize(&self, buffer: &str) -> String {
        buffer.to_owned()
    }

    fn normalize(&self, token: &str) -> String {
        token.to_owned()
    }

    fn name(&self) -> &'static str {
        "dummy"
    }
}
