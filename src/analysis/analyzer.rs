//! Analyzer that pairs a normalizer with a tokenizer.
//!
//! Both index construction and query evaluation run text through the same
//! analyzer, so a query term matches exactly the terms that were indexed.
//!
//! ```text
//! buffer → canonicalize → tokenize → normalize (per token) → terms
//! ```
//!
//! # Examples
//!
//! ```
//! use pilum::analysis::analyzer::Analyzer;
//!
//! let analyzer = Analyzer::simple().unwrap();
//! let terms: Vec<_> = analyzer.terms("Hello, World!").collect();
//! assert_eq!(terms, vec!["hello", "world"]);
//! ```

use std::sync::Arc;

use crate::analysis::normalizer::{Normalizer, SimpleNormalizer};
use crate::analysis::tokenizer::{SimpleTokenizer, Tokenizer};
use crate::error::Result;

/// Stream of normalized terms.
pub type TermStream = Box<dyn Iterator<Item = String> + Send>;

/// Turns text buffers into normalized terms.
#[derive(Clone, Debug)]
pub struct Analyzer {
    normalizer: Arc<dyn Normalizer>,
    tokenizer: Arc<dyn Tokenizer>,
}

impl Analyzer {
    /// Create a new analyzer from a normalizer and a tokenizer.
    pub fn new(normalizer: Arc<dyn Normalizer>, tokenizer: Arc<dyn Tokenizer>) -> Self {
        Analyzer {
            normalizer,
            tokenizer,
        }
    }

    /// Lowercasing normalizer over the `\w+` tokenizer.
    pub fn simple() -> Result<Self> {
        Ok(Analyzer::new(
            Arc::new(SimpleNormalizer::new()),
            Arc::new(SimpleTokenizer::new()?),
        ))
    }

    /// Get the normalizer used by this analyzer.
    pub fn normalizer(&self) -> &Arc<dyn Normalizer> {
        &self.normalizer
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Normalized terms of `buffer`, in order and with repetitions.
    pub fn terms(&self, buffer: &str) -> TermStream {
        let canonical = self.normalizer.canonicalize(buffer);
        let normalizer = Arc::clone(&self.normalizer);
        Box::new(
            self.tokenizer
                .strings(&canonical)
                .map(move |token| normalizer.normalize(&token)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::normalizer::DummyNormalizer;
    use crate::analysis::tokenizer::DummyTokenizer;

    #[test]
    fn test_simple_analyzer() {
        let analyzer = Analyzer::simple().unwrap();
        let terms: Vec<String> = analyzer.terms("The QUICK brown, the lazy").collect();
        assert_eq!(terms, vec!["the", "quick", "brown", "the", "lazy"]);
    }

    #[test]
    fn test_is_deterministic() {
        let analyzer = Analyzer::simple().unwrap();
        let first: Vec<String> = analyzer.terms("Never seen before").collect();
        let second: Vec<String> = analyzer.terms("Never seen before").collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_dummy_analyzer() {
        let analyzer = Analyzer::new(
            Arc::new(DummyNormalizer::new()),
            Arc::new(DummyTokenizer::new()),
        );
        let terms: Vec<String> = analyzer.terms("Foo Bar").collect();
        assert_eq!(terms, vec!["Foo Bar"]);
    }
}
