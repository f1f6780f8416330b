//! Tokenizer that emits the whole buffer as one token.

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};

/// A tokenizer that treats the entire input as a single token.
///
/// Empty input produces no tokens.
#[derive(Clone, Debug, Default)]
pub struct DummyTokenizer;

impl DummyTokenizer {
    /// Create a new dummy tokenizer.
    pub fn new() -> Self {
        DummyTokenizer
    }
}

impl Tokenizer for DummyTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        if text.is_empty() {
            return Box::new(std::iter::empty());
        }
        Box::new(std::iter::once(Token::with_offsets(text, 0, 0, text.len())))
    }

    fn name(&self) -> &'static str {
        "dummy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_buffer() {
        let tokenizer = DummyTokenizer::new();
        let strings: Vec<String> = tokenizer.strings("foo  bar").collect();
        assert_eq!(strings, vec!["foo  bar"]);
        assert_eq!(tokenizer.tokenize("").count(), 0);
    }
}
