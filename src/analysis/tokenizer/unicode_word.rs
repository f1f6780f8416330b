//! Unicode word tokenizer implementation.
//!
//! Splits text using the Unicode word boundary rules (UAX #29) and keeps only the
//! segments that contain at least one alphanumeric character.
//!
//! # Examples
//!
//! ```
//! use pilum::analysis::tokenizer::Tokenizer;
//! use pilum::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
//!
//! let tokenizer = UnicodeWordTokenizer::new();
//! let strings: Vec<_> = tokenizer.strings("café résumé, don't").collect();
//! assert_eq!(strings, vec!["café", "résumé", "don't"]);
//! ```

use unicode_segmentation::UnicodeSegmentation;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};

/// A tokenizer that splits text on Unicode word boundaries.
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    /// Create a new Unicode word tokenizer.
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        let tokens: Vec<Token> = text
            .split_word_bound_indices()
            .filter(|(_, word)| word.chars().any(|c| c.is_alphanumeric()))
            .enumerate()
            .map(|(position, (start_offset, word))| {
                Token::with_offsets(word, position, start_offset, start_offset + word.len())
            })
            .collect();

        Box::new(tokens.into_iter())
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}
