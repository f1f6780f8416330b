//! Tokenizer implementations for text analysis.
//!
//! # Available Tokenizers
//!
//! - [`simple::SimpleTokenizer`] - Regex-driven, `\w+` by default
//! - [`unicode_word::UnicodeWordTokenizer`] - Uses Unicode word boundaries
//! - [`dummy::DummyTokenizer`] - Treats the entire text as a single token
//!
//! # Examples
//!
//! ```
//! use pilum::analysis::tokenizer::Tokenizer;
//! use pilum::analysis::tokenizer::simple::SimpleTokenizer;
//!
//! let tokenizer = SimpleTokenizer::new().unwrap();
//! let strings: Vec<_> = tokenizer.strings("Hello, world").collect();
//! assert_eq!(strings, vec!["Hello", "world"]);
//! ```

use std::fmt::Debug;

use crate::analysis::token::TokenStream;

/// Trait for tokenizers that convert text into tokens.
pub trait Tokenizer: Send + Sync + Debug {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> TokenStream;

    /// The raw token strings, in order.
    fn strings(&self, text: &str) -> Box<dyn Iterator<Item = String> + Send> {
        Box::new(self.tokenize(text).map(|token| token.text))
    }

    /// The `(start, end)` byte ranges of the tokens, in order.
    fn ranges(&self, text: &str) -> Box<dyn Iterator<Item = (usize, usize)> + Send> {
        Box::new(self.tokenize(text).map(|token| token.range()))
    }

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod dummy;
pub mod simple;
pub mod unicode_word;

pub use dummy::DummyTokenizer;
pub use simple::SimpleTokenizer;
pub use unicode_word::UnicodeWordTokenizer;
