//! Regex-based tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{PilumError, Result};

/// A tokenizer that extracts every match of a regular expression.
///
/// The default pattern `\w+` yields runs of word characters, dropping punctuation
/// and whitespace. Matches are found as the stream is pulled; empty matches are
/// skipped.
#[derive(Clone, Debug)]
pub struct SimpleTokenizer {
    pattern: Arc<Regex>,
}

impl SimpleTokenizer {
    /// Create a new tokenizer with the default `\w+` pattern.
    pub fn new() -> Result<Self> {
        Self::with_pattern(r"\w+")
    }

    /// Create a new tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| PilumError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(SimpleTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Tokenizer for SimpleTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        Box::new(RegexTokens {
            pattern: Arc::clone(&self.pattern),
            text: text.to_owned(),
            offset: 0,
            position: 0,
        })
    }

    fn name(&self) -> &'static str {
        "simple"
    }
}

/// Yields one token per non-empty match, searching on demand.
#[derive(Debug)]
struct RegexTokens {
    pattern: Arc<Regex>,
    text: String,
    offset: usize,
    position: usize,
}

impl Iterator for RegexTokens {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        while self.offset <= self.text.len() {
            let mat = self.pattern.find_at(&self.text, self.offset)?;
            if mat.is_empty() {
                // Step over the next character so the search makes progress.
                self.offset = match self.text[mat.end()..].chars().next() {
                    Some(c) => mat.end() + c.len_utf8(),
                    None => self.text.len() + 1,
                };
                continue;
            }

            self.offset = mat.end();
            let token = Token::with_offsets(mat.as_str(), self.position, mat.start(), mat.end());
            self.position += 1;
            return Some(token);
        }
        None
    }
}
