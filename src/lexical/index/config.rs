//! Configuration for inverted index construction.
//!
//! # Example
//!
//! ```
//! use pilum::codec::CodecKind;
//! use pilum::lexical::index::config::{CompressionConfig, InvertedIndexConfig};
//!
//! let config = InvertedIndexConfig::new(["title", "body"]).with_compression(
//!     CompressionConfig::Compressed {
//!         gap_codec: CodecKind::VariableByte,
//!         frequency_codec: CodecKind::Oneshot,
//!     },
//! );
//! assert_eq!(config.fields, vec!["title", "body"]);
//! ```

use serde::{Deserialize, Serialize};

use crate::codec::CodecKind;
use crate::lexical::posting::{CompressedInMemoryPostingList, InMemoryPostingList, PostingList};

/// How posting lists are stored.
///
/// - **None**: postings kept as a plain vector (default)
/// - **Compressed**: gaps and frequencies encoded into a bit buffer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CompressionConfig {
    /// Plain posting lists.
    #[default]
    None,
    /// Bit-compressed posting lists.
    Compressed {
        /// Codec for document-id gaps.
        gap_codec: CodecKind,
        /// Codec for term frequencies.
        frequency_codec: CodecKind,
    },
}

impl CompressionConfig {
    /// The default compressed setup: variable-byte gaps, oneshot frequencies.
    pub fn compressed() -> Self {
        CompressionConfig::Compressed {
            gap_codec: CodecKind::VariableByte,
            frequency_codec: CodecKind::Oneshot,
        }
    }

    /// Create an empty posting list of the configured kind.
    pub fn new_posting_list(&self) -> Box<dyn PostingList> {
        match *self {
            CompressionConfig::None => Box::new(InMemoryPostingList::new()),
            CompressionConfig::Compressed {
                gap_codec,
                frequency_codec,
            } => Box::new(CompressedInMemoryPostingList::with_codecs(
                gap_codec,
                frequency_codec,
            )),
        }
    }

    /// Check if posting lists are compressed.
    pub fn is_compressed(&self) -> bool {
        matches!(self, CompressionConfig::Compressed { .. })
    }
}

/// Configuration specific to inverted index construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvertedIndexConfig {
    /// Document fields whose text is indexed. Terms from all fields are pooled.
    pub fields: Vec<String>,

    /// Posting list representation.
    #[serde(default)]
    pub compression: CompressionConfig,
}

impl InvertedIndexConfig {
    /// Create a config indexing the given fields without compression.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        InvertedIndexConfig {
            fields: fields.into_iter().map(Into::into).collect(),
            compression: CompressionConfig::None,
        }
    }

    /// Set the posting list representation.
    pub fn with_compression(mut self, compression: CompressionConfig) -> Self {
        self.compression = compression;
        self
    }
}

impl Default for InvertedIndexConfig {
    fn default() -> Self {
        InvertedIndexConfig::new(["body"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = InvertedIndexConfig::default();
        assert_eq!(config.fields, vec!["body"]);
        assert_eq!(config.compression, CompressionConfig::None);
        assert!(!config.compression.is_compressed());
    }

    #[test]
    fn test_serde_round_trip() {
        let config = InvertedIndexConfig::new(["title"]).with_compression(CompressionConfig::compressed());
        let json = serde_json::to_string(&config).unwrap();
        let decoded: InvertedIndexConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, config);
    }

    #[test]
    fn test_compression_defaults_when_missing() {
        let config: InvertedIndexConfig = serde_json::from_str(r#"{"fields": ["a", "b"]}"#).unwrap();
        assert_eq!(config.compression, CompressionConfig::None);

        let config: InvertedIndexConfig = serde_json::from_str(
            r#"{"fields": ["a"], "compression": {"type": "compressed", "gap_codec": "oneshot", "frequency_codec": "elias_gamma"}}"#,
        )
        .unwrap();
        assert_eq!(
            config.compression,
            CompressionConfig::Compressed {
                gap_codec: CodecKind::Oneshot,
                frequency_codec: CodecKind::EliasGamma,
            }
        );
    }

    #[test]
    fn test_new_posting_list() {
        assert_eq!(CompressionConfig::None.new_posting_list().size_in_bits(), 0);
        assert_eq!(
            CompressionConfig::compressed()
                .new_posting_list()
                .get_length(),
            0
        );
    }
}
