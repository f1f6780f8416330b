//! Corpus abstraction and an in-memory implementation.
//!
//! Documents are identified by their position in the corpus: the first document
//! added gets id 0, the next id 1, and so on.
//!
//! # Examples
//!
//! ```
//! use pilum::document::corpus::{Corpus, InMemoryCorpus};
//!
//! let mut corpus = InMemoryCorpus::new();
//! corpus.add_document([("body", "hello world")]);
//! corpus.add_document([("body", "goodbye world")]);
//!
//! assert_eq!(corpus.size(), 2);
//! assert_eq!(corpus.get_document(1).unwrap().get_field("body"), "goodbye world");
//! ```

use std::collections::HashMap;
use std::fmt::Debug;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use log::debug;
use serde_json::Value;

use crate::document::document::InMemoryDocument;
use crate::error::{PilumError, Result};

/// Trait for document collections.
pub trait Corpus: Send + Sync + Debug {
    /// Iterate over all documents in id order.
    fn iter(&self) -> Box<dyn Iterator<Item = &InMemoryDocument> + '_>;

    /// Look up a document by id.
    fn get_document(&self, document_id: u64) -> Option<&InMemoryDocument>;

    /// Number of documents in the corpus.
    fn size(&self) -> usize;
}

/// A corpus held entirely in memory.
#[derive(Clone, Debug, Default)]
pub struct InMemoryCorpus {
    documents: Vec<InMemoryDocument>,
}

impl InMemoryCorpus {
    /// Create a new empty corpus.
    pub fn new() -> Self {
        InMemoryCorpus {
            documents: Vec::new(),
        }
    }

    /// Append a document built from `(name, value)` pairs and return its id.
    pub fn add_document<I, K, V>(&mut self, fields: I) -> u64
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let document_id = self.documents.len() as u64;
        let fields: HashMap<String, String> = fields
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect();
        self.documents
            .push(InMemoryDocument::with_fields(document_id, fields));
        document_id
    }

    /// Load a corpus from JSON lines, one object per line.
    ///
    /// String values are taken verbatim, other scalar values by their JSON text.
    /// Blank lines are skipped.
    pub fn from_jsonl_reader<R: Read>(reader: R) -> Result<Self> {
        let mut corpus = InMemoryCorpus::new();
        for (line_number, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let value: Value = serde_json::from_str(line)?;
            let Value::Object(map) = value else {
                return Err(PilumError::other(format!(
                    "line {} is not a JSON object",
                    line_number + 1
                )));
            };

            corpus.add_document(map.into_iter().map(|(key, val)| {
                let text = match val {
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                (key, text)
            }));
        }

        debug!("loaded {} documents from JSON lines", corpus.size());
        Ok(corpus)
    }

    /// Load a corpus from a JSON lines file.
    pub fn from_jsonl_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_jsonl_reader(file)
    }
}

impl Corpus for InMemoryCorpus {
    fn iter(&self) -> Box<dyn Iterator<Item = &InMemoryDocument> + '_> {
        Box::new(self.documents.iter())
    }

    fn get_document(&self, document_id: u64) -> Option<&InMemoryDocument> {
        usize::try_from(document_id)
            .ok()
            .and_then(|index| self.documents.get(index))
    }

    fn size(&self) -> usize {
        self.documents.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_add_and_get() {
        let mut corpus = InMemoryCorpus::new();
        assert_eq!(corpus.add_document([("a", "x")]), 0);
        assert_eq!(corpus.add_document([("a", "y")]), 1);

        assert_eq!(corpus.size(), 2);
        assert_eq!(corpus.get_document(0).unwrap().get_field("a"), "x");
        assert!(corpus.get_document(2).is_none());

        let ids: Vec<u64> = corpus.iter().map(|d| d.document_id()).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn test_jsonl_parsing() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"title": "Test1", "year": 2024}}"#).unwrap();
        writeln!(file).unwrap();
        writeln!(file, r#"{{"title": "Test2", "year": 2023}}"#).unwrap();
        file.flush().unwrap();

        let corpus = InMemoryCorpus::from_jsonl_file(file.path()).unwrap();
        assert_eq!(corpus.size(), 2);

        let doc = corpus.get_document(1).unwrap();
        assert_eq!(doc.get_field("title"), "Test2");
        assert_eq!(doc.get_field("year"), "2023");
    }

    #[test]
    fn test_jsonl_rejects_non_objects() {
        let input = "[1, 2, 3]\n";
        assert!(InMemoryCorpus::from_jsonl_reader(input.as_bytes()).is_err());

        let input = "{not json}\n";
        assert!(matches!(
            InMemoryCorpus::from_jsonl_reader(input.as_bytes()),
            Err(PilumError::Json(_))
        ));
    }
}
