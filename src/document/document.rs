//! Document structure with named text fields.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A document represents a single item to be indexed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InMemoryDocument {
    document_id: u64,
    fields: HashMap<String, String>,
}

impl InMemoryDocument {
    /// Create a new empty document.
    pub fn new(document_id: u64) -> Self {
        InMemoryDocument {
            document_id,
            fields: HashMap::new(),
        }
    }

    /// Create a document from existing fields.
    pub fn with_fields(document_id: u64, fields: HashMap<String, String>) -> Self {
        InMemoryDocument {
            document_id,
            fields,
        }
    }

    /// The stable identifier of this document.
    pub fn document_id(&self) -> u64 {
        self.document_id
    }

    /// Set a field value, replacing any previous value.
    pub fn add_field<S: Into<String>, T: Into<String>>(&mut self, name: S, value: T) {
        self.fields.insert(name.into(), value.into());
    }

    /// Get a field value. Missing fields read as the empty string.
    pub fn get_field(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }

    /// Check if the document has a field.
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Get all field names.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.keys().map(|s| s.as_str()).collect()
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_fields() {
        let mut doc = InMemoryDocument::new(7);
        doc.add_field("title", "Rust Programming");
        doc.add_field("body", "Ownership and borrowing");

        assert_eq!(doc.document_id(), 7);
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.get_field("title"), "Rust Programming");
        assert!(doc.has_field("body"));
    }

    #[test]
    fn test_missing_field_is_empty() {
        let doc = InMemoryDocument::new(0);
        assert!(doc.is_empty());
        assert_eq!(doc.get_field("title"), "");
    }
}
