//! Error types for the Pilum library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`PilumError`] enum. Precondition violations (bad codec input, out-of-order
//! postings, reading past the end of a bit buffer) surface as errors at the point
//! where they are detected and are never clamped or repaired.
//!
//! # Examples
//!
//! ```
//! use pilum::error::{PilumError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(PilumError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Pilum operations.
#[derive(Error, Debug)]
pub enum PilumError {
    /// I/O errors (reading corpora from disk, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A caller broke a documented precondition.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A read went past the end of a buffer.
    #[error("Out of range: {0}")]
    OutOfRange(String),

    /// Index construction errors
    #[error("Index error: {0}")]
    Index(String),

    /// Analysis-related errors (tokenization, normalization)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Query evaluation errors
    #[error("Query error: {0}")]
    Query(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Error with added context; displays the whole cause chain.
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with PilumError.
pub type Result<T> = std::result::Result<T, PilumError>;

impl PilumError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        PilumError::InvalidArgument(msg.into())
    }

    /// Create a new out of range error.
    pub fn out_of_range<S: Into<String>>(msg: S) -> Self {
        PilumError::OutOfRange(msg.into())
    }

    /// Create a new index error.
    pub fn index<S: Into<String>>(msg: S) -> Self {
        PilumError::Index(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        PilumError::Analysis(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        PilumError::Query(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        PilumError::Other(msg.into())
    }
}
