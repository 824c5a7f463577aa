//! Error types for the sample reader
//!
//! Every failure while loading or reading the document is an
//! `ExtractionFailure`. The variants carry diagnostic detail only; the
//! top-level boundary in [`crate::report`] treats them all the same way.

use std::path::PathBuf;

/// The single failure condition: I/O, parse, or field access
#[derive(Debug, thiserror::Error)]
pub enum ExtractionFailure {
    /// The input file could not be opened or read
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is not syntactically valid JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The top-level value is something other than an object
    #[error("Type mismatch at $: expected Object, found {found}")]
    NotAnObject { found: &'static str },

    /// A required key is absent
    #[error("Missing key: {path}")]
    MissingKey { path: String },

    /// A key is present but holds the wrong kind of value
    #[error("Type mismatch at {path}: expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// Result type alias for sample reader operations
pub type Result<T> = std::result::Result<T, ExtractionFailure>;
