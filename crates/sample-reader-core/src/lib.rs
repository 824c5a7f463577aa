//! Sample Reader Core - typed field extraction from a JSON sample document
//!
//! # Architecture
//!
//! ```text
//! JSON file → Document (read-only) → extract → Sample → report (text | JSON)
//!                                        ↓
//!                                ExtractionFailure → error line + "No"
//! ```
//!
//! # Guarantees
//!
//! - **All-or-nothing**: every field is read before anything is printed
//! - **Deterministic**: the same file always produces identical output
//! - **Contained**: failures are reported at a single boundary, never panics

pub mod document;
pub mod error;
pub mod extract;
pub mod report;

pub use document::Document;
pub use error::{ExtractionFailure, Result};
pub use extract::{extract, Friend, Sample};
pub use report::{Format, Options, Outcome};

/// Path read when no file is given on the command line
pub const DEFAULT_SAMPLE_PATH: &str = "../tests/sample.json";
