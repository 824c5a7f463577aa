//! Output rendering and the top-level error boundary
//!
//! [`run`] is the only place an [`ExtractionFailure`] is caught. Below it
//! everything propagates with `?`; at this point the failure is turned into
//! the error line plus `No` and the program carries on normally.

use std::io::{self, Write};
use std::path::Path;

use serde_json::Value;

use crate::document::Document;
use crate::error::{ExtractionFailure, Result};
use crate::extract::{extract, Sample};

/// Placeholder printed for an absent or null friend field
pub const MISSING_FIELD: &str = "null";

/// Line printed after the error description on failure
pub const FAILURE_MARKER: &str = "No";

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// `Item:` lines, owner, count
    #[default]
    Text,
    /// Pretty-printed JSON object
    Json,
}

/// What the boundary ended up printing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Printed,
    Failed,
}

/// Boundary options
#[derive(Debug, Clone, Copy)]
pub struct Options {
    pub format: Format,
    /// Applied to the error description in text mode (e.g. colouring)
    pub error_style: fn(&str) -> String,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            format: Format::Text,
            error_style: |s| s.to_string(),
        }
    }
}

/// Load and extract the sample from `path`
pub fn load(path: &Path) -> Result<Sample> {
    let document = Document::from_path(path)?;
    extract(&document)
}

/// Load `path`, extract the sample and print it. Any extraction failure is
/// reported on `out` instead of being returned.
///
/// # Errors
/// Only errors writing to `out`.
pub fn run<W: Write>(path: &Path, options: &Options, out: &mut W) -> io::Result<Outcome> {
    match load(path) {
        Ok(sample) => {
            match options.format {
                Format::Text => write_lines(&sample, out)?,
                Format::Json => write_json(&sample, out)?,
            }
            Ok(Outcome::Printed)
        }
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "extraction failed");
            write_failure(&err, options, out)?;
            Ok(Outcome::Failed)
        }
    }
}

/// One `Item: <name> <age>` line per friend, then owner, then count
pub fn write_lines<W: Write>(sample: &Sample, out: &mut W) -> io::Result<()> {
    for friend in &sample.friends {
        writeln!(
            out,
            "Item: {} {}",
            render_field(friend.name.as_ref()),
            render_field(friend.age.as_ref())
        )?;
    }
    writeln!(out, "{}", sample.owner)?;
    writeln!(out, "{}", sample.count)
}

/// The sample as a pretty-printed JSON object
pub fn write_json<W: Write>(sample: &Sample, out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, sample)?;
    writeln!(out)
}

fn write_failure<W: Write>(err: &ExtractionFailure, options: &Options, out: &mut W) -> io::Result<()> {
    match options.format {
        Format::Text => {
            writeln!(out, "{}", (options.error_style)(&err.to_string()))?;
            writeln!(out, "{}", FAILURE_MARKER)
        }
        Format::Json => {
            let body = serde_json::json!({ "error": err.to_string() });
            serde_json::to_writer_pretty(&mut *out, &body)?;
            writeln!(out)
        }
    }
}

/// Strings print bare, absent and null print the placeholder, anything
/// else prints as compact JSON.
pub fn render_field(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => MISSING_FIELD.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
