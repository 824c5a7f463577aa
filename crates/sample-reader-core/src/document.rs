//! Read-only JSON document with typed, path-aware accessors
//!
//! A [`Document`] is parsed once and never mutated. Field reads go through
//! [`Object`] and [`Array`] views, which remember the dotted key path they
//! were reached by (`inner.name`, `friends[1]`) so that a failed read can
//! say exactly where it failed.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::error::{ExtractionFailure, Result};

/// Parsed JSON document whose top-level value is an object
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Map<String, Value>,
}

impl Document {
    /// Load and parse a document from a file.
    ///
    /// The file handle lives only for the duration of this call.
    ///
    /// # Errors
    /// `Io` if the file cannot be opened, `Parse` for malformed JSON,
    /// `NotAnObject` if the top-level value is not an object.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading document");
        let file = File::open(path).map_err(|source| ExtractionFailure::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let value: Value = serde_json::from_reader(BufReader::new(file))?;
        Self::from_value(value)
    }

    /// Wrap an already-parsed value, rejecting anything but an object
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(root) => Ok(Document { root }),
            other => Err(ExtractionFailure::NotAnObject {
                found: type_name(&other),
            }),
        }
    }

    /// View of the top-level object
    pub fn root(&self) -> Object<'_> {
        Object {
            map: &self.root,
            path: String::new(),
        }
    }
}

impl FromStr for Document {
    type Err = ExtractionFailure;

    fn from_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }
}

/// Borrowed view of a JSON object at a known key path
#[derive(Debug, Clone)]
pub struct Object<'a> {
    map: &'a Map<String, Value>,
    path: String,
}

impl<'a> Object<'a> {
    /// Permissive lookup: `None` when the key is absent
    pub fn lookup(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key)
    }

    fn child_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    fn require(&self, key: &str) -> Result<(&'a Value, String)> {
        let path = self.child_path(key);
        match self.map.get(key) {
            Some(value) => Ok((value, path)),
            None => Err(ExtractionFailure::MissingKey { path }),
        }
    }

    /// Read a string field
    pub fn str_at(&self, key: &str) -> Result<&'a str> {
        let (value, path) = self.require(key)?;
        value.as_str().ok_or_else(|| mismatch(path, "String", value))
    }

    /// Read an integer field. Fractional numbers and integers outside the
    /// `i64` range are rejected.
    ///
    /// Integers below `i64::MIN` arrive from the parser as `f64`; a whole
    /// float of that magnitude is reported as out of range, not as `Float`.
    pub fn i64_at(&self, key: &str) -> Result<i64> {
        let (value, path) = self.require(key)?;
        match value {
            Value::Number(n) => match n.as_i64() {
                Some(i) => Ok(i),
                None if n.is_u64() || is_whole_beyond_i64(n.as_f64()) => {
                    Err(ExtractionFailure::TypeMismatch {
                        path,
                        expected: "Integer",
                        found: "Integer out of range",
                    })
                }
                None => Err(mismatch(path, "Integer", value)),
            },
            _ => Err(mismatch(path, "Integer", value)),
        }
    }

    /// Read a nested object field
    pub fn object_at(&self, key: &str) -> Result<Object<'a>> {
        let (value, path) = self.require(key)?;
        match value {
            Value::Object(map) => Ok(Object { map, path }),
            _ => Err(mismatch(path, "Object", value)),
        }
    }

    /// Read an array field
    pub fn array_at(&self, key: &str) -> Result<Array<'a>> {
        let (value, path) = self.require(key)?;
        match value {
            Value::Array(items) => Ok(Array { items, path }),
            _ => Err(mismatch(path, "Array", value)),
        }
    }
}

/// Borrowed view of a JSON array at a known key path
#[derive(Debug, Clone)]
pub struct Array<'a> {
    items: &'a [Value],
    path: String,
}

impl<'a> Array<'a> {
    /// Iterate the elements in array order, requiring each to be an object
    pub fn objects(&self) -> impl Iterator<Item = Result<Object<'a>>> + '_ {
        self.items.iter().enumerate().map(move |(i, value)| {
            let path = format!("{}[{}]", self.path, i);
            match value {
                Value::Object(map) => Ok(Object { map, path }),
                _ => Err(mismatch(path, "Object", value)),
            }
        })
    }
}

fn is_whole_beyond_i64(value: Option<f64>) -> bool {
    match value {
        Some(f) => {
            f.is_finite() && f.fract() == 0.0 && (f <= i64::MIN as f64 || f >= i64::MAX as f64)
        }
        None => false,
    }
}

fn mismatch(path: String, expected: &'static str, found: &Value) -> ExtractionFailure {
    ExtractionFailure::TypeMismatch {
        path,
        expected,
        found: type_name(found),
    }
}

/// Type name of a JSON value, for error messages
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "Null",
        Value::Bool(_) => "Boolean",
        Value::Number(n) if n.is_f64() => "Float",
        Value::Number(_) => "Integer",
        Value::String(_) => "String",
        Value::Array(_) => "Array",
        Value::Object(_) => "Object",
    }
}
