//! Fixed-key extraction from the sample document
//!
//! Every read happens here, before anything is printed: either the whole
//! [`Sample`] comes back or the first failure does.

use serde::Serialize;
use serde_json::Value;

use crate::document::{Document, Object};
use crate::error::Result;

/// The fields the sample program reports
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sample {
    pub owner: String,
    pub count: i64,
    pub inner_name: String,
    pub friends: Vec<Friend>,
}

/// One element of `friends`. Either field may be absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Friend {
    pub name: Option<Value>,
    pub age: Option<Value>,
}

impl Friend {
    fn from_object(object: &Object<'_>) -> Self {
        Friend {
            name: object.lookup("name").cloned(),
            age: object.lookup("age").cloned(),
        }
    }
}

/// Read `owner`, `count`, `friends[*]` and `inner.name` from the document
///
/// # Errors
/// Any missing required key, wrongly-typed value, or non-object `friends`
/// element.
pub fn extract(document: &Document) -> Result<Sample> {
    let root = document.root();

    let owner = root.str_at("owner")?.to_string();
    let count = root.i64_at("count")?;
    let friends = root
        .array_at("friends")?
        .objects()
        .map(|object| object.map(|o| Friend::from_object(&o)))
        .collect::<Result<Vec<_>>>()?;
    let inner_name = root.object_at("inner")?.str_at("name")?.to_string();

    tracing::debug!(owner = %owner, count, friends = friends.len(), "extracted sample");

    Ok(Sample {
        owner,
        count,
        inner_name,
        friends,
    })
}
