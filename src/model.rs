//! The `Pasta` resource and its two encodings.
//!
//! | Encoding | Used for | `cookingTime` when absent |
//! |---|---|---|
//! | wire (JSON) | request and response bodies | key omitted |
//! | document (BSON) | the store | key omitted, never `null` |
//!
//! Absence is `None`, which is distinct from an explicit `Some(0)`. Leaving
//! the key out of the document is what makes [`Pasta::named`] usable as a
//! partial-document equality filter.

use bson::{Bson, Document};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

const NAME: &str = "name";
const COOKING_TIME: &str = "cookingTime";

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid pasta payload: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("cannot encode pasta: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("stored document has invalid `{field}`: {found}")]
    Field { field: &'static str, found: String },
}

/// A pasta type and how long it cooks, in minutes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pasta {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,

    #[serde(
        rename = "cookingTime",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub cooking_time: Option<u32>,
}

impl Pasta {
    pub fn new(name: impl Into<String>, cooking_time: Option<u32>) -> Self {
        Self { name: name.into(), cooking_time }
    }

    /// A pasta with only a name; its document form is the read-by-name filter.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, None)
    }

    /// Decodes the wire form.
    ///
    /// Only the shape is checked: a missing or `null` `name` becomes `""`, a missing or
    /// `null` `cookingTime` becomes `None`, and a negative or non-integer
    /// `cookingTime` is rejected.
    pub fn decode(bytes: &[u8]) -> Result<Self, ModelError> {
        serde_json::from_slice(bytes).map_err(ModelError::Decode)
    }

    pub fn encode(&self) -> Result<Vec<u8>, ModelError> {
        serde_json::to_vec(self).map_err(ModelError::Encode)
    }

    pub fn to_document(&self) -> Document {
        let mut doc = Document::new();
        doc.insert(NAME, self.name.as_str());
        if let Some(minutes) = self.cooking_time {
            doc.insert(COOKING_TIME, i64::from(minutes));
        }
        doc
    }

    /// Rebuilds a pasta from a stored document. Keys other than `name` and
    /// `cookingTime` (such as `_id`) are ignored.
    pub fn from_document(doc: &Document) -> Result<Self, ModelError> {
        let name = match doc.get(NAME) {
            None | Some(Bson::Null) => String::new(),
            Some(Bson::String(s)) => s.clone(),
            Some(other) => return Err(invalid(NAME, other)),
        };

        let cooking_time = match doc.get(COOKING_TIME) {
            None | Some(Bson::Null) => None,
            Some(value) => Some(minutes(value).ok_or_else(|| invalid(COOKING_TIME, value))?),
        };

        Ok(Self { name, cooking_time })
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(de)?.unwrap_or_default())
}

/// Integral, non-negative, fits in `u32`. Doubles are accepted because shells
/// and other drivers store plain numbers that way.
fn minutes(value: &Bson) -> Option<u32> {
    match *value {
        Bson::Int32(n) => u32::try_from(n).ok(),
        Bson::Int64(n) => u32::try_from(n).ok(),
        Bson::Double(f) if f.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&f) => {
            Some(f as u32)
        }
        _ => None,
    }
}

fn invalid(field: &'static str, found: &Bson) -> ModelError {
    ModelError::Field { field, found: found.to_string() }
}
