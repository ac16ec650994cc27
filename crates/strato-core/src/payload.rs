//! Schema-less payload values.
//!
//! Server payloads carry no fixed schema: a `message` may be an object, an
//! array, or a bare scalar, nested to arbitrary depth. Everything decodes
//! into the [`Payload`] tagged union (Null / Bool / Number / String / Array /
//! Object) so the rest of the stack never needs typed deserialization for
//! server documents.

use serde::Serialize;

use crate::error::{Result, StratoError};

/// Weakly typed JSON value tree.
pub type Payload = serde_json::Value;

/// Decode arbitrary JSON text into a payload tree.
///
/// Top-level bare scalars are valid input: a server returning a plain number
/// or string decodes to that scalar, not to a forced container. Integers
/// round-trip at full `i64`/`u64` precision.
pub fn decode(text: &str) -> Result<Payload> {
    serde_json::from_str(text).map_err(|e| StratoError::Decode(format!("invalid json: {e}")))
}

/// Encode any serializable value as canonical JSON text.
///
/// Record-like values encode with their field names as object keys; integral
/// numbers encode without a decimal point.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| StratoError::Internal(format!("encode failed: {e}")))
}

/// Documents headed to a collection endpoint: one or many, stated explicitly
/// by the caller rather than inferred from a value's shape.
#[derive(Debug, Clone)]
pub enum Documents {
    One(Payload),
    Many(Vec<Payload>),
}

impl Documents {
    /// Wire form: collection endpoints always receive an array.
    pub fn into_batch(self) -> Vec<Payload> {
        match self {
            Documents::One(doc) => vec![doc],
            Documents::Many(docs) => docs,
        }
    }
}

/// Render a scalar payload as a plain string, without JSON quoting.
/// Containers and null yield `None`.
pub fn as_plain_string(value: &Payload) -> Option<String> {
    match value {
        Payload::String(s) => Some(s.clone()),
        Payload::Number(n) => Some(n.to_string()),
        Payload::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
