//! Record ids and foreign keys
//!
//! Ids are opaque strings. Snapshots may carry numeric ids, which are
//! stored as their decimal text.
//!
//! Foreign keys keep whatever form they were supplied in (number or
//! text) and are compared loosely: two keys match when both sides read
//! as the same number, or otherwise when their text is equal.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Lenient id decoding for snapshot records
pub mod record_id {
    use serde::{Deserialize, Deserializer};
    use serde_json::Number;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(Number),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => text,
            RawId::Number(number) => number.to_string(),
        })
    }
}

/// Unvalidated reference from a dependent record to an actor id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ForeignKey {
    Number(Number),
    Text(String),
}

impl ForeignKey {
    /// Build a key from a path segment: integers are kept numeric,
    /// anything else is kept as opaque text.
    pub fn from_segment(segment: &str) -> Self {
        match segment.parse::<i64>() {
            Ok(value) => ForeignKey::Number(value.into()),
            Err(_) => ForeignKey::Text(segment.to_string()),
        }
    }

    /// Numeric reading of the key, if it has one
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ForeignKey::Number(number) => number.as_f64(),
            ForeignKey::Text(text) => coerce_number(text),
        }
    }

    /// Loose comparison against a raw lookup value
    pub fn matches(&self, candidate: &str) -> bool {
        match (self.as_number(), coerce_number(candidate)) {
            (Some(left), Some(right)) => left == right,
            _ => match self {
                ForeignKey::Text(text) => text == candidate,
                ForeignKey::Number(number) => number.to_string() == candidate,
            },
        }
    }
}

fn coerce_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}
