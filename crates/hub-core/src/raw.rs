//! Untyped record shape returned by the record store.
//!
//! A [`RawRecord`] is a JSON object with `snake_case` keys whose values may be
//! missing, `null`, or stored with the wrong JSON type (numbers as strings,
//! lists as serialized strings). Nothing outside [`crate::normalize`] should
//! read typed values out of it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field name of the identity column shared by every collection.
pub const ID_FIELD: &str = "id";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(Map<String, Value>);

impl RawRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, used for fixtures and partial updates.
    #[must_use]
    pub fn with(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.0.insert(field.to_string(), value.into());
        self
    }

    pub fn insert(&mut self, field: &str, value: impl Into<Value>) {
        self.0.insert(field.to_string(), value.into());
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// The record identity rendered as text. Stores may hand out numeric ids.
    #[must_use]
    pub fn id(&self) -> Option<String> {
        match self.0.get(ID_FIELD)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Overwrite this record's fields with every field in `partial`.
    pub fn merge(&mut self, partial: &Self) {
        for (field, value) in &partial.0 {
            self.0.insert(field.clone(), value.clone());
        }
    }
}

impl TryFrom<Value> for RawRecord {
    type Error = Value;

    /// Accept only JSON objects; any other value is handed back unchanged.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(other),
        }
    }
}
