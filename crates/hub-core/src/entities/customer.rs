use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A customer managed by the agent.
///
/// `last_contact_at` is `None` only when the store held a value that could not
/// be read as a timestamp; an absent value normalizes to the load time.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub phone: String,
    pub email: String,
    pub insurance_type: String,
    pub last_contact_at: Option<DateTime<Utc>>,
    pub notes: String,
}
