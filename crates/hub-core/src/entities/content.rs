use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ContentCategory;

/// A promotable card-news item shown in the content hub.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub category: ContentCategory,
    pub view_count: u64,
    pub like_count: u64,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}
