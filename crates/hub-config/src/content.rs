//! Content hub configuration.

use hub_core::enums::ContentCategory;
use hub_core::normalize::DEFAULT_THUMBNAIL_URL;
use serde::{Deserialize, Serialize};

const fn default_feed_limit() -> u32 {
    50
}

const fn default_recommendation_limit() -> u32 {
    20
}

fn default_placeholder_thumbnail_url() -> String {
    DEFAULT_THUMBNAIL_URL.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentConfig {
    /// Most content items fetched per load (highest view counts first).
    #[serde(default = "default_feed_limit")]
    pub feed_limit: u32,

    /// Most recommendations fetched per load (highest confidence first).
    #[serde(default = "default_recommendation_limit")]
    pub recommendation_limit: u32,

    /// Image shown for items without a usable thumbnail.
    #[serde(default = "default_placeholder_thumbnail_url")]
    pub placeholder_thumbnail_url: String,

    /// Tab selected when the hub opens.
    #[serde(default)]
    pub default_tab: ContentCategory,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            feed_limit: default_feed_limit(),
            recommendation_limit: default_recommendation_limit(),
            placeholder_thumbnail_url: default_placeholder_thumbnail_url(),
            default_tab: ContentCategory::default(),
        }
    }
}
