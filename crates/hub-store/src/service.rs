//! Typed fetches over a [`RecordStore`].
//!
//! `HubService` owns the store handle and the normalization settings. The
//! per-collection fetches live in [`crate::repos`] as `impl HubService`
//! blocks.

use std::sync::Arc;

use hub_config::ContentConfig;
use hub_core::normalize::NormalizeOptions;

use crate::store::RecordStore;

/// Maximum rows a fetch asks for when the caller does not cap it.
pub const DEFAULT_FEED_LIMIT: usize = 50;
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 20;

#[derive(Clone)]
pub struct HubService {
    store: Arc<dyn RecordStore>,
    options: NormalizeOptions,
    feed_limit: usize,
    recommendation_limit: usize,
}

impl HubService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            options: NormalizeOptions::default(),
            feed_limit: DEFAULT_FEED_LIMIT,
            recommendation_limit: DEFAULT_RECOMMENDATION_LIMIT,
        }
    }

    /// Apply the `[content]` config section.
    #[must_use]
    pub fn with_content_config(mut self, config: &ContentConfig) -> Self {
        self.options.placeholder_thumbnail_url = config.placeholder_thumbnail_url.clone();
        self.feed_limit = usize::try_from(config.feed_limit).unwrap_or(usize::MAX);
        self.recommendation_limit =
            usize::try_from(config.recommendation_limit).unwrap_or(usize::MAX);
        self
    }

    pub(crate) fn store(&self) -> &dyn RecordStore {
        self.store.as_ref()
    }

    pub(crate) const fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    pub(crate) const fn feed_limit(&self) -> usize {
        self.feed_limit
    }

    pub(crate) const fn recommendation_limit(&self) -> usize {
        self.recommendation_limit
    }
}

impl std::fmt::Debug for HubService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HubService")
            .field("options", &self.options)
            .field("feed_limit", &self.feed_limit)
            .field("recommendation_limit", &self.recommendation_limit)
            .finish_non_exhaustive()
    }
}
