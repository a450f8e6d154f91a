//! Content feed (`card_news`) repository.

use chrono::{DateTime, Utc};
use hub_core::entities::ContentItem;
use hub_core::enums::Collection;
use hub_core::normalize::{self, field};
use hub_core::raw::RawRecord;

use crate::error::StoreError;
use crate::query::{ListQuery, OrderBy};
use crate::service::HubService;

impl HubService {
    /// Most-viewed content first, capped at the configured feed limit.
    pub async fn list_content(&self, now: DateTime<Utc>) -> Result<Vec<ContentItem>, StoreError> {
        let query = ListQuery::ordered(OrderBy::desc(field::VIEW_COUNT)).limit(self.feed_limit());
        let records = self.store().list(Collection::CardNews, &query).await?;

        let items: Vec<ContentItem> = records
            .iter()
            .map(|raw| normalize::content_item(raw, self.options(), now))
            .collect();
        tracing::debug!(count = items.len(), "loaded content feed");
        Ok(items)
    }

    /// Persist `current + 1` as the item's view count and return it.
    ///
    /// The write is a blind overwrite of the caller's count, so two
    /// concurrent viewers can lose an increment.
    pub async fn increment_view_count(
        &self,
        content_id: &str,
        current: u64,
    ) -> Result<u64, StoreError> {
        let next = current.saturating_add(1);
        let partial = RawRecord::new().with(field::VIEW_COUNT, next);
        self.store()
            .update(Collection::CardNews, content_id, &partial)
            .await?;
        tracing::debug!(content_id, view_count = next, "view count persisted");
        Ok(next)
    }
}
