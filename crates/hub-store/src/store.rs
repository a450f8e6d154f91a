use async_trait::async_trait;
use hub_core::enums::Collection;
use hub_core::raw::RawRecord;

use crate::error::StoreError;
use crate::query::ListQuery;

/// A document store holding the dashboard's collections.
///
/// Implementations return records untouched; typing happens in
/// [`hub_core::normalize`].
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// List records of `collection`, ordered and capped per `query`.
    async fn list(
        &self,
        collection: Collection,
        query: &ListQuery,
    ) -> Result<Vec<RawRecord>, StoreError>;

    /// Overwrite the given fields of one record.
    async fn update(
        &self,
        collection: Collection,
        id: &str,
        partial: &RawRecord,
    ) -> Result<(), StoreError>;
}
