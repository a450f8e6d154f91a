//! Shared fixtures for controller tests.

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use hub_core::enums::Collection;
use hub_core::raw::RawRecord;
use hub_store::{HubService, ListQuery, MemoryStore, RecordStore, StoreError};
use serde_json::{Value, json};

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 30, 12, 0, 0).unwrap()
}

pub fn raw(value: Value) -> RawRecord {
    RawRecord::try_from(value).unwrap()
}

/// A memory store that can be told to fail specific operations.
#[derive(Default)]
pub struct FlakyStore {
    pub inner: MemoryStore,
    failing_lists: HashSet<Collection>,
    fail_updates: AtomicBool,
}

impl FlakyStore {
    pub fn new(inner: MemoryStore) -> Self {
        Self {
            inner,
            ..Self::default()
        }
    }

    pub fn failing_list(mut self, collection: Collection) -> Self {
        self.failing_lists.insert(collection);
        self
    }

    pub fn set_fail_updates(&self, fail: bool) {
        self.fail_updates.store(fail, Ordering::SeqCst);
    }
}

fn unavailable(collection: Collection) -> StoreError {
    StoreError::Status {
        collection,
        status: 503,
        body: "unavailable".into(),
    }
}

#[async_trait]
impl RecordStore for FlakyStore {
    async fn list(
        &self,
        collection: Collection,
        query: &ListQuery,
    ) -> Result<Vec<RawRecord>, StoreError> {
        if self.failing_lists.contains(&collection) {
            return Err(unavailable(collection));
        }
        self.inner.list(collection, query).await
    }

    async fn update(
        &self,
        collection: Collection,
        id: &str,
        partial: &RawRecord,
    ) -> Result<(), StoreError> {
        if self.fail_updates.load(Ordering::SeqCst) {
            return Err(unavailable(collection));
        }
        self.inner.update(collection, id, partial).await
    }
}

/// Two customers, three content items, recommendations with one orphan,
/// and analyses with one orphan.
pub fn sample_store() -> MemoryStore {
    MemoryStore::new()
        .with_records(
            Collection::CardNews,
            vec![
                raw(json!({"id": "n1", "title": "Tax tips", "category": "best", "view_count": 10})),
                raw(json!({"id": "n2", "title": "Kids cover", "category": "designer_pick", "view_count": 30})),
                raw(json!({"id": "n3", "title": "Retire well", "category": "best", "view_count": "7"})),
            ],
        )
        .with_records(
            Collection::Customers,
            vec![
                raw(json!({"id": "c1", "name": "Kim", "age": 34, "insurance_type": "life",
                           "last_contact_date": "2026-06-28T09:00:00Z"})),
                raw(json!({"id": "c2", "name": "Lee", "age": 52, "insurance_type": "health",
                           "last_contact_date": "2026-04-01T09:00:00Z"})),
            ],
        )
        .with_records(
            Collection::AiRecommendations,
            vec![
                raw(json!({"id": "r1", "card_news_id": "n1", "customer_id": "c1",
                           "reason": "Young family", "confidence_score": 0.87})),
                raw(json!({"id": "r2", "card_news_id": "n1", "customer_id": "ghost",
                           "reason": "Deleted", "confidence_score": 0.99})),
                raw(json!({"id": "r3", "card_news_id": "n2", "customer_id": "c2",
                           "reason": "Near retirement", "confidence_score": 0.6})),
            ],
        )
        .with_records(
            Collection::CoverageAnalysis,
            vec![
                raw(json!({"id": "a1", "customer_id": "c1", "coverage_amount": 100_000_000,
                           "premium_amount": 150_000, "analysis_date": "2026-06-10"})),
                raw(json!({"id": "a2", "customer_id": "c1", "coverage_amount": 50_000_000,
                           "premium_amount": 80_000, "analysis_date": "2026-05-02"})),
                raw(json!({"id": "a3", "customer_id": "ghost", "coverage_amount": 1,
                           "premium_amount": 1, "analysis_date": "2026-06-01"})),
            ],
        )
}

pub fn service(store: Arc<dyn RecordStore>) -> HubService {
    HubService::new(store)
}
