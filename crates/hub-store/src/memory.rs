//! In-process record store.
//!
//! Used for fixtures, demos, and tests. Ordering mirrors what a document
//! store does for mixed data: numbers (including numeric strings) compare
//! numerically, everything else compares as text, and records without the
//! sort field come last in either direction.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use hub_core::enums::{Collection, SortDirection};
use hub_core::raw::RawRecord;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::query::ListQuery;
use crate::store::RecordStore;

#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<Collection, Vec<RawRecord>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a fixture document of the form `{"card_news": [...], ...}`.
    ///
    /// Unknown collection names are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Fixture` if the document is not an object of
    /// record arrays.
    pub fn from_fixture_json(json: &str) -> Result<Self, StoreError> {
        let document: HashMap<String, Vec<RawRecord>> =
            serde_json::from_str(json).map_err(|e| StoreError::Fixture(e.to_string()))?;

        let mut collections = HashMap::new();
        for (name, records) in document {
            match Collection::from_name(&name) {
                Some(collection) => {
                    collections.insert(collection, records);
                }
                None => tracing::warn!(collection = %name, "ignoring unknown fixture collection"),
            }
        }

        Ok(Self {
            collections: RwLock::new(collections),
        })
    }

    /// Read and parse a fixture file.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Fixture` if the file cannot be read or parsed.
    pub async fn from_fixture_file(path: &Path) -> Result<Self, StoreError> {
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| StoreError::Fixture(format!("{}: {e}", path.display())))?;
        Self::from_fixture_json(&json)
    }

    /// Builder-style seed of one collection.
    #[must_use]
    pub fn with_records(mut self, collection: Collection, records: Vec<RawRecord>) -> Self {
        self.collections.get_mut().insert(collection, records);
        self
    }

    /// Current contents of a collection in insertion order.
    pub async fn records(&self, collection: Collection) -> Vec<RawRecord> {
        self.collections
            .read()
            .await
            .get(&collection)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn list(
        &self,
        collection: Collection,
        query: &ListQuery,
    ) -> Result<Vec<RawRecord>, StoreError> {
        let mut records = self.records(collection).await;

        if let Some(order) = &query.order_by {
            sort_records(&mut records, &order.field, order.direction);
        }
        if let Some(limit) = query.limit {
            records.truncate(limit);
        }

        tracing::debug!(%collection, count = records.len(), "memory store list");
        Ok(records)
    }

    async fn update(
        &self,
        collection: Collection,
        id: &str,
        partial: &RawRecord,
    ) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;
        let record = collections
            .get_mut(&collection)
            .and_then(|records| records.iter_mut().find(|r| r.id().as_deref() == Some(id)))
            .ok_or_else(|| StoreError::NotFound {
                collection,
                id: id.to_string(),
            })?;

        record.merge(partial);
        tracing::debug!(%collection, id, "memory store update");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

#[derive(Debug)]
enum SortKey {
    Number(f64),
    Text(String),
}

impl SortKey {
    fn of(value: Option<&Value>) -> Option<Self> {
        match value? {
            Value::Null => None,
            Value::Number(n) => n.as_f64().map(Self::Number),
            Value::String(s) => match s.trim().parse::<f64>() {
                Ok(n) if n.is_finite() => Some(Self::Number(n)),
                _ => Some(Self::Text(s.clone())),
            },
            other => Some(Self::Text(other.to_string())),
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Number(_), Self::Text(_)) => Ordering::Less,
            (Self::Text(_), Self::Number(_)) => Ordering::Greater,
        }
    }
}

/// Stable sort; ties keep insertion order and missing keys always trail.
fn sort_records(records: &mut Vec<RawRecord>, field: &str, direction: SortDirection) {
    let mut keyed: Vec<(Option<SortKey>, RawRecord)> = records
        .drain(..)
        .map(|record| (SortKey::of(record.get(field)), record))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => match direction {
            SortDirection::Asc => a.compare(b),
            SortDirection::Desc => b.compare(a),
        },
    });

    records.extend(keyed.into_iter().map(|(_, record)| record));
}
