//! REST adapter for the hosted record store.
//!
//! ```text
//! GET   {base}/collections/{collection}/records?order_by=..&direction=..&limit=..
//! PATCH {base}/collections/{collection}/records/{id}
//! ```
//!
//! Both requests carry `Authorization: Bearer <token>` when a token is set.

use std::time::Duration;

use async_trait::async_trait;
use hub_config::StoreConfig;
use hub_core::enums::Collection;
use hub_core::raw::RawRecord;
use serde_json::Value;

use crate::error::StoreError;
use crate::query::ListQuery;
use crate::store::RecordStore;

#[derive(Debug, Clone)]
pub struct HttpStore {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpStore {
    /// Build an adapter from the `[store]` config section.
    ///
    /// `session_token` (the signed-in user's token) wins over the configured
    /// API key.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotConfigured` when no URL is set, or
    /// `StoreError::Http` if the client cannot be built.
    pub fn from_config(
        config: &StoreConfig,
        session_token: Option<String>,
    ) -> Result<Self, StoreError> {
        if !config.is_configured() {
            return Err(StoreError::NotConfigured);
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let token = session_token
            .filter(|t| !t.is_empty())
            .or_else(|| (!config.api_key.is_empty()).then(|| config.api_key.clone()));

        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
            token,
        })
    }

    /// Adapter with a default client; used by tests against a mock server.
    #[must_use]
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn records_url(&self, collection: Collection) -> String {
        format!("{}/collections/{collection}/records", self.base_url)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn check(
        collection: Collection,
        resp: reqwest::Response,
    ) -> Result<reqwest::Response, StoreError> {
        if resp.status().is_success() {
            return Ok(resp);
        }
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        Err(StoreError::Status {
            collection,
            status,
            body,
        })
    }
}

/// Render a list query as a URL query string (empty when unconstrained).
fn query_string(query: &ListQuery) -> String {
    let mut params = Vec::new();
    if let Some(order) = &query.order_by {
        params.push(format!("order_by={}", urlencoding::encode(&order.field)));
        params.push(format!("direction={}", order.direction));
    }
    if let Some(limit) = query.limit {
        params.push(format!("limit={limit}"));
    }

    if params.is_empty() {
        String::new()
    } else {
        format!("?{}", params.join("&"))
    }
}

#[async_trait]
impl RecordStore for HttpStore {
    async fn list(
        &self,
        collection: Collection,
        query: &ListQuery,
    ) -> Result<Vec<RawRecord>, StoreError> {
        let url = format!("{}{}", self.records_url(collection), query_string(query));
        tracing::debug!(%collection, %url, "http store list");

        let resp = self.authorize(self.client.get(&url)).send().await?;
        let resp = Self::check(collection, resp).await?;

        let body: Value = resp.json().await?;
        let Value::Array(items) = body else {
            return Err(StoreError::Decode(format!(
                "{collection}: expected a JSON array of records"
            )));
        };

        // non-object elements are dropped, the rest of the list still renders
        let records = items
            .into_iter()
            .filter_map(|item| match RawRecord::try_from(item) {
                Ok(record) => Some(record),
                Err(other) => {
                    tracing::warn!(%collection, record = %other, "skipping non-object record");
                    None
                }
            })
            .collect();
        Ok(records)
    }

    async fn update(
        &self,
        collection: Collection,
        id: &str,
        partial: &RawRecord,
    ) -> Result<(), StoreError> {
        let url = format!(
            "{}/{}",
            self.records_url(collection),
            urlencoding::encode(id)
        );
        tracing::debug!(%collection, id, "http store update");

        let resp = self
            .authorize(self.client.patch(&url))
            .json(partial)
            .send()
            .await?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound {
                collection,
                id: id.to_string(),
            });
        }
        Self::check(collection, resp).await?;
        Ok(())
    }
}
