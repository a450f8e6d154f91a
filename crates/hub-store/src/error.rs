//! Store error types for hub-store.

use hub_core::enums::Collection;
use thiserror::Error;

/// Errors from record store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The request never produced a response (connect, timeout, TLS).
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The store answered with a non-success status.
    #[error("Store returned HTTP {status} for {collection}: {body}")]
    Status {
        collection: Collection,
        status: u16,
        body: String,
    },

    /// An update targeted a record that does not exist.
    #[error("Record not found: {collection}/{id}")]
    NotFound { collection: Collection, id: String },

    /// The store answered with a payload we cannot read as records.
    #[error("Malformed store response: {0}")]
    Decode(String),

    /// A fixture file could not be read or parsed.
    #[error("Fixture error: {0}")]
    Fixture(String),

    /// No store URL is configured.
    #[error("Store not configured: set store.url or CARDHUB_STORE__URL")]
    NotConfigured,
}

impl StoreError {
    /// Whether the store reported the target as missing.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
