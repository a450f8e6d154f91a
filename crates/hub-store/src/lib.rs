//! # hub-store
//!
//! Record store access for CardHub.
//!
//! The dashboard reads four collections (`card_news`, `customers`,
//! `ai_recommendations`, `coverage_analysis`) and writes one field
//! (`card_news.view_count`). [`RecordStore`] is the seam; two adapters
//! implement it:
//!
//! - [`MemoryStore`]: in-process, loadable from a JSON fixture file.
//! - [`HttpStore`]: the hosted REST store, via `reqwest`.
//!
//! [`HubService`] wraps a store and returns normalized entities.

pub mod error;
pub mod http;
pub mod memory;
pub mod query;
pub mod repos;
pub mod service;
mod store;

pub use error::StoreError;
pub use http::HttpStore;
pub use memory::MemoryStore;
pub use query::{ListQuery, OrderBy};
pub use service::HubService;
pub use store::RecordStore;
