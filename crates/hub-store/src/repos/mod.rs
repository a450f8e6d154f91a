//! Per-collection fetches.
//!
//! Each module adds methods to `HubService` via `impl HubService` blocks.

pub mod content;
pub mod coverage;
pub mod customer;
pub mod recommendation;
