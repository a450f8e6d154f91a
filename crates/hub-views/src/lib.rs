//! # hub-views
//!
//! Per-screen controllers. Each controller owns its own snapshot of the
//! data it renders, issues its fetches concurrently, and turns fetch failures
//! into notifications and a safe empty state.
//!
//! - [`ContentHubController`]: card-news feed, category tabs, recommended
//!   customers, view counting, sharing.
//! - [`CoverageDashboardController`]: statistics, insurance and age
//!   distributions, premium trend, customer list with contact staleness.

pub mod content_hub;
pub mod coverage_dashboard;
pub mod error;
pub mod notify;

#[cfg(test)]
mod test_support;

pub use content_hub::ContentHubController;
pub use coverage_dashboard::{CoverageDashboardController, build_dashboard};
pub use error::ViewError;
pub use notify::{CollectingNotifier, LogNotifier, Notification, NotificationLevel, Notifier};

use serde::Serialize;

/// Whether a screen's data has finished loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadState {
    Loading,
    Ready,
}
