//! Coverage analysis dashboard: headline statistics, three charts, and the
//! customer management list.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use hub_config::DashboardConfig;
use hub_core::aggregate;
use hub_core::entities::{CoverageAnalysis, Customer};
use hub_core::join;
use hub_core::staleness::{StalenessPolicy, days_since};
use hub_core::views::{CoverageDashboard, CustomerOverviewRow};
use hub_store::HubService;

use crate::LoadState;
use crate::error::ViewError;
use crate::notify::{Notification, Notifier};

/// Rows shown in the customer list when not configured.
pub const DEFAULT_CUSTOMER_ROWS: usize = 10;

pub struct CoverageDashboardController {
    service: HubService,
    notifier: Arc<dyn Notifier>,
    policy: StalenessPolicy,
    customer_rows: usize,
    state: LoadState,
    dashboard: CoverageDashboard,
}

impl CoverageDashboardController {
    pub fn new(service: HubService, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            service,
            notifier,
            policy: StalenessPolicy::default(),
            customer_rows: DEFAULT_CUSTOMER_ROWS,
            state: LoadState::Loading,
            dashboard: CoverageDashboard::default(),
        }
    }

    /// Apply the `[dashboard]` config section.
    #[must_use]
    pub fn with_config(mut self, config: &DashboardConfig) -> Self {
        self.policy = config.staleness_policy();
        self.customer_rows = config.customer_rows;
        self
    }

    /// Fetch and derive the dashboard. On failure an error notification is
    /// raised and the dashboard is left empty.
    pub async fn load(&mut self, now: DateTime<Utc>) -> &CoverageDashboard {
        self.state = LoadState::Loading;
        self.dashboard = match self.fetch(now).await {
            Ok(dashboard) => dashboard,
            Err(error) => {
                tracing::error!(%error, "coverage dashboard failed to load");
                self.notifier
                    .notify(Notification::error("Error", "Failed to load data."));
                CoverageDashboard::default()
            }
        };
        self.state = LoadState::Ready;
        &self.dashboard
    }

    /// Fetch customers and analyses concurrently and derive the dashboard.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Store` if either fetch fails.
    pub async fn fetch(&self, now: DateTime<Utc>) -> Result<CoverageDashboard, ViewError> {
        let (customers, analyses) = tokio::join!(
            self.service.list_customers(now),
            self.service.list_coverage_analyses(now)
        );
        Ok(build_dashboard(
            &customers?,
            analyses?,
            self.policy,
            self.customer_rows,
            now,
        ))
    }

    #[must_use]
    pub const fn state(&self) -> LoadState {
        self.state
    }

    #[must_use]
    pub const fn dashboard(&self) -> &CoverageDashboard {
        &self.dashboard
    }
}

/// Derive every dashboard section from one load's customers and analyses.
///
/// `customers` is expected in display order (most recently contacted first)
/// and `analyses` newest first, so the first analysis per customer is the
/// latest one.
#[must_use]
pub fn build_dashboard(
    customers: &[Customer],
    analyses: Vec<CoverageAnalysis>,
    policy: StalenessPolicy,
    customer_rows: usize,
    now: DateTime<Utc>,
) -> CoverageDashboard {
    let report = join::join_customers(analyses, customers);
    let dropped_analyses = report.dropped_count();
    if dropped_analyses > 0 {
        tracing::warn!(
            dropped = dropped_analyses,
            "coverage analyses reference missing customers"
        );
    }
    let analyses = report.into_resolved();
    let latest = join::first_analysis_by_customer(&analyses);

    let rows = customers
        .iter()
        .take(customer_rows)
        .map(|customer| {
            let days_since_contact = days_since(customer.last_contact_at, now);
            CustomerOverviewRow {
                customer: customer.clone(),
                days_since_contact,
                staleness: policy.classify_days(days_since_contact),
                analysis: latest
                    .get(customer.id.as_str())
                    .map(|resolved| resolved.record.clone()),
            }
        })
        .collect();

    CoverageDashboard {
        statistics: aggregate::summary_statistics(customers, &analyses),
        insurance_distribution: aggregate::insurance_distribution(customers),
        age_distribution: aggregate::age_distribution(customers),
        premium_trend: aggregate::premium_trend(&analyses),
        customers: rows,
        dropped_analyses,
    }
}
