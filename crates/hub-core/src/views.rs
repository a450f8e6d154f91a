//! View-model types handed to the presentation layer.
//!
//! These structs define the shape of what each screen renders: the content
//! hub's detail panel and the coverage dashboard's cards, charts, and
//! customer list. They are rebuilt from scratch on every load.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{ContentItem, CoverageAnalysis, Customer};
use crate::enums::{AgeBand, Staleness};
use crate::join::ResolvedRecommendation;

/// Headline numbers at the top of the coverage dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DashboardStatistics {
    pub total_customers: usize,
    /// Sum of coverage amounts across all joined analyses (KRW).
    pub total_coverage: f64,
    /// Sum of monthly premiums across all joined analyses (KRW).
    pub total_premiums: f64,
    /// Arithmetic mean of customer ages; `0` with no customers.
    pub average_age: f64,
}

/// One slice of the insurance-type pie chart.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
    /// Share of all customers, 0–100.
    pub percent: f64,
}

/// One bar of the age-distribution chart.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AgeBucketCount {
    pub band: AgeBand,
    pub label: String,
    pub count: usize,
}

/// One point of the monthly premium line chart.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TrendPoint {
    /// Calendar month as `YYYY-MM`.
    pub month: String,
    pub amount: f64,
}

/// A row of the customer management list.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CustomerOverviewRow {
    pub customer: Customer,
    /// Whole days since last contact; `None` if never contacted.
    pub days_since_contact: Option<i64>,
    pub staleness: Staleness,
    /// Newest coverage analysis for this customer, if any.
    pub analysis: Option<CoverageAnalysis>,
}

/// Everything the coverage dashboard renders.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CoverageDashboard {
    pub statistics: DashboardStatistics,
    pub insurance_distribution: Vec<CategoryCount>,
    pub age_distribution: Vec<AgeBucketCount>,
    pub premium_trend: Vec<TrendPoint>,
    pub customers: Vec<CustomerOverviewRow>,
    /// Analyses excluded because their customer does not exist.
    pub dropped_analyses: usize,
}

/// A recommended customer shown on a content item's detail panel.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RecommendationView {
    pub id: String,
    pub reason: String,
    pub confidence_score: f64,
    pub match_percent: u32,
    pub customer: Customer,
}

impl From<&ResolvedRecommendation> for RecommendationView {
    fn from(resolved: &ResolvedRecommendation) -> Self {
        Self {
            id: resolved.record.id.clone(),
            reason: resolved.record.reason.clone(),
            confidence_score: resolved.record.confidence_score,
            match_percent: resolved.record.match_percent(),
            customer: resolved.customer.clone(),
        }
    }
}

/// Detail panel of one content item.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ContentDetail {
    pub item: ContentItem,
    pub recommendations: Vec<RecommendationView>,
}

/// Result of recording a detail view against the store.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ViewCountOutcome {
    pub content_id: String,
    /// View count held by the screen after the attempt.
    pub view_count: u64,
    /// Whether the store acknowledged the increment. When `false` the
    /// optimistic increment has been rolled back.
    pub persisted: bool,
}
