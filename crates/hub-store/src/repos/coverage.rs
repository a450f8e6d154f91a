//! Coverage analysis repository.

use chrono::{DateTime, Utc};
use hub_core::entities::CoverageAnalysis;
use hub_core::enums::Collection;
use hub_core::normalize::{self, field};

use crate::error::StoreError;
use crate::query::{ListQuery, OrderBy};
use crate::service::HubService;

impl HubService {
    /// All coverage analyses, newest first.
    pub async fn list_coverage_analyses(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<CoverageAnalysis>, StoreError> {
        let query = ListQuery::ordered(OrderBy::desc(field::ANALYSIS_DATE));
        let records = self
            .store()
            .list(Collection::CoverageAnalysis, &query)
            .await?;

        let analyses: Vec<CoverageAnalysis> = records
            .iter()
            .map(|raw| normalize::coverage_analysis(raw, now))
            .collect();
        tracing::debug!(count = analyses.len(), "loaded coverage analyses");
        Ok(analyses)
    }
}
