//! AI recommendation repository.

use hub_core::entities::Recommendation;
use hub_core::enums::Collection;
use hub_core::normalize::{self, field};

use crate::error::StoreError;
use crate::query::{ListQuery, OrderBy};
use crate::service::HubService;

impl HubService {
    /// Highest-confidence recommendations first, capped at the configured limit.
    ///
    /// Customer references are not resolved here; see
    /// [`hub_core::join::join_customers`].
    pub async fn list_recommendations(&self) -> Result<Vec<Recommendation>, StoreError> {
        let query = ListQuery::ordered(OrderBy::desc(field::CONFIDENCE_SCORE))
            .limit(self.recommendation_limit());
        let records = self
            .store()
            .list(Collection::AiRecommendations, &query)
            .await?;

        let recommendations: Vec<Recommendation> =
            records.iter().map(normalize::recommendation).collect();
        tracing::debug!(count = recommendations.len(), "loaded recommendations");
        Ok(recommendations)
    }
}
