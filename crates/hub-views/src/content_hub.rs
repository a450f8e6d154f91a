//! Content hub screen: the card-news feed with per-item customer
//! recommendations.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use hub_core::entities::{ContentItem, Recommendation};
use hub_core::enums::ContentCategory;
use hub_core::join::{self, ResolvedRecommendation};
use hub_core::views::{ContentDetail, RecommendationView, ViewCountOutcome};
use hub_store::{HubService, StoreError};

use crate::LoadState;
use crate::error::ViewError;
use crate::notify::{Notification, Notifier};

pub struct ContentHubController {
    service: HubService,
    notifier: Arc<dyn Notifier>,
    state: LoadState,
    items: Vec<ContentItem>,
    recommendations: Vec<ResolvedRecommendation>,
    tab: ContentCategory,
    selected: Option<String>,
}

impl ContentHubController {
    pub fn new(service: HubService, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            service,
            notifier,
            state: LoadState::Loading,
            items: Vec::new(),
            recommendations: Vec::new(),
            tab: ContentCategory::default(),
            selected: None,
        }
    }

    #[must_use]
    pub fn with_tab(mut self, tab: ContentCategory) -> Self {
        self.tab = tab;
        self
    }

    /// Fetch the feed and the recommendations concurrently.
    ///
    /// A feed failure raises an error notification and leaves the feed empty.
    /// A recommendation failure is only logged.
    pub async fn load(&mut self, now: DateTime<Utc>) {
        self.state = LoadState::Loading;

        let (feed, recommendations) =
            tokio::join!(self.service.list_content(now), self.fetch_recommendations(now));

        self.items = match feed {
            Ok(items) => items,
            Err(error) => {
                tracing::error!(%error, "content feed failed to load");
                self.notifier
                    .notify(Notification::error("Error", "Failed to load content."));
                Vec::new()
            }
        };

        self.recommendations = match recommendations {
            Ok(recommendations) => recommendations,
            Err(error) => {
                tracing::warn!(%error, "recommendations failed to load");
                Vec::new()
            }
        };

        self.state = LoadState::Ready;
        tracing::debug!(
            items = self.items.len(),
            recommendations = self.recommendations.len(),
            "content hub loaded"
        );
    }

    async fn fetch_recommendations(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<ResolvedRecommendation>, StoreError> {
        let (recommendations, customers) = tokio::join!(
            self.service.list_recommendations(),
            self.service.list_customers(now)
        );
        let report = join::join_customers::<Recommendation>(recommendations?, &customers?);
        if report.dropped_count() > 0 {
            tracing::warn!(
                dropped = report.dropped_count(),
                "recommendations reference missing customers"
            );
        }
        Ok(report.into_resolved())
    }

    #[must_use]
    pub const fn state(&self) -> LoadState {
        self.state
    }

    #[must_use]
    pub const fn tab(&self) -> ContentCategory {
        self.tab
    }

    pub const fn set_tab(&mut self, tab: ContentCategory) {
        self.tab = tab;
    }

    /// Every loaded item, most viewed first.
    #[must_use]
    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    /// Items in the active tab.
    #[must_use]
    pub fn visible_items(&self) -> Vec<&ContentItem> {
        self.items
            .iter()
            .filter(|item| item.category == self.tab)
            .collect()
    }

    #[must_use]
    pub fn item(&self, content_id: &str) -> Option<&ContentItem> {
        self.items.iter().find(|item| item.id == content_id)
    }

    /// The item last opened with [`Self::view_details`].
    #[must_use]
    pub fn selected(&self) -> Option<&ContentItem> {
        self.selected.as_deref().and_then(|id| self.item(id))
    }

    /// Customers recommended for one item, highest confidence first.
    #[must_use]
    pub fn recommendations_for(&self, content_id: &str) -> Vec<RecommendationView> {
        join::recommendations_for(&self.recommendations, content_id)
            .into_iter()
            .map(RecommendationView::from)
            .collect()
    }

    /// Detail panel for one item.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::ContentNotFound` if the item is not loaded.
    pub fn detail(&self, content_id: &str) -> Result<ContentDetail, ViewError> {
        let item = self
            .item(content_id)
            .ok_or_else(|| ViewError::ContentNotFound(content_id.to_string()))?;
        Ok(ContentDetail {
            item: item.clone(),
            recommendations: self.recommendations_for(content_id),
        })
    }

    /// Open an item and record the view.
    ///
    /// The screen shows `view_count + 1` immediately. If the store rejects
    /// the write the local count is rolled back and the failure is logged;
    /// no notification is raised. Each call increments again.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::ContentNotFound` if the item is not loaded.
    pub async fn view_details(&mut self, content_id: &str) -> Result<ViewCountOutcome, ViewError> {
        let idx = self
            .items
            .iter()
            .position(|item| item.id == content_id)
            .ok_or_else(|| ViewError::ContentNotFound(content_id.to_string()))?;

        self.selected = Some(content_id.to_string());
        let previous = self.items[idx].view_count;
        self.items[idx].view_count = previous.saturating_add(1);

        match self.service.increment_view_count(content_id, previous).await {
            Ok(view_count) => Ok(ViewCountOutcome {
                content_id: content_id.to_string(),
                view_count,
                persisted: true,
            }),
            Err(error) => {
                tracing::warn!(%error, content_id, "view count update failed; rolling back");
                self.items[idx].view_count = previous;
                Ok(ViewCountOutcome {
                    content_id: content_id.to_string(),
                    view_count: previous,
                    persisted: false,
                })
            }
        }
    }

    /// Hand an item to the messenger share flow and confirm it to the user.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::ContentNotFound` if the item is not loaded.
    pub fn share(&self, content_id: &str) -> Result<(), ViewError> {
        let item = self
            .item(content_id)
            .ok_or_else(|| ViewError::ContentNotFound(content_id.to_string()))?;
        tracing::info!(content_id, "content shared");
        self.notifier.notify(Notification::info(
            "Shared",
            format!("\"{}\" is ready to send.", item.title),
        ));
        Ok(())
    }
}
