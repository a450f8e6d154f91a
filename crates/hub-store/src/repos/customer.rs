//! Customer repository.

use chrono::{DateTime, Utc};
use hub_core::entities::Customer;
use hub_core::enums::Collection;
use hub_core::normalize::{self, field};

use crate::error::StoreError;
use crate::query::{ListQuery, OrderBy};
use crate::service::HubService;

impl HubService {
    /// All customers, most recently contacted first.
    pub async fn list_customers(&self, now: DateTime<Utc>) -> Result<Vec<Customer>, StoreError> {
        let query = ListQuery::ordered(OrderBy::desc(field::LAST_CONTACT_DATE));
        let records = self.store().list(Collection::Customers, &query).await?;

        let customers: Vec<Customer> = records
            .iter()
            .map(|raw| normalize::customer(raw, now))
            .collect();
        tracing::debug!(count = customers.len(), "loaded customers");
        Ok(customers)
    }
}
