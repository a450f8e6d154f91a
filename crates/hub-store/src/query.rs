//! List query parameters shared by every store adapter.

use hub_core::enums::SortDirection;
use serde::{Deserialize, Serialize};

/// Sort key for a list request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBy {
    pub field: String,
    pub direction: SortDirection,
}

impl OrderBy {
    #[must_use]
    pub fn desc(field: &str) -> Self {
        Self {
            field: field.to_string(),
            direction: SortDirection::Desc,
        }
    }

    #[must_use]
    pub fn asc(field: &str) -> Self {
        Self {
            field: field.to_string(),
            direction: SortDirection::Asc,
        }
    }
}

/// Ordering and size cap for a list request. The default lists everything in
/// store order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub order_by: Option<OrderBy>,
    pub limit: Option<usize>,
}

impl ListQuery {
    #[must_use]
    pub const fn ordered(order_by: OrderBy) -> Self {
        Self {
            order_by: Some(order_by),
            limit: None,
        }
    }

    #[must_use]
    pub const fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}
