//! Coverage dashboard configuration.

use hub_core::staleness::StalenessPolicy;
use serde::{Deserialize, Serialize};

const fn default_customer_rows() -> usize {
    10
}

const fn default_stale_after_days() -> i64 {
    30
}

const fn default_recent_within_days() -> i64 {
    7
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DashboardConfig {
    /// Rows shown in the customer management list.
    #[serde(default = "default_customer_rows")]
    pub customer_rows: usize,

    /// More days than this since last contact flags a customer for outreach.
    #[serde(default = "default_stale_after_days")]
    pub stale_after_days: i64,

    /// At most this many days since last contact counts as recent.
    #[serde(default = "default_recent_within_days")]
    pub recent_within_days: i64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            customer_rows: default_customer_rows(),
            stale_after_days: default_stale_after_days(),
            recent_within_days: default_recent_within_days(),
        }
    }
}

impl DashboardConfig {
    pub const fn staleness_policy(&self) -> StalenessPolicy {
        StalenessPolicy {
            stale_after_days: self.stale_after_days,
            recent_within_days: self.recent_within_days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_policy_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.customer_rows, 10);
        assert_eq!(config.staleness_policy(), StalenessPolicy::default());
    }
}
