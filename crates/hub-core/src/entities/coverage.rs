use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Computed coverage recommendation for one customer. Amounts are in KRW.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CoverageAnalysis {
    pub id: String,
    pub customer_id: String,
    pub insurance_type: String,
    pub coverage_amount: f64,
    pub premium_amount: f64,
    pub analyzed_at: DateTime<Utc>,
    pub recommendations: String,
}

impl AsRef<Self> for CoverageAnalysis {
    fn as_ref(&self) -> &Self {
        self
    }
}
