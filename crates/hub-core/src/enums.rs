//! Categories, collections, and derived classifications for CardHub.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! so the serialized form matches the keys stored in the record store.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// ContentCategory
// ---------------------------------------------------------------------------

/// Curation bucket of a card-news content item. Each bucket is one tab of the
/// content hub.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ContentCategory {
    #[default]
    Best,
    DesignerPick,
    CustomerPick,
}

impl ContentCategory {
    pub const ALL: [Self; 3] = [Self::Best, Self::DesignerPick, Self::CustomerPick];

    /// Return the key used in the record store.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Best => "best",
            Self::DesignerPick => "designer_pick",
            Self::CustomerPick => "customer_pick",
        }
    }

    /// Human-readable tab label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Best => "Best content",
            Self::DesignerPick => "Designer's pick",
            Self::CustomerPick => "Customer's pick",
        }
    }

    /// Parse a stored key, returning `None` for anything unrecognized.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.as_str() == key)
    }
}

impl fmt::Display for ContentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
            .ok_or_else(|| CoreError::Validation(format!("unknown content category '{s}'")))
    }
}

// ---------------------------------------------------------------------------
// Collection
// ---------------------------------------------------------------------------

/// Record-store collections read by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    CardNews,
    Customers,
    AiRecommendations,
    CoverageAnalysis,
}

impl Collection {
    pub const ALL: [Self; 4] = [
        Self::CardNews,
        Self::Customers,
        Self::AiRecommendations,
        Self::CoverageAnalysis,
    ];

    /// Look up a collection by its store name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|collection| collection.as_str() == name)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CardNews => "card_news",
            Self::Customers => "customers",
            Self::AiRecommendations => "ai_recommendations",
            Self::CoverageAnalysis => "coverage_analysis",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SortDirection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Staleness
// ---------------------------------------------------------------------------

/// Freshness of a customer relationship, derived from the last contact.
///
/// ```text
/// elapsed <= recent_within_days  → recent
/// elapsed >  stale_after_days    → stale (needs outreach)
/// otherwise                      → neutral
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Staleness {
    Recent,
    Neutral,
    Stale,
}

impl Staleness {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Recent => "recent",
            Self::Neutral => "neutral",
            Self::Stale => "stale",
        }
    }

    /// Whether the customer should be flagged for outreach.
    #[must_use]
    pub const fn needs_outreach(self) -> bool {
        matches!(self, Self::Stale)
    }
}

impl fmt::Display for Staleness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AgeBand
// ---------------------------------------------------------------------------

/// Fixed, non-overlapping customer age bins used by the age chart.
///
/// ```text
/// [0,30) → 20s   [30,40) → 30s   [40,50) → 40s   [50,∞) → 50s+
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AgeBand {
    Twenties,
    Thirties,
    Forties,
    FiftiesPlus,
}

impl AgeBand {
    pub const ALL: [Self; 4] = [
        Self::Twenties,
        Self::Thirties,
        Self::Forties,
        Self::FiftiesPlus,
    ];

    #[must_use]
    pub const fn for_age(age: u32) -> Self {
        if age < 30 {
            Self::Twenties
        } else if age < 40 {
            Self::Thirties
        } else if age < 50 {
            Self::Forties
        } else {
            Self::FiftiesPlus
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Twenties => "20s",
            Self::Thirties => "30s",
            Self::Forties => "40s",
            Self::FiftiesPlus => "50s+",
        }
    }
}

impl fmt::Display for AgeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
