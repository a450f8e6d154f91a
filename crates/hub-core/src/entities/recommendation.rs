use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Suggestion to send a content item to a customer.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Recommendation {
    pub id: String,
    pub content_id: String,
    pub customer_id: String,
    pub reason: String,
    /// Match confidence in `[0, 1]`.
    pub confidence_score: f64,
}

impl Recommendation {
    /// Confidence as a whole percentage, as shown next to each match.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn match_percent(&self) -> u32 {
        (self.confidence_score.clamp(0.0, 1.0) * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(confidence_score: f64) -> Recommendation {
        Recommendation {
            id: "rec-1".into(),
            content_id: "card-1".into(),
            customer_id: "cus-1".into(),
            reason: String::new(),
            confidence_score,
        }
    }

    #[test]
    fn match_percent_rounds() {
        assert_eq!(rec(0.874).match_percent(), 87);
        assert_eq!(rec(0.875).match_percent(), 88);
        assert_eq!(rec(0.0).match_percent(), 0);
        assert_eq!(rec(1.0).match_percent(), 100);
    }
}
