//! Contact staleness classification.
//!
//! Elapsed time is counted in whole days, rounding toward negative infinity,
//! so a contact 23 hours ago is day 0 and a contact one hour in the future is
//! day -1. A missing timestamp means the customer was never contacted and is
//! always stale.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Staleness;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

const fn default_stale_after_days() -> i64 {
    30
}

const fn default_recent_within_days() -> i64 {
    7
}

/// Day thresholds for [`Staleness`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StalenessPolicy {
    /// Strictly more elapsed days than this is stale.
    #[serde(default = "default_stale_after_days")]
    pub stale_after_days: i64,
    /// At most this many elapsed days is recent.
    #[serde(default = "default_recent_within_days")]
    pub recent_within_days: i64,
}

impl Default for StalenessPolicy {
    fn default() -> Self {
        Self {
            stale_after_days: default_stale_after_days(),
            recent_within_days: default_recent_within_days(),
        }
    }
}

impl StalenessPolicy {
    /// Classify an elapsed-day count. `None` means never contacted.
    #[must_use]
    pub const fn classify_days(&self, days: Option<i64>) -> Staleness {
        match days {
            None => Staleness::Stale,
            Some(days) if days > self.stale_after_days => Staleness::Stale,
            Some(days) if days <= self.recent_within_days => Staleness::Recent,
            Some(_) => Staleness::Neutral,
        }
    }

    #[must_use]
    pub fn classify(&self, last_contact: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Staleness {
        self.classify_days(days_since(last_contact, now))
    }
}

/// Whole days elapsed between `last_contact` and `now`.
#[must_use]
pub fn days_since(last_contact: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Option<i64> {
    let elapsed = now.signed_duration_since(last_contact?);
    Some(elapsed.num_milliseconds().div_euclid(MILLIS_PER_DAY))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 20, 12, 0, 0).unwrap()
    }

    #[rstest]
    #[case(0, Staleness::Recent)]
    #[case(7, Staleness::Recent)]
    #[case(8, Staleness::Neutral)]
    #[case(30, Staleness::Neutral)]
    #[case(31, Staleness::Stale)]
    #[case(400, Staleness::Stale)]
    #[case(-2, Staleness::Recent)]
    fn default_boundaries(#[case] days: i64, #[case] expected: Staleness) {
        let policy = StalenessPolicy::default();
        assert_eq!(policy.classify_days(Some(days)), expected);
        assert_eq!(
            policy.classify(Some(now() - Duration::days(days)), now()),
            expected
        );
    }

    #[test]
    fn never_contacted_is_stale() {
        assert_eq!(days_since(None, now()), None);
        assert_eq!(StalenessPolicy::default().classify(None, now()), Staleness::Stale);
    }

    #[test]
    fn partial_days_floor() {
        let almost_one = now() - Duration::hours(23);
        assert_eq!(days_since(Some(almost_one), now()), Some(0));

        let thirty_and_a_half = now() - Duration::days(30) - Duration::hours(12);
        assert_eq!(days_since(Some(thirty_and_a_half), now()), Some(30));
        assert_eq!(
            StalenessPolicy::default().classify(Some(thirty_and_a_half), now()),
            Staleness::Neutral
        );

        let future = now() + Duration::hours(1);
        assert_eq!(days_since(Some(future), now()), Some(-1));
    }

    #[test]
    fn custom_thresholds() {
        let policy = StalenessPolicy {
            stale_after_days: 14,
            recent_within_days: 2,
        };
        assert_eq!(policy.classify_days(Some(2)), Staleness::Recent);
        assert_eq!(policy.classify_days(Some(3)), Staleness::Neutral);
        assert_eq!(policy.classify_days(Some(15)), Staleness::Stale);
    }
}
