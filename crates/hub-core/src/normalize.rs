//! Raw-record-to-entity normalization.
//!
//! This is the trust boundary between the record store and the rest of the
//! system. Every function here is total: malformed input degrades to a safe
//! default and nothing is returned as an error.
//!
//! | Field kind | Policy |
//! |------------|--------|
//! | text | missing/`null` → `""`; numbers and booleans are rendered as text |
//! | number | JSON number, numeric string, or boolean; anything else → `0`; negative or non-finite → `0` |
//! | timestamp | RFC 3339, `YYYY-MM-DD HH:MM:SS`, or `YYYY-MM-DD`; missing → `now` |
//! | tag list | serialized JSON string or native array; parse failure → empty |
//!
//! `now` is always passed in so a whole load shares one reference instant.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

use crate::entities::{ContentItem, CoverageAnalysis, Customer, Recommendation};
use crate::enums::ContentCategory;
use crate::raw::RawRecord;

/// Placeholder image shown when a content item has no usable thumbnail.
pub const DEFAULT_THUMBNAIL_URL: &str =
    "https://images.unsplash.com/photo-1557804506-669a67965ba0?w=400&h=300&fit=crop&crop=center";

/// Store field names, shared with the store layer for ordering and updates.
pub mod field {
    pub const ID: &str = "id";
    pub const TITLE: &str = "title";
    pub const DESCRIPTION: &str = "description";
    pub const THUMBNAIL_URL: &str = "thumbnail_url";
    pub const CATEGORY: &str = "category";
    pub const VIEW_COUNT: &str = "view_count";
    pub const LIKE_COUNT: &str = "like_count";
    pub const TAGS: &str = "tags";
    pub const CREATED_AT: &str = "created_at";

    pub const NAME: &str = "name";
    pub const AGE: &str = "age";
    pub const PHONE: &str = "phone";
    pub const EMAIL: &str = "email";
    pub const INSURANCE_TYPE: &str = "insurance_type";
    pub const LAST_CONTACT_DATE: &str = "last_contact_date";
    pub const NOTES: &str = "notes";

    pub const CARD_NEWS_ID: &str = "card_news_id";
    pub const CUSTOMER_ID: &str = "customer_id";
    pub const REASON: &str = "reason";
    pub const CONFIDENCE_SCORE: &str = "confidence_score";

    pub const COVERAGE_AMOUNT: &str = "coverage_amount";
    pub const PREMIUM_AMOUNT: &str = "premium_amount";
    pub const ANALYSIS_DATE: &str = "analysis_date";
    pub const RECOMMENDATIONS: &str = "recommendations";
}

/// Settings that change how content items are normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeOptions {
    pub placeholder_thumbnail_url: String,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            placeholder_thumbnail_url: DEFAULT_THUMBNAIL_URL.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

#[must_use]
pub fn content_item(raw: &RawRecord, options: &NormalizeOptions, now: DateTime<Utc>) -> ContentItem {
    let thumbnail_url = text(raw.get(field::THUMBNAIL_URL));
    let thumbnail_url = if thumbnail_url.trim().is_empty() {
        options.placeholder_thumbnail_url.clone()
    } else {
        thumbnail_url
    };

    ContentItem {
        id: text(raw.get(field::ID)),
        title: text(raw.get(field::TITLE)),
        description: text(raw.get(field::DESCRIPTION)),
        thumbnail_url,
        category: ContentCategory::from_key(text(raw.get(field::CATEGORY)).trim())
            .unwrap_or_default(),
        view_count: count(raw.get(field::VIEW_COUNT)),
        like_count: count(raw.get(field::LIKE_COUNT)),
        tags: tags(raw.get(field::TAGS)),
        created_at: timestamp(raw.get(field::CREATED_AT)).unwrap_or(now),
    }
}

#[must_use]
pub fn customer(raw: &RawRecord, now: DateTime<Utc>) -> Customer {
    let last_contact_at = match raw.get(field::LAST_CONTACT_DATE) {
        None | Some(Value::Null) => Some(now),
        Some(Value::String(s)) if s.trim().is_empty() => Some(now),
        present => timestamp(present),
    };

    Customer {
        id: text(raw.get(field::ID)),
        name: text(raw.get(field::NAME)),
        age: age(raw.get(field::AGE)),
        phone: text(raw.get(field::PHONE)),
        email: text(raw.get(field::EMAIL)),
        insurance_type: text(raw.get(field::INSURANCE_TYPE)),
        last_contact_at,
        notes: text(raw.get(field::NOTES)),
    }
}

#[must_use]
pub fn recommendation(raw: &RawRecord) -> Recommendation {
    Recommendation {
        id: text(raw.get(field::ID)),
        content_id: text(raw.get(field::CARD_NEWS_ID)),
        customer_id: text(raw.get(field::CUSTOMER_ID)),
        reason: text(raw.get(field::REASON)),
        confidence_score: number(raw.get(field::CONFIDENCE_SCORE)).min(1.0),
    }
}

#[must_use]
pub fn coverage_analysis(raw: &RawRecord, now: DateTime<Utc>) -> CoverageAnalysis {
    CoverageAnalysis {
        id: text(raw.get(field::ID)),
        customer_id: text(raw.get(field::CUSTOMER_ID)),
        insurance_type: text(raw.get(field::INSURANCE_TYPE)),
        coverage_amount: number(raw.get(field::COVERAGE_AMOUNT)),
        premium_amount: number(raw.get(field::PREMIUM_AMOUNT)),
        analyzed_at: timestamp(raw.get(field::ANALYSIS_DATE)).unwrap_or(now),
        recommendations: text(raw.get(field::RECOMMENDATIONS)),
    }
}

// ---------------------------------------------------------------------------
// Field coercion
// ---------------------------------------------------------------------------

/// Read a text field. Non-text scalars are rendered; containers become `""`.
#[must_use]
pub fn text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Read a numeric field as a non-negative finite `f64`, falling back to `0`.
#[must_use]
pub fn number(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().unwrap_or(0.0)
            }
        }
        Some(Value::Bool(true)) => 1.0,
        _ => 0.0,
    };

    if parsed.is_finite() && parsed > 0.0 {
        parsed
    } else {
        0.0
    }
}

/// Read a counter (views, likes). Fractions are truncated.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn count(value: Option<&Value>) -> u64 {
    number(value).trunc() as u64
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn age(value: Option<&Value>) -> u32 {
    number(value).trunc().min(f64::from(u32::MAX)) as u32
}

/// Read a timestamp. Returns `None` when absent or unreadable.
///
/// Integers are interpreted as Unix epoch milliseconds.
#[must_use]
pub fn timestamp(value: Option<&Value>) -> Option<DateTime<Utc>> {
    match value? {
        Value::String(s) => parse_datetime(s.trim()),
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    }
}

/// Parse the datetime formats seen in the store.
///
/// Handles RFC 3339 (`"2026-02-09T14:30:00+00:00"`), the SQL default
/// (`"2026-02-09 14:30:00"`), and plain dates (`"2026-02-09"`, midnight UTC).
#[must_use]
pub fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Read a tag list stored either as serialized JSON or as a native array.
///
/// Duplicates are dropped, keeping the first occurrence.
#[must_use]
pub fn tags(value: Option<&Value>) -> Vec<String> {
    let parsed;
    let items = match value {
        Some(Value::Array(items)) => items,
        Some(Value::String(s)) => {
            parsed = serde_json::from_str::<Value>(s).unwrap_or(Value::Null);
            match &parsed {
                Value::Array(items) => items,
                _ => return Vec::new(),
            }
        }
        _ => return Vec::new(),
    };

    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        let tag = match item {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => continue,
        };
        if !out.contains(&tag) {
            out.push(tag);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 15, 9, 0, 0).unwrap()
    }

    #[rstest]
    #[case(None, 0.0)]
    #[case(Some(json!(null)), 0.0)]
    #[case(Some(json!(12)), 12.0)]
    #[case(Some(json!(" 12 ")), 12.0)]
    #[case(Some(json!("1.5")), 1.5)]
    #[case(Some(json!("")), 0.0)]
    #[case(Some(json!("twelve")), 0.0)]
    #[case(Some(json!(-4)), 0.0)]
    #[case(Some(json!("NaN")), 0.0)]
    #[case(Some(json!("inf")), 0.0)]
    #[case(Some(json!(true)), 1.0)]
    #[case(Some(json!([3])), 0.0)]
    #[case(Some(json!({"n": 3})), 0.0)]
    fn number_coercion(#[case] value: Option<Value>, #[case] expected: f64) {
        assert!((number(value.as_ref()) - expected).abs() < f64::EPSILON);
    }

    #[rstest]
    #[case(json!("[\"auto\",\"health\"]"), vec!["auto", "health"])]
    #[case(json!(["auto", "auto", "life"]), vec!["auto", "life"])]
    #[case(json!("[1, true, null, \"x\"]"), vec!["1", "true", "x"])]
    #[case(json!("not json"), vec![])]
    #[case(json!("{\"a\": 1}"), vec![])]
    #[case(json!(""), vec![])]
    #[case(json!(7), vec![])]
    fn tag_parsing(#[case] value: Value, #[case] expected: Vec<&str>) {
        assert_eq!(tags(Some(&value)), expected);
    }

    #[test]
    fn missing_tags_are_empty() {
        assert!(tags(None).is_empty());
    }

    #[test]
    fn datetime_formats() {
        let expected = Utc.with_ymd_and_hms(2026, 2, 9, 14, 30, 0).unwrap();
        assert_eq!(parse_datetime("2026-02-09T14:30:00+00:00"), Some(expected));
        assert_eq!(parse_datetime("2026-02-09T23:30:00+09:00"), Some(expected));
        assert_eq!(parse_datetime("2026-02-09 14:30:00"), Some(expected));
        assert_eq!(parse_datetime("2026-02-09T14:30:00.000"), Some(expected));
        assert_eq!(
            parse_datetime("2026-02-09"),
            Some(Utc.with_ymd_and_hms(2026, 2, 9, 0, 0, 0).unwrap())
        );
        assert_eq!(parse_datetime("last tuesday"), None);
    }

    #[test]
    fn empty_content_record_gets_defaults() {
        let item = content_item(&RawRecord::new(), &NormalizeOptions::default(), now());
        assert_eq!(item.id, "");
        assert_eq!(item.title, "");
        assert_eq!(item.thumbnail_url, DEFAULT_THUMBNAIL_URL);
        assert_eq!(item.category, ContentCategory::Best);
        assert_eq!(item.view_count, 0);
        assert_eq!(item.like_count, 0);
        assert!(item.tags.is_empty());
        assert_eq!(item.created_at, now());
    }

    #[test]
    fn content_record_with_string_fields_is_coerced() {
        let raw = RawRecord::new()
            .with("id", "card-1")
            .with("title", "Cancer cover 101")
            .with("thumbnail_url", "  ")
            .with("category", "designer_pick")
            .with("view_count", "1520")
            .with("like_count", "oops")
            .with("tags", "[\"cancer\",\"family\"]")
            .with("created_at", "2026-01-02 08:00:00");
        let options = NormalizeOptions {
            placeholder_thumbnail_url: "https://cdn.example/placeholder.png".into(),
        };

        let item = content_item(&raw, &options, now());
        assert_eq!(item.thumbnail_url, "https://cdn.example/placeholder.png");
        assert_eq!(item.category, ContentCategory::DesignerPick);
        assert_eq!(item.view_count, 1520);
        assert_eq!(item.like_count, 0);
        assert_eq!(item.tags, vec!["cancer", "family"]);
        assert_eq!(
            item.created_at,
            Utc.with_ymd_and_hms(2026, 1, 2, 8, 0, 0).unwrap()
        );
    }

    #[test]
    fn unknown_category_falls_back_to_best() {
        let raw = RawRecord::new().with("category", "trending");
        let item = content_item(&raw, &NormalizeOptions::default(), now());
        assert_eq!(item.category, ContentCategory::Best);
    }

    #[test]
    fn customer_last_contact_defaults() {
        let absent = customer(&RawRecord::new(), now());
        assert_eq!(absent.last_contact_at, Some(now()));
        assert_eq!(absent.age, 0);

        let garbage = customer(&RawRecord::new().with("last_contact_date", "soon"), now());
        assert_eq!(garbage.last_contact_at, None);

        let real = customer(
            &RawRecord::new()
                .with("last_contact_date", "2026-03-01")
                .with("age", "47"),
            now(),
        );
        assert_eq!(
            real.last_contact_at,
            Some(Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(real.age, 47);
    }

    #[test]
    fn recommendation_confidence_is_clamped() {
        let high = recommendation(&RawRecord::new().with("confidence_score", "1.7"));
        assert!((high.confidence_score - 1.0).abs() < f64::EPSILON);

        let bad = recommendation(&RawRecord::new().with("confidence_score", "high"));
        assert!(bad.confidence_score.abs() < f64::EPSILON);

        let numeric_ids = recommendation(
            &RawRecord::new()
                .with("card_news_id", 7)
                .with("customer_id", 12),
        );
        assert_eq!(numeric_ids.content_id, "7");
        assert_eq!(numeric_ids.customer_id, "12");
    }

    #[test]
    fn coverage_amounts_never_negative() {
        let analysis = coverage_analysis(
            &RawRecord::new()
                .with("coverage_amount", "-100")
                .with("premium_amount", "85000"),
            now(),
        );
        assert!(analysis.coverage_amount.abs() < f64::EPSILON);
        assert!((analysis.premium_amount - 85_000.0).abs() < f64::EPSILON);
        assert_eq!(analysis.analyzed_at, now());
    }
}
