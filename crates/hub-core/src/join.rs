//! Customer-reference joins.
//!
//! Recommendations and coverage analyses are only meaningful next to the
//! customer they point at. [`join_customers`] indexes the customer list once
//! and keeps each child whose `customer_id` resolves, carrying the customer
//! inline. Children that do not resolve are excluded from the output and
//! reported back by id so the caller can log or display the drop count.

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{CoverageAnalysis, Customer, Recommendation};

/// A child record that references a customer.
pub trait CustomerRef {
    fn record_id(&self) -> &str;
    fn customer_id(&self) -> &str;
}

impl CustomerRef for Recommendation {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn customer_id(&self) -> &str {
        &self.customer_id
    }
}

impl CustomerRef for CoverageAnalysis {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn customer_id(&self) -> &str {
        &self.customer_id
    }
}

/// A child record annotated with its resolved customer.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct WithCustomer<T> {
    #[serde(flatten)]
    pub record: T,
    pub customer: Customer,
}

impl<T> AsRef<T> for WithCustomer<T> {
    fn as_ref(&self) -> &T {
        &self.record
    }
}

pub type ResolvedRecommendation = WithCustomer<Recommendation>;
pub type ResolvedAnalysis = WithCustomer<CoverageAnalysis>;

/// Identity-indexed view over a customer slice.
///
/// When ids repeat, the first customer wins.
#[derive(Debug)]
pub struct CustomerIndex<'a> {
    by_id: HashMap<&'a str, &'a Customer>,
}

impl<'a> CustomerIndex<'a> {
    #[must_use]
    pub fn new(customers: &'a [Customer]) -> Self {
        let mut by_id = HashMap::with_capacity(customers.len());
        for customer in customers {
            by_id.entry(customer.id.as_str()).or_insert(customer);
        }
        Self { by_id }
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&'a Customer> {
        self.by_id.get(id).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Output of a customer join.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinReport<T> {
    /// Resolved children, in input order.
    pub resolved: Vec<WithCustomer<T>>,
    /// Ids of children whose customer reference did not resolve.
    pub dropped: Vec<String>,
}

impl<T> JoinReport<T> {
    #[must_use]
    pub fn dropped_count(&self) -> usize {
        self.dropped.len()
    }

    #[must_use]
    pub fn into_resolved(self) -> Vec<WithCustomer<T>> {
        self.resolved
    }
}

/// Keep the children whose customer exists, annotated with that customer.
#[must_use]
pub fn join_customers<T: CustomerRef>(children: Vec<T>, customers: &[Customer]) -> JoinReport<T> {
    let index = CustomerIndex::new(customers);
    let mut resolved = Vec::with_capacity(children.len());
    let mut dropped = Vec::new();

    for child in children {
        match index.get(child.customer_id()) {
            Some(customer) => resolved.push(WithCustomer {
                customer: customer.clone(),
                record: child,
            }),
            None => {
                tracing::debug!(
                    record_id = child.record_id(),
                    customer_id = child.customer_id(),
                    "dropping record with unresolved customer"
                );
                dropped.push(child.record_id().to_string());
            }
        }
    }

    JoinReport { resolved, dropped }
}

/// Recommendations for one content item, in their existing order.
#[must_use]
pub fn recommendations_for<'a>(
    recommendations: &'a [ResolvedRecommendation],
    content_id: &str,
) -> Vec<&'a ResolvedRecommendation> {
    recommendations
        .iter()
        .filter(|rec| rec.record.content_id == content_id)
        .collect()
}

/// First analysis per customer id, in input order.
#[must_use]
pub fn first_analysis_by_customer(
    analyses: &[ResolvedAnalysis],
) -> HashMap<&str, &ResolvedAnalysis> {
    let mut first = HashMap::new();
    for analysis in analyses {
        first
            .entry(analysis.record.customer_id.as_str())
            .or_insert(analysis);
    }
    first
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn customer(id: &str, name: &str) -> Customer {
        Customer {
            id: id.into(),
            name: name.into(),
            age: 40,
            phone: String::new(),
            email: String::new(),
            insurance_type: "life".into(),
            last_contact_at: None,
            notes: String::new(),
        }
    }

    fn rec(id: &str, content_id: &str, customer_id: &str) -> Recommendation {
        Recommendation {
            id: id.into(),
            content_id: content_id.into(),
            customer_id: customer_id.into(),
            reason: String::new(),
            confidence_score: 0.5,
        }
    }

    #[test]
    fn unresolved_recommendations_are_dropped_and_reported() {
        let customers = vec![customer("c1", "Kim"), customer("c2", "Lee")];
        let recs = vec![
            rec("r1", "card-1", "c1"),
            rec("r2", "card-1", "ghost"),
            rec("r3", "card-2", "c2"),
        ];

        let report = join_customers(recs, &customers);
        let ids: Vec<_> = report.resolved.iter().map(|r| r.record.id.as_str()).collect();
        assert_eq!(ids, vec!["r1", "r3"]);
        assert_eq!(report.dropped, vec!["r2".to_string()]);
        assert_eq!(report.resolved[1].customer.name, "Lee");
    }

    #[test]
    fn output_never_exceeds_input() {
        let customers = vec![customer("c1", "Kim")];
        let recs = vec![rec("r1", "x", "c1"), rec("r2", "x", "c1"), rec("r3", "x", "")];
        let report = join_customers(recs, &customers);
        assert!(report.resolved.len() + report.dropped_count() == 3);
        assert_eq!(report.resolved.len(), 2);
    }

    #[test]
    fn empty_customer_list_drops_everything() {
        let report = join_customers(vec![rec("r1", "x", "c1")], &[]);
        assert!(report.resolved.is_empty());
        assert_eq!(report.dropped_count(), 1);
    }

    #[test]
    fn duplicate_customer_ids_resolve_to_first() {
        let customers = vec![customer("c1", "First"), customer("c1", "Second")];
        let index = CustomerIndex::new(&customers);
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("c1").map(|c| c.name.as_str()), Some("First"));
    }

    #[test]
    fn recommendations_filter_by_content() {
        let customers = vec![customer("c1", "Kim")];
        let report = join_customers(
            vec![rec("r1", "card-1", "c1"), rec("r2", "card-2", "c1")],
            &customers,
        );
        let for_card = recommendations_for(&report.resolved, "card-2");
        assert_eq!(for_card.len(), 1);
        assert_eq!(for_card[0].record.id, "r2");
        assert!(recommendations_for(&report.resolved, "card-9").is_empty());
    }

    #[test]
    fn resolved_serializes_flat() {
        let customers = vec![customer("c1", "Kim")];
        let report = join_customers(vec![rec("r1", "card-1", "c1")], &customers);
        let json = serde_json::to_value(&report.resolved[0]).unwrap();
        assert_eq!(json["id"], "r1");
        assert_eq!(json["customer"]["name"], "Kim");
    }
}
