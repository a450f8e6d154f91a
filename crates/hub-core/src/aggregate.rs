//! Summary statistics and chart series.
//!
//! Every function takes a read-only slice and returns a freshly built
//! structure. Analysis inputs are generic over `AsRef<CoverageAnalysis>` so
//! both bare analyses and customer-joined ones can be passed.

use std::collections::{BTreeMap, HashMap};

use chrono::Datelike;

use crate::entities::{CoverageAnalysis, Customer};
use crate::enums::AgeBand;
use crate::views::{AgeBucketCount, CategoryCount, DashboardStatistics, TrendPoint};

/// Headline statistics for the dashboard cards.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn summary_statistics<A: AsRef<CoverageAnalysis>>(
    customers: &[Customer],
    analyses: &[A],
) -> DashboardStatistics {
    let total_coverage: f64 = analyses.iter().map(|a| a.as_ref().coverage_amount).sum();
    let total_premiums: f64 = analyses.iter().map(|a| a.as_ref().premium_amount).sum();

    let average_age = if customers.is_empty() {
        0.0
    } else {
        let sum: u64 = customers.iter().map(|c| u64::from(c.age)).sum();
        sum as f64 / customers.len() as f64
    };

    DashboardStatistics {
        total_customers: customers.len(),
        total_coverage,
        total_premiums,
        average_age,
    }
}

/// Customers grouped by insurance type, in order of first appearance.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn insurance_distribution(customers: &[Customer]) -> Vec<CategoryCount> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut buckets: Vec<CategoryCount> = Vec::new();

    for customer in customers {
        let name = customer.insurance_type.as_str();
        if let Some(&idx) = positions.get(name) {
            buckets[idx].count += 1;
        } else {
            positions.insert(name, buckets.len());
            buckets.push(CategoryCount {
                name: name.to_string(),
                count: 1,
                percent: 0.0,
            });
        }
    }

    let total = customers.len() as f64;
    for bucket in &mut buckets {
        bucket.percent = bucket.count as f64 * 100.0 / total;
    }
    buckets
}

/// Customer counts for every [`AgeBand`], including empty bands.
#[must_use]
pub fn age_distribution(customers: &[Customer]) -> Vec<AgeBucketCount> {
    let mut counts = [0usize; AgeBand::ALL.len()];
    for customer in customers {
        counts[AgeBand::for_age(customer.age) as usize] += 1;
    }

    AgeBand::ALL
        .into_iter()
        .zip(counts)
        .map(|(band, count)| AgeBucketCount {
            band,
            label: band.label().to_string(),
            count,
        })
        .collect()
}

/// Premium totals per calendar month (UTC) of the analysis date, oldest first.
#[must_use]
pub fn premium_trend<A: AsRef<CoverageAnalysis>>(analyses: &[A]) -> Vec<TrendPoint> {
    let mut months: BTreeMap<(i32, u32), f64> = BTreeMap::new();
    for analysis in analyses {
        let analysis = analysis.as_ref();
        let key = (analysis.analyzed_at.year(), analysis.analyzed_at.month());
        *months.entry(key).or_default() += analysis.premium_amount;
    }

    months
        .into_iter()
        .map(|((year, month), amount)| TrendPoint {
            month: format!("{year:04}-{month:02}"),
            amount,
        })
        .collect()
}
