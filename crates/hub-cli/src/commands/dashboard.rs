use hub_core::views::{CoverageDashboard, CustomerOverviewRow};
use hub_views::CoverageDashboardController;
use serde::Serialize;
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{DashboardArgs, DashboardSection};
use crate::context::AppContext;
use crate::output::output_sections;

#[derive(Debug, Serialize)]
struct StatisticsView {
    total_customers: usize,
    total_coverage: i64,
    total_premiums: i64,
    average_age: i64,
    unresolved_analyses: usize,
}

#[derive(Debug, Serialize)]
struct InsuranceRow {
    insurance_type: String,
    customers: usize,
    percent: f64,
}

#[derive(Debug, Serialize)]
struct AgeRow {
    age_band: String,
    customers: usize,
}

#[derive(Debug, Serialize)]
struct TrendRow {
    month: String,
    premiums: i64,
}

#[derive(Debug, Serialize)]
struct CustomerRow {
    id: String,
    name: String,
    age: u32,
    insurance_type: String,
    last_contact: Option<String>,
    days_since_contact: Option<i64>,
    staleness: &'static str,
    coverage: Option<i64>,
    premium: Option<i64>,
}

impl From<&CustomerOverviewRow> for CustomerRow {
    fn from(row: &CustomerOverviewRow) -> Self {
        Self {
            id: row.customer.id.clone(),
            name: row.customer.name.clone(),
            age: row.customer.age,
            insurance_type: row.customer.insurance_type.clone(),
            last_contact: row
                .customer
                .last_contact_at
                .map(|at| at.format("%Y-%m-%d").to_string()),
            days_since_contact: row.days_since_contact,
            staleness: row.staleness.as_str(),
            coverage: row.analysis.as_ref().map(|a| whole(a.coverage_amount)),
            premium: row.analysis.as_ref().map(|a| whole(a.premium_amount)),
        }
    }
}

/// Amounts and the mean age are printed as whole numbers.
#[allow(clippy::cast_possible_truncation)]
fn whole(value: f64) -> i64 {
    value.round() as i64
}

fn one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Handle `cardhub dashboard`.
pub async fn handle(
    args: &DashboardArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut controller = CoverageDashboardController::new(ctx.service.clone(), ctx.notifier.clone())
        .with_config(&ctx.config.dashboard);
    let dashboard = controller.load(ctx.now).await;

    output_sections(sections(dashboard, args.section, flags.row_limit())?, flags.format)
}

/// The requested dashboard sections as display rows, in screen order.
fn sections(
    dashboard: &CoverageDashboard,
    section: DashboardSection,
    row_limit: usize,
) -> anyhow::Result<Vec<(&'static str, Value)>> {
    let wanted = |candidate: DashboardSection| {
        section == DashboardSection::All || section == candidate
    };
    let mut out = Vec::new();

    if wanted(DashboardSection::Stats) {
        let stats = &dashboard.statistics;
        let view = StatisticsView {
            total_customers: stats.total_customers,
            total_coverage: whole(stats.total_coverage),
            total_premiums: whole(stats.total_premiums),
            average_age: whole(stats.average_age),
            unresolved_analyses: dashboard.dropped_analyses,
        };
        out.push(("statistics", serde_json::to_value(view)?));
    }

    if wanted(DashboardSection::Insurance) {
        let rows = dashboard
            .insurance_distribution
            .iter()
            .map(|entry| InsuranceRow {
                insurance_type: entry.name.clone(),
                customers: entry.count,
                percent: one_decimal(entry.percent),
            })
            .collect::<Vec<_>>();
        out.push(("insurance_types", serde_json::to_value(rows)?));
    }

    if wanted(DashboardSection::Ages) {
        let rows = dashboard
            .age_distribution
            .iter()
            .map(|bucket| AgeRow {
                age_band: bucket.label.clone(),
                customers: bucket.count,
            })
            .collect::<Vec<_>>();
        out.push(("age_bands", serde_json::to_value(rows)?));
    }

    if wanted(DashboardSection::Trend) {
        let rows = dashboard
            .premium_trend
            .iter()
            .map(|point| TrendRow {
                month: point.month.clone(),
                premiums: whole(point.amount),
            })
            .collect::<Vec<_>>();
        out.push(("premium_trend", serde_json::to_value(rows)?));
    }

    if wanted(DashboardSection::Customers) {
        let rows = dashboard
            .customers
            .iter()
            .take(row_limit)
            .map(CustomerRow::from)
            .collect::<Vec<_>>();
        out.push(("customers", serde_json::to_value(rows)?));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use hub_core::entities::{CoverageAnalysis, Customer};
    use hub_core::staleness::StalenessPolicy;
    use hub_views::build_dashboard;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn customer(id: &str, age: u32, days_ago: i64) -> Customer {
        let now = Utc.with_ymd_and_hms(2026, 6, 30, 12, 0, 0).unwrap();
        Customer {
            id: id.into(),
            name: format!("Customer {id}"),
            age,
            phone: String::new(),
            email: String::new(),
            insurance_type: "life".into(),
            last_contact_at: Some(now - chrono::Duration::days(days_ago)),
            notes: String::new(),
        }
    }

    fn dashboard() -> CoverageDashboard {
        let now = Utc.with_ymd_and_hms(2026, 6, 30, 12, 0, 0).unwrap();
        let customers = vec![customer("c1", 34, 3), customer("c2", 41, 45)];
        let analyses = vec![CoverageAnalysis {
            id: "a1".into(),
            customer_id: "c1".into(),
            insurance_type: "life".into(),
            coverage_amount: 100_000_000.0,
            premium_amount: 152_499.6,
            analyzed_at: Utc.with_ymd_and_hms(2026, 6, 10, 0, 0, 0).unwrap(),
            recommendations: String::new(),
        }];
        build_dashboard(&customers, analyses, StalenessPolicy::default(), 10, now)
    }

    #[test]
    fn all_sections_in_screen_order() {
        let names: Vec<_> = sections(&dashboard(), DashboardSection::All, usize::MAX)
            .unwrap()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(
            names,
            vec!["statistics", "insurance_types", "age_bands", "premium_trend", "customers"]
        );
    }

    #[test]
    fn statistics_are_whole_numbers() {
        let out = sections(&dashboard(), DashboardSection::Stats, usize::MAX).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(
            out[0].1,
            json!({
                "total_customers": 2,
                "total_coverage": 100_000_000,
                "total_premiums": 152_500,
                "average_age": 38,
                "unresolved_analyses": 0,
            })
        );
    }

    #[test]
    fn customer_rows_carry_staleness_and_latest_analysis() {
        let out = sections(&dashboard(), DashboardSection::Customers, 1).unwrap();
        let rows = out[0].1.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["id"], "c1");
        assert_eq!(rows[0]["staleness"], "recent");
        assert_eq!(rows[0]["days_since_contact"], 3);
        assert_eq!(rows[0]["premium"], 152_500);
        assert_eq!(rows[0]["last_contact"], "2026-06-27");
    }
}
