//! End-to-end runs of the `cardhub` binary against a JSON fixture store.

use std::path::PathBuf;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use serde_json::Value;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/agent_day.json")
}

/// Run in an empty directory with no `CARDHUB_*` overrides so only the
/// fixture and built-in defaults apply.
fn cardhub(args: &[&str]) -> Output {
    let workdir = tempfile::tempdir().unwrap();
    let mut command = Command::new(env!("CARGO_BIN_EXE_cardhub"));
    command
        .current_dir(workdir.path())
        .env("XDG_CONFIG_HOME", workdir.path())
        .env("HOME", workdir.path())
        .env("NO_COLOR", "1")
        .arg("--fixture")
        .arg(fixture())
        .args(args);
    for (key, _) in std::env::vars() {
        if key.starts_with("CARDHUB_") {
            command.env_remove(key);
        }
    }
    command.output().unwrap()
}

fn json(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn content_list_shows_the_default_tab_most_viewed_first() {
    let rows = json(&cardhub(&["content", "list"]));
    let ids: Vec<_> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["n3", "n1"]);
    // the recommendation for the deleted customer is not counted
    assert_eq!(rows[1]["recommended_customers"], 1);
}

#[test]
fn content_list_other_tab_normalizes_loose_fields() {
    let rows = json(&cardhub(&["content", "list", "--tab", "designer_pick"]));
    assert_eq!(rows[0]["id"], "n2");
    assert_eq!(rows[0]["view_count"], 45);
    assert_eq!(rows[0]["like_count"], 0);
    assert_eq!(rows[0]["tags"], serde_json::json!([]));
}

#[test]
fn content_show_records_a_view_and_lists_customers() {
    let shown = json(&cardhub(&["content", "show", "n2"]));
    assert_eq!(shown["content"]["view_count"], 46);
    assert_eq!(shown["content"]["view_recorded"], true);
    assert_eq!(shown["recommended_customers"][0]["name"], "이서연");
    assert_eq!(shown["recommended_customers"][0]["match"], "64%");
}

#[test]
fn content_show_unknown_id_fails() {
    let output = cardhub(&["content", "show", "missing"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing"));
}

#[test]
fn content_share_confirms_on_stderr() {
    let output = cardhub(&["content", "share", "n1"]);
    let response = json(&output);
    assert_eq!(response["shared"], true);
    assert_eq!(response["shared_by"], Value::Null);
    assert!(String::from_utf8_lossy(&output.stderr).contains("ready to send"));
}

#[test]
fn dashboard_statistics_round_the_mean_age() {
    let out = json(&cardhub(&["dashboard", "--section", "stats"]));
    let stats = &out["statistics"];
    assert_eq!(stats["total_customers"], 3);
    assert_eq!(stats["average_age"], 38);
    assert_eq!(stats["total_premiums"], 230_000);
    assert_eq!(stats["unresolved_analyses"], 1);
}

#[test]
fn dashboard_customers_are_flagged_stale() {
    let out = json(&cardhub(&["dashboard", "--section", "customers", "--limit", "2"]));
    let rows = out["customers"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["id"], "c3");
    assert!(rows.iter().all(|row| row["staleness"] == "stale"));
}

#[test]
fn dashboard_all_has_every_section() {
    let out = json(&cardhub(&["dashboard"]));
    for section in [
        "statistics",
        "insurance_types",
        "age_bands",
        "premium_trend",
        "customers",
    ] {
        assert!(out.get(section).is_some(), "missing {section}");
    }
    let months: Vec<_> = out["premium_trend"]
        .as_array()
        .unwrap()
        .iter()
        .map(|point| point["month"].as_str().unwrap())
        .collect();
    assert_eq!(months, vec!["2025-10", "2025-11"]);
}

#[test]
fn table_format_prints_aligned_rows() {
    let output = cardhub(&["--format", "table", "content", "list"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let mut lines = stdout.lines();
    assert!(lines.next().is_some_and(|header| header.starts_with("category")));
    assert!(lines.next().is_some_and(|divider| divider.chars().all(|c| c == '-')));
}
