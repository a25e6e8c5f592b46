//! `datasets`, `schema`, `stats` and `browse` from the command line.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tabula_testing::{TestWorld, assertions, fixtures};

#[test]
fn test_datasets_lists_catalog() {
    let world = TestWorld::new()
        .with_dataset("days", &fixtures::weekday_tickets())
        .with_catalog_entry("days", "days.json", Some("Busy days"))
        .with_catalog_entry("gone", "gone.json", None);

    let json = world
        .run_json(&["datasets"])
        .expect("Failed to run datasets")
        .json()
        .expect("Parse failed");

    assertions::assert_catalog_count(&json, 2).unwrap();
    assert_eq!(json["badge"]["label"], "2 dataset(s), 1 missing on disk");
    assert_eq!(json["content"]["datasets"][0]["key"], "days");
    assert_eq!(json["content"]["datasets"][0]["exists"], true);
    assert_eq!(json["content"]["datasets"][1]["exists"], false);
}

#[test]
fn test_datasets_without_config_suggests_setup() {
    let world = TestWorld::new();
    let mut cmd = cargo_bin_cmd!("tabula");
    world.configure_command(&mut cmd).arg("datasets");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No datasets configured"))
        .stdout(predicate::str::contains("tabula show data.json"));
}

#[test]
fn test_unknown_dataset_fails() {
    let world = TestWorld::new();
    let mut cmd = cargo_bin_cmd!("tabula");
    world.configure_command(&mut cmd).args(["show", "nope"]);
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error: Unknown dataset 'nope'"));
}

#[test]
fn test_malformed_dataset_fails_with_path() {
    let world = TestWorld::new().with_raw_dataset("bad", "[1, 2]");
    let path = world.dataset_path("bad");

    let result = world
        .run(&["schema", &path.to_string_lossy()])
        .expect("Failed to run schema");
    assert_eq!(result.status.code(), Some(1));
    assert!(result.stderr().contains("Failed to load dataset"));
    assert!(result.stderr().contains("record 0 is not an object"));
}

#[test]
fn test_schema_reports_kinds() {
    let world = TestWorld::new()
        .with_dataset("trends", &fixtures::support_trends())
        .with_catalog_entry("trends", "trends.json", Some("Monthly trends"));

    let json = world
        .run_json(&["schema", "trends"])
        .expect("Failed to run schema")
        .json()
        .expect("Parse failed");

    let fields = json["content"]["fields"].as_array().expect("fields array");
    let names: Vec<&str> = fields.iter().filter_map(|f| f["name"].as_str()).collect();
    assert_eq!(
        names,
        vec!["date", "month", "totalTickets", "satisfaction", "priority", "notes"]
    );
    assert_eq!(fields[2]["kind"], "numeric");
    assert_eq!(fields[4]["kind"], "nested");
    assert_eq!(fields[5]["present_in"], 1);
    assert_eq!(json["content"]["dataset"]["title"], "Monthly trends");
}

#[test]
fn test_stats_summarizes_numeric_fields() {
    let world = TestWorld::new().with_dataset("days", &fixtures::weekday_tickets());
    let path = world.dataset_path("days");

    let json = world
        .run_json(&["stats", &path.to_string_lossy()])
        .expect("Failed to run stats")
        .json()
        .expect("Parse failed");

    let summary = &json["content"]["fields"][0];
    assert_eq!(summary["field"], "ticketCount");
    assert_eq!(summary["count"], 3);
    assert_eq!(summary["sum"], 3.0);
    assert_eq!(summary["min"], -2.0);
    assert_eq!(summary["max"], 5.0);
}

#[test]
fn test_browse_refuses_json() {
    let world = TestWorld::new().with_dataset("days", &fixtures::weekday_tickets());
    let path = world.dataset_path("days");

    let mut cmd = cargo_bin_cmd!("tabula");
    world
        .configure_command(&mut cmd)
        .arg("browse")
        .arg(&path)
        .args(["--format", "json"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("browse is interactive"));
}

#[test]
fn test_browse_needs_terminal() {
    let world = TestWorld::new().with_dataset("days", &fixtures::weekday_tickets());
    let path = world.dataset_path("days");

    let mut cmd = cargo_bin_cmd!("tabula");
    world.configure_command(&mut cmd).arg("browse").arg(&path);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("needs an interactive terminal"));
}
