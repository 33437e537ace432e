//! FILENAME: tests/test_report.rs
//! Integration tests for the fetch-to-export report pipeline (network
//! excluded; records are built in memory).

mod common;

use app::{build_report, default_definition};
use common::{employee, sample_records};
use export::{save_csv, save_xlsx, ExportColumns};
use report_engine::{FieldValue, MeasureField, Record, ReportDefinition, ReportError};

fn two_measure_definition() -> ReportDefinition {
    ReportDefinition::new(
        vec![
            "loc_name".to_string(),
            "group_name".to_string(),
            "name".to_string(),
        ],
        vec![MeasureField::sum("cc_1"), MeasureField::sum("aht_1")],
    )
}

#[test]
fn test_pipeline_labels_and_sums() {
    let rows = build_report(sample_records(), &two_measure_definition()).unwrap();

    let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "West",
            "--> A",
            "----> Alice",
            "----> Bob",
            "--> B",
            "----> Dana",
            "East",
            "--> C",
            "----> Carl",
        ]
    );

    // Location totals.
    assert_eq!(rows[0].aggregates["cc_1"], 15.0);
    assert_eq!(rows[0].aggregates["aht_1"], 90.0);
    assert_eq!(rows[6].aggregates["cc_1"], 2.0);

    // Team and employee rows.
    assert_eq!(rows[1].aggregates["cc_1"], 8.0);
    assert_eq!(rows[2].aggregates["cc_1"], 5.0);
    assert_eq!(rows[4].aggregates["cc_1"], 7.0);
}

#[test]
fn test_pipeline_with_default_definition() {
    let rows = build_report(sample_records(), &default_definition()).unwrap();

    // Measures absent from the records still appear, summed to zero.
    assert_eq!(rows[0].aggregates["nn_1"], 0.0);
    assert_eq!(rows[0].aggregates["cc_1"], 15.0);
    assert_eq!(rows.len(), 9);
}

#[test]
fn test_pipeline_rejects_record_without_group_field() {
    let mut bad = Record::new(4);
    bad.set("loc_name", FieldValue::Text("West".to_string()));
    bad.set("name", FieldValue::Text("Eve".to_string()));

    let mut records = sample_records();
    records.push(bad);

    let err = build_report(records, &two_measure_definition()).unwrap_err();
    assert_eq!(
        err,
        ReportError::MissingGroupField {
            source_row: 4,
            field: "group_name".to_string(),
        }
    );
}

#[test]
fn test_pipeline_to_csv_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.csv");

    let rows = build_report(sample_records(), &two_measure_definition()).unwrap();
    let columns = ExportColumns::new(vec!["cc_1".to_string(), "aht_1".to_string()]);
    save_csv(&rows, &columns, &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "Group,cc_1,aht_1");
    assert_eq!(lines[1], "West,15,90");
    assert_eq!(lines[3], "----> Alice,5,30");
    assert_eq!(lines.len(), 10);
}

#[test]
fn test_pipeline_to_xlsx_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.xlsx");

    let rows = build_report(sample_records(), &two_measure_definition()).unwrap();
    let columns = ExportColumns::new(vec!["cc_1".to_string(), "aht_1".to_string()]);
    save_xlsx(&rows, &columns, &path).unwrap();

    assert!(std::fs::metadata(&path).unwrap().len() > 0);
}

#[test]
fn test_coarser_grouping_exports_group_rows_only() {
    // Exporting at team granularity: no employee rows, labels still
    // depth-decorated.
    let definition = ReportDefinition::new(
        vec!["loc_name".to_string(), "group_name".to_string()],
        vec![MeasureField::sum("cc_1")],
    );
    let rows = build_report(sample_records(), &definition).unwrap();

    let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["West", "--> A", "--> B", "East", "--> C"]);
    assert_eq!(rows[1].aggregates["cc_1"], 8.0);
}

#[test]
fn test_repeated_builds_are_deterministic() {
    let first = build_report(sample_records(), &two_measure_definition()).unwrap();
    let second = build_report(sample_records(), &two_measure_definition()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_single_employee_deep_labels() {
    let records = vec![employee(0, "West", "TeamA", "Alice", 1.0, 2.0)];
    let rows = build_report(records, &two_measure_definition()).unwrap();

    let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["West", "--> TeamA", "----> Alice"]);
}
