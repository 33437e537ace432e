//! FILENAME: tests/common/mod.rs
//! Fixtures for pivot report integration tests.

use report_engine::{FieldValue, Record};

/// Builds one employee record with the fields the original dataset carries.
pub fn employee(
    source_row: u32,
    loc: &str,
    team: &str,
    name: &str,
    cc_1: f64,
    aht_1: f64,
) -> Record {
    let mut record = Record::new(source_row);
    record.set("loc_name", FieldValue::Text(loc.to_string()));
    record.set("group_name", FieldValue::Text(team.to_string()));
    record.set("name", FieldValue::Text(name.to_string()));
    record.set("employee_number", FieldValue::Number(1000.0 + source_row as f64));
    record.set("name_manager", FieldValue::Text("Morgan".to_string()));
    record.set("cc_1", FieldValue::Number(cc_1));
    record.set("aht_1", FieldValue::Number(aht_1));
    record
}

/// A small two-location, two-team sample.
pub fn sample_records() -> Vec<Record> {
    vec![
        employee(0, "West", "A", "Alice", 5.0, 30.0),
        employee(1, "West", "A", "Bob", 3.0, 42.0),
        employee(2, "West", "B", "Dana", 7.0, 18.0),
        employee(3, "East", "C", "Carl", 2.0, 55.0),
    ]
}
