//! FILENAME: report-engine/src/record.rs
//! Flat source records - the raw rows the report is built from.
//!
//! A record is one row as delivered by the record source: a bag of named
//! field values. The engine does not care where the row came from; it only
//! needs the grouping fields to be present and the measure fields to be
//! numeric-or-coercible.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A normalized field value as it appears in a source record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Empty,
    Number(f64),
    Text(String),
    Boolean(bool),
}

impl FieldValue {
    /// Coerces this value to a number for aggregation.
    ///
    /// Finite numbers pass through, text that parses as a finite number is
    /// accepted, everything else (missing, "N/A", booleans, NaN) contributes
    /// zero. Aggregation is deliberately permissive: a report is always
    /// producible from whatever data arrived.
    pub fn as_measure(&self) -> f64 {
        match self {
            FieldValue::Number(n) if n.is_finite() => *n,
            FieldValue::Text(s) => match s.trim().parse::<f64>() {
                Ok(n) if n.is_finite() => n,
                _ => 0.0,
            },
            _ => 0.0,
        }
    }

    /// Returns the display string used as a grouping key, or `None` when the
    /// value is missing (a record cannot be grouped on an empty value).
    pub fn group_label(&self) -> Option<String> {
        match self {
            FieldValue::Empty => None,
            FieldValue::Number(n) => Some(format_number(*n)),
            FieldValue::Text(s) => Some(s.clone()),
            FieldValue::Boolean(b) => Some(b.to_string()),
        }
    }
}

/// Formats a numeric grouping key without a trailing ".0" for whole numbers.
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// One flat row from the record source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// Position of this row in the source sequence (0-based).
    pub source_row: u32,

    /// All fields of the row, keyed by field name. Grouping fields,
    /// attributes and measures all live here; the report definition decides
    /// which is which.
    pub fields: FxHashMap<String, FieldValue>,
}

impl Record {
    pub fn new(source_row: u32) -> Self {
        Record {
            source_row,
            fields: FxHashMap::default(),
        }
    }

    /// Convenience setter used by builders and tests.
    pub fn set(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.insert(name.into(), value);
    }

    /// Looks up a field, treating an absent entry as `Empty`.
    pub fn field(&self, name: &str) -> &FieldValue {
        self.fields.get(name).unwrap_or(&FieldValue::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_coercion() {
        assert_eq!(FieldValue::Number(5.0).as_measure(), 5.0);
        assert_eq!(FieldValue::Text("3.5".to_string()).as_measure(), 3.5);
        assert_eq!(FieldValue::Text(" 12 ".to_string()).as_measure(), 12.0);
        assert_eq!(FieldValue::Text("N/A".to_string()).as_measure(), 0.0);
        assert_eq!(FieldValue::Empty.as_measure(), 0.0);
        assert_eq!(FieldValue::Boolean(true).as_measure(), 0.0);
        assert_eq!(FieldValue::Number(f64::NAN).as_measure(), 0.0);
        assert_eq!(FieldValue::Number(f64::INFINITY).as_measure(), 0.0);
    }

    #[test]
    fn test_group_label() {
        assert_eq!(
            FieldValue::Text("West".to_string()).group_label(),
            Some("West".to_string())
        );
        assert_eq!(FieldValue::Number(42.0).group_label(), Some("42".to_string()));
        assert_eq!(FieldValue::Number(1.5).group_label(), Some("1.5".to_string()));
        assert_eq!(FieldValue::Empty.group_label(), None);
    }

    #[test]
    fn test_missing_field_reads_as_empty() {
        let record = Record::new(0);
        assert_eq!(*record.field("does_not_exist"), FieldValue::Empty);
    }

    #[test]
    fn test_record_serde_round_trip() {
        let mut record = Record::new(3);
        record.set("loc_name", FieldValue::Text("West".to_string()));
        record.set("cc_1", FieldValue::Number(5.0));

        let json = serde_json::to_string(&record).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back.source_row, 3);
        assert_eq!(*back.field("cc_1"), FieldValue::Number(5.0));
    }
}
