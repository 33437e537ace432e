//! FILENAME: report-engine/src/error.rs

use thiserror::Error;

/// Errors raised while constructing a report.
///
/// Only tree construction can fail; aggregation and linearization are
/// infallible once a valid tree exists.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    #[error("no grouping fields configured")]
    EmptyGroupFields,

    #[error("record {source_row} has no value for grouping field '{field}'")]
    MissingGroupField { source_row: u32, field: String },
}
