//! FILENAME: app/src/lib.rs
//! Workforce pivot report application.
//!
//! Wires the pieces together: fetch flat employee records over HTTP
//! (`source`), build and aggregate the group tree, linearize it, and hand
//! the rows to the export sink. The interactive grid that displayed these
//! records in the original product is a separate frontend; this binary
//! covers the fetch-and-export path.

pub mod source;

use export::ExportError;
use report_engine::{
    aggregate, linearize, ExportRow, GroupTree, MeasureField, Record, ReportDefinition,
    ReportError,
};
use thiserror::Error;

use crate::source::SourceError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("could not build report: {0}")]
    Report(#[from] ReportError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// The measure columns of the original employee performance dataset.
pub const DEFAULT_MEASURES: [&str; 12] = [
    "aht_1", "aht_2", "aht_3", "aht_4", "cc_1", "cc_2", "cc_3", "cc_4", "nn_1", "nn_2", "nn_3",
    "nn_4",
];

/// The location -> team -> employee grouping of the original report.
pub const DEFAULT_GROUP_FIELDS: [&str; 3] = ["loc_name", "group_name", "name"];

/// The definition matching the original report layout.
pub fn default_definition() -> ReportDefinition {
    let mut definition = ReportDefinition::new(
        DEFAULT_GROUP_FIELDS.iter().map(|s| s.to_string()).collect(),
        DEFAULT_MEASURES.iter().map(|m| MeasureField::sum(*m)).collect(),
    );
    definition.attribute_fields = vec![
        "employee_number".to_string(),
        "name_manager".to_string(),
        "employee_number_manager".to_string(),
    ];
    definition
}

/// Runs the full report pipeline: build the group tree, aggregate the
/// measures, linearize into labeled export rows.
///
/// Each call owns its tree for its whole duration; nothing is shared or
/// reused across refreshes.
pub fn build_report(
    records: Vec<Record>,
    definition: &ReportDefinition,
) -> Result<Vec<ExportRow>, ReportError> {
    definition.validate()?;

    let mut tree = GroupTree::build(records, &definition.group_fields)?;
    aggregate(&mut tree, &definition.measure_fields);

    log::info!(
        "built report: {} records, {} group nodes",
        tree.records().len(),
        tree.node_count() - 1
    );

    Ok(linearize(&tree))
}
