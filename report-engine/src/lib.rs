//! FILENAME: report-engine/src/lib.rs
//! Pivot report engine.
//!
//! Turns a flat list of records into a multi-level pivot report: records
//! are partitioned into a group tree by an ordered list of grouping
//! fields, numeric measures are summed bottom-up at every group node, and
//! the tree is linearized into export rows with depth-indented labels.
//!
//! Layers:
//! - `definition`: Serializable configuration (what the report IS)
//! - `record`: Flat source rows (what we group)
//! - `tree`: Group tree builder (HOW records are partitioned)
//! - `aggregate`: Bottom-up measure aggregation
//! - `rows`: Export linearization (WHAT the export sink receives)

pub mod aggregate;
pub mod definition;
pub mod error;
pub mod record;
pub mod rows;
pub mod tree;

pub use aggregate::aggregate;
pub use definition::{AggregationType, MeasureField, ReportDefinition};
pub use error::ReportError;
pub use record::{FieldValue, Record};
pub use rows::{group_label, linearize, ExportRow};
pub use tree::{GroupNode, GroupTree, NodeId, ROOT_ID};
