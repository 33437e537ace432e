//! FILENAME: report-engine/src/definition.rs
//! Report Definition - The serializable configuration.
//!
//! This module contains the types needed to DESCRIBE a pivot report:
//! which fields form the grouping hierarchy, which fields are summed,
//! and which descriptive attributes ride along on leaf rows.

use serde::{Deserialize, Serialize};

use crate::error::ReportError;

// ============================================================================
// AGGREGATION
// ============================================================================

/// Supported aggregation functions for measure fields.
///
/// Only `Sum` exists today, but the tree walker only talks to this type
/// through `identity`/`combine`, so adding a function is a new variant here
/// and nothing in the traversal logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AggregationType {
    #[default]
    Sum,
}

impl AggregationType {
    /// The starting value of a fold with this function.
    pub fn identity(self) -> f64 {
        match self {
            AggregationType::Sum => 0.0,
        }
    }

    /// Folds one more value into the running aggregate.
    pub fn combine(self, accumulated: f64, value: f64) -> f64 {
        match self {
            AggregationType::Sum => accumulated + value,
        }
    }
}

// ============================================================================
// FIELD DEFINITIONS
// ============================================================================

/// A numeric field to aggregate, with its aggregation function.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasureField {
    /// Source field name (e.g., "cc_1").
    pub name: String,

    /// The aggregation function to apply.
    pub aggregation: AggregationType,
}

impl MeasureField {
    pub fn sum(name: impl Into<String>) -> Self {
        MeasureField {
            name: name.into(),
            aggregation: AggregationType::Sum,
        }
    }
}

// ============================================================================
// MAIN DEFINITION STRUCT
// ============================================================================

/// The complete, serializable definition of a pivot report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportDefinition {
    /// Fields forming the grouping hierarchy, ordered from outer to inner
    /// (e.g., location, then team, then employee). Must be non-empty.
    pub group_fields: Vec<String>,

    /// Numeric fields aggregated at every group level.
    pub measure_fields: Vec<MeasureField>,

    /// Descriptive fields (identifiers, manager name) carried through to
    /// leaf rows only; never aggregated.
    #[serde(default)]
    pub attribute_fields: Vec<String>,
}

impl ReportDefinition {
    pub fn new(group_fields: Vec<String>, measure_fields: Vec<MeasureField>) -> Self {
        ReportDefinition {
            group_fields,
            measure_fields,
            attribute_fields: Vec::new(),
        }
    }

    /// Checks structural validity before a build is attempted.
    pub fn validate(&self) -> Result<(), ReportError> {
        if self.group_fields.is_empty() {
            return Err(ReportError::EmptyGroupFields);
        }
        Ok(())
    }

    /// Number of grouping levels; leaf-group nodes sit at this depth.
    pub fn group_arity(&self) -> usize {
        self.group_fields.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_fold() {
        let agg = AggregationType::Sum;
        let mut acc = agg.identity();
        for v in [5.0, 3.0, 2.0] {
            acc = agg.combine(acc, v);
        }
        assert_eq!(acc, 10.0);
    }

    #[test]
    fn test_validate_rejects_empty_grouping() {
        let def = ReportDefinition::new(vec![], vec![MeasureField::sum("cc_1")]);
        assert!(matches!(def.validate(), Err(ReportError::EmptyGroupFields)));
    }

    #[test]
    fn test_group_arity() {
        let def = ReportDefinition::new(
            vec!["loc_name".to_string(), "group_name".to_string()],
            vec![],
        );
        assert_eq!(def.group_arity(), 2);
        assert!(def.validate().is_ok());
    }
}
