//! FILENAME: report-engine/src/rows.rs
//! Export Linearizer - flattens the aggregated tree into labeled rows.
//!
//! Visits every non-root node pre-order (parent before children, children
//! in stored insertion order) and emits one row per group node. The label
//! encodes nesting depth through a fixed text convention:
//!
//! depth 1: `West`
//! depth 2: `--> TeamA`
//! depth 3: `----> Alice`
//!
//! Each extra level prepends one more `--` unit before the `> ` marker.
//! Downstream consumers diff exported files against earlier exports, so
//! the convention must not change.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::tree::{GroupTree, ROOT_ID};

/// One line of the linearized report: a depth-decorated group label plus
/// that group's aggregate values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRow {
    pub label: String,
    pub aggregates: FxHashMap<String, f64>,
}

/// Formats the export label for a group node. `depth` is >= 1 since the
/// root is never exported.
pub fn group_label(depth: usize, key: &str) -> String {
    if depth <= 1 {
        key.to_string()
    } else {
        format!("{}> {}", "--".repeat(depth - 1), key)
    }
}

/// Flattens the tree into export rows, one per non-root group node.
///
/// A pure projection: calling it repeatedly on the same tree yields
/// identical sequences. Aggregates are copied out of the nodes, so the
/// rows stay valid after the tree is dropped.
pub fn linearize(tree: &GroupTree) -> Vec<ExportRow> {
    let mut rows = Vec::with_capacity(tree.node_count().saturating_sub(1));

    // Explicit stack, children pushed in reverse so they pop in stored
    // insertion order.
    let mut stack: Vec<usize> = tree.root().children.iter().rev().copied().collect();

    while let Some(id) = stack.pop() {
        let node = tree.node(id);
        debug_assert_ne!(id, ROOT_ID);

        let key = node.key.as_deref().unwrap_or_default();
        rows.push(ExportRow {
            label: group_label(node.depth, key),
            aggregates: node.aggregates.clone(),
        });

        for &child in node.children.iter().rev() {
            stack.push(child);
        }
    }

    rows
}
