//! FILENAME: report-engine/src/aggregate.rs
//! Aggregator - bottom-up computation of per-group measure values.
//!
//! Walks the tree post-order: leaf-group nodes fold their records' measure
//! values, internal nodes fold their children's aggregates. The arena
//! creation order guarantees every child has a larger index than its
//! parent, so a reverse index scan is a valid bottom-up order and no
//! recursion is needed.
//!
//! Aggregation never fails: missing or non-numeric measure values coerce
//! to zero (see `FieldValue::as_measure`).

use crate::definition::MeasureField;
use crate::tree::GroupTree;

/// Annotates every node of the tree with aggregates for `measures`.
///
/// After this returns, `node.aggregates[m]` equals the sum of the measure
/// over all records underneath the node, for every node including the root
/// (the root carries the grand total).
pub fn aggregate(tree: &mut GroupTree, measures: &[MeasureField]) {
    for id in tree.ids_bottom_up() {
        let mut computed = Vec::with_capacity(measures.len());

        for measure in measures {
            let agg = measure.aggregation;
            let node = tree.node(id);

            let value = if node.is_leaf_group() {
                node.records
                    .iter()
                    .map(|&r| tree.record(r).field(&measure.name).as_measure())
                    .fold(agg.identity(), |acc, v| agg.combine(acc, v))
            } else {
                node.children
                    .iter()
                    .map(|&c| {
                        tree.node(c)
                            .aggregates
                            .get(&measure.name)
                            .copied()
                            .unwrap_or_else(|| agg.identity())
                    })
                    .fold(agg.identity(), |acc, v| agg.combine(acc, v))
            };

            computed.push((measure.name.clone(), value));
        }

        let node = tree.node_mut(id);
        for (name, value) in computed {
            node.aggregates.insert(name, value);
        }
    }
}
