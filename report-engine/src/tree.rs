//! FILENAME: report-engine/src/tree.rs
//! Group Tree - hierarchical partition of flat records.
//!
//! The tree is built once per record set and is immutable afterwards; a
//! refresh discards the whole tree and builds a fresh one. Nodes live in an
//! arena (`Vec<GroupNode>`) and refer to each other by index, so ownership
//! flows strictly root -> children while the parent back-reference is a
//! plain index with no ownership semantics.
//!
//! Sibling order is first-seen order in the input record sequence, not any
//! sorted order. The tree shape therefore depends only on the distinct
//! grouping-key combinations present and their first occurrence.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::error::ReportError;
use crate::record::Record;

/// Index of a node within the tree arena.
pub type NodeId = usize;

/// The arena index of the root node.
pub const ROOT_ID: NodeId = 0;

/// A node in the group tree.
///
/// Each node represents one grouping-key value at its depth; the root
/// (depth 0) carries no key. Records are attached only at the deepest
/// grouping level.
#[derive(Debug, Clone)]
pub struct GroupNode {
    /// The categorical value this node represents. `None` only for the root.
    pub key: Option<String>,

    /// Depth in the tree; root is 0, leaf-group nodes sit at group arity.
    pub depth: usize,

    /// Arena index of the owning node. `None` only for the root.
    pub parent: Option<NodeId>,

    /// Child node indices in first-seen order.
    pub children: Vec<NodeId>,

    /// Key -> child index, for O(1) descent during the build.
    child_by_key: FxHashMap<String, NodeId>,

    /// Indices into the tree's record storage. Non-empty only at the
    /// deepest grouping level.
    pub records: Vec<usize>,

    /// Measure name -> aggregated value. Populated by the aggregator;
    /// empty until then.
    pub aggregates: FxHashMap<String, f64>,
}

impl GroupNode {
    fn new(key: Option<String>, depth: usize, parent: Option<NodeId>) -> Self {
        GroupNode {
            key,
            depth,
            parent,
            children: Vec::new(),
            child_by_key: FxHashMap::default(),
            records: Vec::new(),
            aggregates: FxHashMap::default(),
        }
    }

    /// Whether this node sits at the deepest grouping level.
    pub fn is_leaf_group(&self) -> bool {
        self.children.is_empty()
    }
}

/// The group tree: arena of nodes plus the records they partition.
#[derive(Debug, Clone)]
pub struct GroupTree {
    nodes: Vec<GroupNode>,
    records: Vec<Record>,
    group_fields: Vec<String>,
}

impl GroupTree {
    /// Partitions `records` into a tree keyed by `group_fields` in order.
    ///
    /// Every record must supply a non-empty value for each grouping field;
    /// otherwise the build fails with `MissingGroupField` naming the record
    /// and the field. The failure is fatal to the whole build - the caller
    /// decides whether to drop the offending record and retry or abort.
    pub fn build(records: Vec<Record>, group_fields: &[String]) -> Result<Self, ReportError> {
        if group_fields.is_empty() {
            return Err(ReportError::EmptyGroupFields);
        }

        let mut tree = GroupTree {
            nodes: vec![GroupNode::new(None, 0, None)],
            records: Vec::new(),
            group_fields: group_fields.to_vec(),
        };

        for (record_idx, record) in records.iter().enumerate() {
            // Resolve the full key path up front so a malformed record
            // fails before any node is created for it.
            let mut path: SmallVec<[String; 4]> = SmallVec::with_capacity(group_fields.len());
            for field in group_fields {
                let key = record.field(field).group_label().ok_or_else(|| {
                    ReportError::MissingGroupField {
                        source_row: record.source_row,
                        field: field.clone(),
                    }
                })?;
                path.push(key);
            }

            let mut current = ROOT_ID;
            for key in path {
                current = tree.child_or_insert(current, key);
            }
            tree.nodes[current].records.push(record_idx);
        }

        tree.records = records;
        Ok(tree)
    }

    /// Descends into the child of `parent` keyed by `key`, creating it if
    /// absent. New children are appended, preserving first-seen order.
    fn child_or_insert(&mut self, parent: NodeId, key: String) -> NodeId {
        if let Some(&child) = self.nodes[parent].child_by_key.get(&key) {
            return child;
        }

        let child = self.nodes.len();
        let depth = self.nodes[parent].depth + 1;
        self.nodes
            .push(GroupNode::new(Some(key.clone()), depth, Some(parent)));
        self.nodes[parent].children.push(child);
        self.nodes[parent].child_by_key.insert(key, child);
        child
    }

    pub fn root(&self) -> &GroupNode {
        &self.nodes[ROOT_ID]
    }

    pub fn node(&self, id: NodeId) -> &GroupNode {
        &self.nodes[id]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut GroupNode {
        &mut self.nodes[id]
    }

    /// Total node count, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The records this tree partitions, in source order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn record(&self, idx: usize) -> &Record {
        &self.records[idx]
    }

    /// The grouping fields the tree was built with, outer to inner.
    pub fn group_fields(&self) -> &[String] {
        &self.group_fields
    }

    /// Number of grouping levels; equals the depth of leaf-group nodes.
    pub fn group_arity(&self) -> usize {
        self.group_fields.len()
    }

    /// Iterates arena indices bottom-up. Children are always created after
    /// their parent, so descending index order is a valid post-order for
    /// aggregation purposes.
    pub(crate) fn ids_bottom_up(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).rev()
    }
}
