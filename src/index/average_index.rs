//! AverageIndex - records ordered by their average.
//!
//! The [`AverageIndex`] provides:
//! - Insertion keyed by [`Record::average`], grouping equal averages
//! - Removal by student id (a full-tree scan, since the id is not the key)
//! - Ascending in-order traversal and threshold filtering
//!
//! The tree is never rebalanced. Inserting records in sorted order produces
//! a list-shaped tree; every traversal here is iterative so that shape is
//! slow but safe.

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;

use tracing::{debug, trace};

use crate::common::StudentId;
use crate::index::tree::{Tree, TreeNode};
use crate::index::InOrder;
use crate::record::Record;

/// An unbalanced binary search tree keyed by average.
///
/// # Structure
/// ```text
///                 ┌──────────────────┐
///                 │ key 70.0         │
///                 │ [Cara]           │
///                 └──────────────────┘
///                  ╱                ╲
///   ┌──────────────────┐    ┌──────────────────┐
///   │ key 50.0         │    │ key 90.0         │
///   │ [Abe]            │    │ [Bo, Dee]        │  equal averages share
///   └──────────────────┘    └──────────────────┘  one node, in order
/// ```
///
/// # Invariants
/// - every key in a node's left subtree is strictly less than its key
/// - every key in its right subtree is strictly greater
/// - each key appears in exactly one node
///
/// Keys compare with [`f64::total_cmp`], so the order is total even for
/// unusual scores.
///
/// # Example
/// ```
/// use roster::{AverageIndex, Record, StudentId};
///
/// let mut index = AverageIndex::new();
/// index.insert(Record::new(1, "A", "N", 90.0, 90.0));
/// index.insert(Record::new(2, "B", "S", 60.0, 60.0));
/// index.insert(Record::new(3, "C", "E", 90.0, 90.0));
///
/// let ids: Vec<u32> = index.in_order().map(|r| r.id().0).collect();
/// assert_eq!(ids, [2, 1, 3]);
///
/// assert_eq!(index.remove_by_id(StudentId::new(2)), 1);
/// assert_eq!(index.filter_average_above(85.0).len(), 2);
/// ```
#[derive(Default)]
pub struct AverageIndex {
    root: Tree,

    /// Number of records stored.
    len: usize,

    /// Number of nodes, including ones emptied by removal.
    nodes: usize,
}

impl AverageIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records in the index.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of tree nodes, counting nodes left empty by removals.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    /// Length of the longest root-to-leaf path (0 for an empty tree).
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(&Tree, usize)> = vec![(&self.root, 0)];

        while let Some((tree, depth)) = stack.pop() {
            if let Tree::Node(node) = tree {
                let depth = depth + 1;
                deepest = deepest.max(depth);
                stack.push((&node.left, depth));
                stack.push((&node.right, depth));
            }
        }
        deepest
    }

    // ========================================================================
    // Public API: Mutation
    // ========================================================================

    /// Insert a record under its current average.
    ///
    /// A record whose average already has a node is appended to that
    /// node's records; otherwise a new leaf is created.
    pub fn insert(&mut self, record: Record) {
        let key = record.average();
        trace!(id = %record.id(), key, "index insert");

        self.place(key, vec![record]);
        self.len += 1;
    }

    /// Remove every record with the given id.
    ///
    /// The id is not the key, so every node is visited. Returns how many
    /// records were removed; zero means no match and nothing changed.
    /// Nodes whose records become empty stay in the tree (see
    /// [`compact`](Self::compact)).
    pub fn remove_by_id(&mut self, id: StudentId) -> usize {
        let mut removed = 0;
        let mut stack: Vec<&mut TreeNode> = Vec::new();
        if let Tree::Node(root) = &mut self.root {
            stack.push(&mut **root);
        }

        while let Some(node) = stack.pop() {
            let before = node.records.len();
            node.records.retain(|r| r.id() != id);
            removed += before - node.records.len();

            if let Tree::Node(left) = &mut node.left {
                stack.push(&mut **left);
            }
            if let Tree::Node(right) = &mut node.right {
                stack.push(&mut **right);
            }
        }

        self.len -= removed;
        debug!(%id, removed, len = self.len, "index remove_by_id");
        removed
    }

    /// Drop nodes left empty by removals and rebuild the tree balanced.
    ///
    /// Returns the number of nodes pruned. Record order within each
    /// average is preserved, so [`in_order`](Self::in_order) output is
    /// unchanged.
    pub fn compact(&mut self) -> usize {
        let before = self.nodes;
        let mut groups: Vec<Option<(f64, Vec<Record>)>> = std::mem::take(&mut self.root)
            .into_groups()
            .into_iter()
            .filter(|(_, records)| !records.is_empty())
            .map(Some)
            .collect();
        self.nodes = 0;

        // Insert medians breadth-first so each subtree gets its own median.
        let mut ranges = VecDeque::from([(0, groups.len())]);
        while let Some((lo, hi)) = ranges.pop_front() {
            if lo >= hi {
                continue;
            }
            let mid = lo + (hi - lo) / 2;
            if let Some((key, records)) = groups[mid].take() {
                self.place(key, records);
            }
            ranges.push_back((lo, mid));
            ranges.push_back((mid + 1, hi));
        }

        let pruned = before - self.nodes;
        debug!(pruned, nodes = self.nodes, "index compacted");
        pruned
    }

    /// Remove every record and node.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    // ========================================================================
    // Public API: Queries
    // ========================================================================

    /// Iterate over all records in ascending-average order.
    ///
    /// Every call starts a fresh traversal.
    pub fn in_order(&self) -> InOrder<'_> {
        InOrder::new(&self.root, None)
    }

    /// Records in nodes whose key is strictly greater than `threshold`,
    /// ascending by average.
    ///
    /// Uses the node key rather than recomputing each record's average;
    /// all records in a node share that key exactly.
    pub fn filter_average_above(&self, threshold: f64) -> Vec<&Record> {
        InOrder::new(&self.root, Some(threshold)).collect()
    }

    // ========================================================================
    // Internal helpers
    // ========================================================================

    /// Descend to the slot for `key` and append `records` there.
    fn place(&mut self, key: f64, records: Vec<Record>) {
        let mut slot = &mut self.root;
        while let Tree::Node(node) = slot {
            match key.total_cmp(&node.key) {
                Ordering::Less => slot = &mut node.left,
                Ordering::Greater => slot = &mut node.right,
                Ordering::Equal => {
                    node.records.extend(records);
                    return;
                }
            }
        }
        *slot = Tree::Node(Box::new(TreeNode::leaf(key, records)));
        self.nodes += 1;
    }
}

impl Drop for AverageIndex {
    fn drop(&mut self) {
        // Detach children first so a list-shaped tree is not dropped
        // recursively, one native frame per level.
        let mut pending = vec![std::mem::take(&mut self.root)];
        while let Some(tree) = pending.pop() {
            if let Tree::Node(mut node) = tree {
                pending.push(std::mem::take(&mut node.left));
                pending.push(std::mem::take(&mut node.right));
            }
        }
    }
}

impl fmt::Debug for AverageIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AverageIndex")
            .field("len", &self.len)
            .field("nodes", &self.nodes)
            .field("records", &self.in_order().collect::<Vec<_>>())
            .finish()
    }
}

impl Extend<Record> for AverageIndex {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        for record in iter {
            self.insert(record);
        }
    }
}

impl FromIterator<Record> for AverageIndex {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut index = AverageIndex::new();
        index.extend(iter);
        index
    }
}

impl<'a> IntoIterator for &'a AverageIndex {
    type Item = &'a Record;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> InOrder<'a> {
        self.in_order()
    }
}
