//! In-order traversal of an [`AverageIndex`](crate::AverageIndex).

use std::iter::FusedIterator;

use crate::index::tree::{Tree, TreeNode};
use crate::record::Record;

/// Iterator over records in ascending-average order.
///
/// Uses an explicit stack of pending ancestors, so a degenerate
/// (list-shaped) tree costs heap memory, not native stack. Records that
/// share a node come out in insertion order.
///
/// With a lower bound, whole subtrees whose keys cannot exceed it are
/// skipped without being visited.
pub struct InOrder<'a> {
    stack: Vec<&'a TreeNode>,
    current: std::slice::Iter<'a, Record>,
    above: Option<f64>,
}

impl<'a> InOrder<'a> {
    pub(crate) fn new(root: &'a Tree, above: Option<f64>) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            current: Default::default(),
            above,
        };
        iter.descend_left(root);
        iter
    }

    /// Whether a node key passes the lower bound (a NaN bound passes nothing).
    #[inline]
    fn admits(&self, key: f64) -> bool {
        self.above.map_or(true, |threshold| key > threshold)
    }

    /// Push the left spine of `tree`, stepping right past rejected nodes.
    fn descend_left(&mut self, mut tree: &'a Tree) {
        while let Tree::Node(node) = tree {
            if self.admits(node.key) {
                self.stack.push(&**node);
                tree = &node.left;
            } else {
                // Everything to the left is smaller still.
                tree = &node.right;
            }
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(record) = self.current.next() {
                return Some(record);
            }
            let node = self.stack.pop()?;
            self.current = node.records.iter();
            self.descend_left(&node.right);
        }
    }
}

impl FusedIterator for InOrder<'_> {}
