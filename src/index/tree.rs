//! Tree nodes for the [`AverageIndex`](crate::AverageIndex).

use crate::record::Record;

/// A subtree: either empty or one node owning both of its children.
#[derive(Debug, Default)]
pub(crate) enum Tree {
    #[default]
    Empty,
    Node(Box<TreeNode>),
}

/// One distinct average and every record that has it.
///
/// `records` keeps insertion order. It may be empty once its last record
/// has been removed; the node itself stays until the index is compacted.
#[derive(Debug)]
pub(crate) struct TreeNode {
    pub(crate) key: f64,
    pub(crate) records: Vec<Record>,
    pub(crate) left: Tree,
    pub(crate) right: Tree,
}

impl TreeNode {
    pub(crate) fn leaf(key: f64, records: Vec<Record>) -> Self {
        Self {
            key,
            records,
            left: Tree::Empty,
            right: Tree::Empty,
        }
    }
}

impl Tree {
    /// Consume the tree, returning each node's key and records in ascending
    /// key order.
    pub(crate) fn into_groups(self) -> Vec<(f64, Vec<Record>)> {
        let mut groups = Vec::new();
        let mut stack: Vec<Box<TreeNode>> = Vec::new();
        let mut tree = self;

        loop {
            match tree {
                Tree::Node(mut node) => {
                    tree = std::mem::take(&mut node.left);
                    stack.push(node);
                }
                Tree::Empty => match stack.pop() {
                    Some(mut node) => {
                        tree = std::mem::take(&mut node.right);
                        let TreeNode { key, records, .. } = *node;
                        groups.push((key, records));
                    }
                    None => break,
                },
            }
        }
        groups
    }
}
