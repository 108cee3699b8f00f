//! Node - one slot in the list arena.

use crate::common::NodeId;
use crate::record::Record;

/// A list node.
///
/// The node exclusively owns its record. Both links are plain
/// [`NodeId`]s into the owning arena, so neither direction owns its
/// neighbour and the chain can never form an ownership cycle.
#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) record: Record,
    pub(crate) prev: Option<NodeId>,
    pub(crate) next: Option<NodeId>,
}

impl Node {
    #[inline]
    pub(crate) fn new(record: Record, prev: Option<NodeId>, next: Option<NodeId>) -> Self {
        Self { record, prev, next }
    }
}
