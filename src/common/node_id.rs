//! Arena slot identifier type.

use std::fmt;

/// Identifies a slot in the [`LinkedRoster`](crate::LinkedRoster) arena.
///
/// Links between list nodes are stored as `NodeId`s rather than pointers,
/// so a back link never owns its target. Using `usize` allows direct
/// indexing: `slots[node_id.0]`.
///
/// Ids never leave the crate. Within a list, an id is only meaningful
/// until that list is re-sorted or the node is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(pub(crate) usize);

impl NodeId {
    /// Create a new NodeId.
    #[inline]
    pub(crate) fn new(id: usize) -> Self {
        NodeId(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_equality() {
        assert_eq!(NodeId::new(5), NodeId::new(5));
        assert_ne!(NodeId::new(5), NodeId::new(6));
    }

    #[test]
    fn test_node_id_display() {
        assert_eq!(format!("{}", NodeId::new(42)), "Node(42)");
    }
}
