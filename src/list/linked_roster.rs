//! LinkedRoster - the doubly linked record list.
//!
//! The [`LinkedRoster`] provides:
//! - O(1) insertion at either end
//! - Removal of the first record with a given id
//! - In-place re-sorting by name or by average
//! - Linear exact-score search and average filtering

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use crate::common::config::SCORE_TOLERANCE;
use crate::common::{NodeId, StudentId};
use crate::list::node::Node;
use crate::list::{IntoIter, Iter};
use crate::record::Record;

/// A doubly linked list of records.
///
/// # Architecture
/// ```text
/// ┌─────────────────────────────────────────────────────────────┐
/// │                       LinkedRoster                          │
/// │   head ─┐                                      ┌─ tail      │
/// │         ▼                                      ▼            │
/// │  ┌────────────┐   next   ┌────────────┐   next  ┌────────┐  │
/// │  │ slots[3]   │ ───────▶ │ slots[0]   │ ──────▶ │slots[1]│  │
/// │  │ Record     │ ◀─────── │ Record     │ ◀────── │ Record │  │
/// │  └────────────┘   prev   └────────────┘   prev  └────────┘  │
/// │  ┌──────────────┐                                           │
/// │  │  free_list   │  vacated slots, reused LIFO               │
/// │  │ Vec<NodeId>  │                                           │
/// │  └──────────────┘                                           │
/// └─────────────────────────────────────────────────────────────┘
/// ```
///
/// Nodes live in `slots` and refer to each other by slot index. Slot order
/// has nothing to do with list order; only the links do.
///
/// # Invariants
/// - `head.prev` and `tail.next` are always `None`
/// - following `next` from `head` visits exactly `len` nodes and ends at `tail`
/// - `prev` of every node is the node whose `next` points at it
///
/// # Example
/// ```
/// use roster::{LinkedRoster, Record, StudentId};
///
/// let mut list = LinkedRoster::new();
/// list.add_last(Record::new(1, "Bea", "East", 70.0, 80.0));
/// list.add_first(Record::new(2, "Al", "West", 90.0, 70.0));
///
/// let names: Vec<_> = list.iter().map(|r| r.name()).collect();
/// assert_eq!(names, ["Al", "Bea"]);
///
/// assert!(list.remove_by_id(StudentId::new(2)).is_some());
/// assert_eq!(list.len(), 1);
/// ```
pub struct LinkedRoster {
    /// Node storage; `None` marks a vacated slot.
    slots: Vec<Option<Node>>,

    /// Vacated slots available for reuse.
    free_list: Vec<NodeId>,

    head: Option<NodeId>,
    tail: Option<NodeId>,

    /// Number of linked nodes (redundant with the chain, kept for O(1) `len`).
    len: usize,
}

impl LinkedRoster {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Create an empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    /// Number of records in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // ========================================================================
    // Public API: Insertion and removal
    // ========================================================================

    /// Insert a record before the current head.
    pub fn add_first(&mut self, record: Record) {
        trace!(id = %record.id(), "list add_first");

        let old_head = self.head;
        let node_id = self.allocate(Node::new(record, None, old_head));

        match old_head {
            Some(old) => self.set_prev(old, Some(node_id)),
            None => self.tail = Some(node_id),
        }
        self.head = Some(node_id);
        self.len += 1;
    }

    /// Insert a record after the current tail.
    pub fn add_last(&mut self, record: Record) {
        trace!(id = %record.id(), "list add_last");

        let old_tail = self.tail;
        let node_id = self.allocate(Node::new(record, old_tail, None));

        match old_tail {
            Some(old) => self.set_next(old, Some(node_id)),
            None => self.head = Some(node_id),
        }
        self.tail = Some(node_id);
        self.len += 1;
    }

    /// Remove and return the head record.
    pub fn pop_front(&mut self) -> Option<Record> {
        let head = self.head?;
        self.unlink(head)
    }

    /// Remove and return the tail record.
    pub fn pop_back(&mut self) -> Option<Record> {
        let tail = self.tail?;
        self.unlink(tail)
    }

    /// Remove the first record (head to tail) whose id is `id`.
    ///
    /// Returns the removed record, or `None` if no record matched; in that
    /// case the list is left untouched. Later records sharing the id stay.
    pub fn remove_by_id(&mut self, id: StudentId) -> Option<Record> {
        let Some(node_id) = self.find_node(id) else {
            debug!(%id, "list remove_by_id: not found");
            return None;
        };
        let removed = self.unlink(node_id);
        debug!(%id, len = self.len, "list remove_by_id: removed");
        removed
    }

    /// Remove every record.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_list.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    // ========================================================================
    // Public API: Enumeration and lookup
    // ========================================================================

    /// Iterate over the records from head to tail.
    ///
    /// Every call starts a fresh traversal of the list as it is now.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self, self.head, self.tail, self.len)
    }

    /// First record in list order.
    pub fn front(&self) -> Option<&Record> {
        self.head.and_then(|id| self.node(id)).map(|n| &n.record)
    }

    /// Last record in list order.
    pub fn back(&self) -> Option<&Record> {
        self.tail.and_then(|id| self.node(id)).map(|n| &n.record)
    }

    /// First record (head to tail) with the given id.
    pub fn get_by_id(&self, id: StudentId) -> Option<&Record> {
        self.iter().find(|r| r.id() == id)
    }

    pub fn contains_id(&self, id: StudentId) -> bool {
        self.get_by_id(id).is_some()
    }

    /// Records with either exam score equal to `value`, in list order.
    ///
    /// Scores are compared with an absolute tolerance of
    /// [`SCORE_TOLERANCE`]. No match yields an empty vector.
    pub fn search_by_exact_score(&self, value: f64) -> Vec<&Record> {
        self.iter()
            .filter(|r| r.has_score(value, SCORE_TOLERANCE))
            .collect()
    }

    /// Records whose average is strictly greater than `threshold`, in list order.
    pub fn filter_average_above(&self, threshold: f64) -> Vec<&Record> {
        self.iter().filter(|r| r.average() > threshold).collect()
    }

    // ========================================================================
    // Public API: Re-sorting
    // ========================================================================

    /// Reorder the list by name, ascending.
    ///
    /// Names compare by bytes, not by locale. The chain is rebuilt into
    /// fresh slots.
    pub fn sort_by_name(&mut self) {
        self.rebuild_sorted(|a, b| a.name().cmp(b.name()));
        debug!(len = self.len, "list sorted by name");
    }

    /// Reorder the list by average, ascending.
    pub fn sort_by_average(&mut self) {
        self.rebuild_sorted(|a, b| a.average().total_cmp(&b.average()));
        debug!(len = self.len, "list sorted by average");
    }

    // ========================================================================
    // Internal helpers
    // ========================================================================

    /// Snapshot the records, sort them and relink a fresh chain.
    fn rebuild_sorted<F>(&mut self, compare: F)
    where
        F: FnMut(&Record, &Record) -> Ordering,
    {
        let mut records: Vec<Record> = std::iter::from_fn(|| self.pop_front()).collect();
        records.sort_by(compare);

        // A fresh arena drops the vacated slots and lays the chain out in order.
        let mut rebuilt = LinkedRoster::with_capacity(records.len());
        rebuilt.extend(records);
        *self = rebuilt;
    }

    #[inline]
    pub(crate) fn node(&self, node_id: NodeId) -> Option<&Node> {
        self.slots.get(node_id.0).and_then(Option::as_ref)
    }

    #[inline]
    fn node_mut(&mut self, node_id: NodeId) -> Option<&mut Node> {
        self.slots.get_mut(node_id.0).and_then(Option::as_mut)
    }

    fn set_prev(&mut self, node_id: NodeId, prev: Option<NodeId>) {
        if let Some(node) = self.node_mut(node_id) {
            node.prev = prev;
        }
    }

    fn set_next(&mut self, node_id: NodeId, next: Option<NodeId>) {
        if let Some(node) = self.node_mut(node_id) {
            node.next = next;
        }
    }

    /// Store a node, reusing a vacated slot when one is available.
    fn allocate(&mut self, node: Node) -> NodeId {
        match self.free_list.pop() {
            Some(node_id) => {
                self.slots[node_id.0] = Some(node);
                node_id
            }
            None => {
                self.slots.push(Some(node));
                NodeId::new(self.slots.len() - 1)
            }
        }
    }

    fn find_node(&self, id: StudentId) -> Option<NodeId> {
        let mut cursor = self.head;
        while let Some(node_id) = cursor {
            let node = self.node(node_id)?;
            if node.record.id() == id {
                return Some(node_id);
            }
            cursor = node.next;
        }
        None
    }

    /// Splice a node out of the chain and free its slot.
    fn unlink(&mut self, node_id: NodeId) -> Option<Record> {
        let node = self.slots.get_mut(node_id.0)?.take()?;

        match node.prev {
            Some(prev) => self.set_next(prev, node.next),
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.set_prev(next, node.prev),
            None => self.tail = node.prev,
        }

        self.free_list.push(node_id);
        self.len -= 1;
        Some(node.record)
    }
}

impl Default for LinkedRoster {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LinkedRoster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Extend<Record> for LinkedRoster {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        for record in iter {
            self.add_last(record);
        }
    }
}

impl FromIterator<Record> for LinkedRoster {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut roster = LinkedRoster::new();
        roster.extend(iter);
        roster
    }
}

impl<'a> IntoIterator for &'a LinkedRoster {
    type Item = &'a Record;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl IntoIterator for LinkedRoster {
    type Item = Record;
    type IntoIter = IntoIter;

    fn into_iter(self) -> IntoIter {
        IntoIter::new(self)
    }
}
