//! Iterators over a [`LinkedRoster`].

use std::iter::FusedIterator;

use crate::common::NodeId;
use crate::list::LinkedRoster;
use crate::record::Record;

/// Borrowing iterator in list order.
///
/// Created by [`LinkedRoster::iter`]. Each step follows one link, so
/// advancing is O(1). Iterating from both ends meets in the middle.
pub struct Iter<'a> {
    roster: &'a LinkedRoster,
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(
        roster: &'a LinkedRoster,
        front: Option<NodeId>,
        back: Option<NodeId>,
        remaining: usize,
    ) -> Self {
        Self {
            roster,
            front,
            back,
            remaining,
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.roster.node(self.front?)?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.roster.node(self.back?)?;
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.record)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// Owning iterator in list order.
///
/// Created by `LinkedRoster::into_iter`; pops records off the head.
pub struct IntoIter {
    roster: LinkedRoster,
}

impl IntoIter {
    pub(crate) fn new(roster: LinkedRoster) -> Self {
        Self { roster }
    }
}

impl Iterator for IntoIter {
    type Item = Record;

    fn next(&mut self) -> Option<Record> {
        self.roster.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.roster.len(), Some(self.roster.len()))
    }
}

impl DoubleEndedIterator for IntoIter {
    fn next_back(&mut self) -> Option<Record> {
        self.roster.pop_back()
    }
}

impl ExactSizeIterator for IntoIter {}
