//! Insertion-ordered doubly linked index over records.
//!
//! # Components
//! - [`LinkedRoster`] - The list itself, an arena of nodes linked by index
//! - [`Iter`] - Borrowing head-to-tail (and tail-to-head) iterator
//! - [`IntoIter`] - Owning iterator that drains the list from the head

mod iter;
mod linked_roster;
mod node;

pub use iter::{IntoIter, Iter};
pub use linked_roster::LinkedRoster;
