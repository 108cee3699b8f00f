//! Average-keyed binary search tree index over records.
//!
//! # Components
//! - [`AverageIndex`] - Unbalanced BST grouping records by exact average
//! - [`InOrder`] - Ascending-average traversal, optionally bounded below

mod average_index;
mod iter;
mod tree;

pub use average_index::AverageIndex;
pub use iter::InOrder;
