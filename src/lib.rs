//! Student Roster - an in-memory student roster with two parallel indexes.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         Student Roster                          │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Application Shell (shell/)                  │   │
//! │  │   Shell (menu) → input validation → StudentRegistry      │   │
//! │  │        mirrors every insert/delete into both indexes     │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                    ↓                         ↓                  │
//! │  ┌──────────────────────────┐  ┌──────────────────────────┐   │
//! │  │   LinkedRoster (list/)   │  │  AverageIndex (index/)   │   │
//! │  │  arena doubly linked     │  │  unbalanced BST keyed    │   │
//! │  │  list, insertion order   │  │  by average              │   │
//! │  └──────────────────────────┘  └──────────────────────────┘   │
//! │                    ↓                         ↓                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Record model (record/)                      │   │
//! │  │     id, name, region, two scores → average, grade        │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (StudentId, Error, config)
//! - [`record`] - The student record and its derived grade
//! - [`list`] - Insertion-ordered doubly linked index
//! - [`index`] - Average-keyed binary search tree index
//! - [`shell`] - Input validation, registry and interactive menu
//!
//! The two indexes are independent: neither knows about the other. Keeping
//! them in sync is the job of [`shell::StudentRegistry`].
//!
//! # Quick Start
//! ```
//! use roster::{AverageIndex, LinkedRoster, Record};
//!
//! let students = [
//!     Record::new(1, "Ana", "North", 70.0, 70.0),
//!     Record::new(2, "Ben", "South", 50.0, 50.0),
//!     Record::new(3, "Cy", "East", 90.0, 90.0),
//! ];
//!
//! let list: LinkedRoster = students.iter().cloned().collect();
//! let index: AverageIndex = students.iter().cloned().collect();
//!
//! let by_average: Vec<&str> = index.in_order().map(|r| r.name()).collect();
//! assert_eq!(by_average, ["Ben", "Ana", "Cy"]);
//! assert_eq!(list.filter_average_above(60.0).len(), 2);
//! ```

pub mod common;
pub mod index;
pub mod list;
pub mod record;
pub mod shell;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, Result, StudentId};
pub use index::AverageIndex;
pub use list::LinkedRoster;
pub use record::{Grade, Record};
