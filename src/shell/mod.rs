//! Application shell around the two indexes.
//!
//! Nothing here is needed to use [`LinkedRoster`](crate::LinkedRoster) or
//! [`AverageIndex`](crate::AverageIndex) directly. The shell keeps the two
//! in step, validates user input before a [`Record`](crate::Record) is
//! built, and renders results as text.
//!
//! # Components
//! - [`StudentRegistry`] - Owns both indexes and mirrors every insert/delete
//! - [`Summary`] - Aggregate view of the registered records
//! - [`Shell`] - Line-oriented interactive menu over any reader/writer
//! - [`input`] - Parsing and validation of user-entered fields

pub mod input;
mod menu;
mod registry;
mod summary;

pub use menu::{MenuChoice, Shell};
pub use registry::StudentRegistry;
pub use summary::Summary;
