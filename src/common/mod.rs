//! Common types and utilities shared across the roster.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants (score bounds, tolerance, grade thresholds)
//! - Error types
//! - Identifiers (StudentId, and the crate-internal NodeId)

pub mod config;
pub mod error;
mod node_id;
mod student_id;

pub use error::{Error, Result};
pub(crate) use node_id::NodeId;
pub use student_id::StudentId;
