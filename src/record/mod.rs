//! The student record model.
//!
//! # Components
//! - [`Record`] - One student's stored fields plus derived average and grade
//! - [`Grade`] - Categorical band chosen by threshold on the average

mod grade;
#[allow(clippy::module_inception)]
mod record;

pub use grade::Grade;
pub use record::Record;
