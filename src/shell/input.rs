//! Parsing and validation of user-entered fields.
//!
//! Each function trims its input and either returns a value that is safe to
//! hand to the core or an [`Error`] describing what was wrong. The
//! interactive shell re-prompts on error.

use crate::common::config::{MAX_SCORE, MIN_SCORE};
use crate::common::{Error, Result, StudentId};

/// Parse a student id (a non-negative integer).
pub fn parse_id(text: &str) -> Result<StudentId> {
    let text = text.trim();
    text.parse::<u32>()
        .map(StudentId::new)
        .map_err(|_| Error::InvalidNumber(text.to_string()))
}

/// Parse an exam score within `[0, 100]`.
pub fn parse_score(text: &str) -> Result<f64> {
    let score = parse_threshold(text)?;
    if (MIN_SCORE..=MAX_SCORE).contains(&score) {
        Ok(score)
    } else {
        Err(Error::ScoreOutOfRange(score))
    }
}

/// Parse any finite number, e.g. a filter threshold or a search score.
pub fn parse_threshold(text: &str) -> Result<f64> {
    let text = text.trim();
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(Error::InvalidNumber(text.to_string())),
    }
}

/// Require a non-blank text field, returning it trimmed.
pub fn require_text(field: &'static str, text: &str) -> Result<String> {
    let text = text.trim();
    if text.is_empty() {
        Err(Error::EmptyField(field))
    } else {
        Ok(text.to_string())
    }
}
