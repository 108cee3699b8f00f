//! Error types for the roster.
//!
//! The core data structures never fail: removals report "not found" through
//! their return value and queries return empty collections. Everything here
//! belongs to the input and I/O side of the shell.

use thiserror::Error;

use crate::common::StudentId;

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors raised outside the core indexes.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while reading commands or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input could not be parsed as a number.
    #[error("'{0}' is not a valid number")]
    InvalidNumber(String),

    /// Exam score outside the accepted range.
    #[error("score {0} is outside the range [0, 100]")]
    ScoreOutOfRange(f64),

    /// A required text field was blank.
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    /// A record with this id is already registered.
    #[error("a student with id {0} already exists")]
    DuplicateId(StudentId),

    /// Input stream closed while a value was still expected.
    #[error("unexpected end of input")]
    EndOfInput,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::ScoreOutOfRange(120.0);
        assert_eq!(format!("{}", err), "score 120 is outside the range [0, 100]");

        let err = Error::EmptyField("name");
        assert_eq!(format!("{}", err), "name must not be empty");

        let err = Error::DuplicateId(StudentId::new(3));
        assert_eq!(format!("{}", err), "a student with id 3 already exists");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: Error = io_err.into();

        match err {
            Error::Io(_) => {} // Success
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_io_error_has_source() {
        use std::error::Error as _;

        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err = Error::from(io_err);
        assert!(err.source().is_some());
        assert!(Error::EndOfInput.source().is_none());
    }
}
