//! Student identifier type.

use std::fmt;

/// Identifies a student record.
///
/// Ids are assigned by whoever constructs the record. Neither index
/// enforces uniqueness; two records may share an id.
///
/// # Example
/// ```
/// use roster::StudentId;
///
/// let id = StudentId::new(42);
/// assert_eq!(id.0, 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StudentId(pub u32);

impl StudentId {
    /// Create a new StudentId.
    #[inline]
    pub fn new(id: u32) -> Self {
        StudentId(id)
    }
}

impl From<u32> for StudentId {
    fn from(id: u32) -> Self {
        StudentId(id)
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_id_new() {
        let id = StudentId::new(42);
        assert_eq!(id.0, 42);
        assert_eq!(StudentId::from(42), id);
    }

    #[test]
    fn test_student_id_ordering() {
        assert!(StudentId::new(1) < StudentId::new(2));
        assert!(StudentId::new(5) > StudentId::new(3));
    }

    #[test]
    fn test_student_id_display() {
        assert_eq!(format!("{}", StudentId::new(7)), "7");
    }
}
