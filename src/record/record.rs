//! Record - one student's stored fields.

use std::fmt;

use crate::common::config::AVERAGE_DECIMALS;
use crate::common::StudentId;
use crate::record::Grade;

/// 2^52: from here up every f64 is a whole number.
const NO_FRACTION_FROM: f64 = 4_503_599_627_370_496.0;

/// A student record.
///
/// Only the id, name, region and the two exam scores are stored. The
/// average and grade are recomputed on every call, so they can never drift
/// from the scores.
///
/// The constructor does not validate anything: scores outside `[0, 100]`
/// and empty strings are accepted. Validation belongs to whoever collects
/// the input (see [`crate::shell::input`]).
///
/// # Example
/// ```
/// use roster::{Grade, Record};
///
/// let r = Record::new(1, "Alice", "North", 90.0, 81.0);
/// assert_eq!(r.average(), 85.5);
/// assert_eq!(r.grade(), Grade::Excellent);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    id: StudentId,
    name: String,
    region: String,
    score1: f64,
    score2: f64,
}

impl Record {
    /// Create a new record.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        region: impl Into<String>,
        score1: f64,
        score2: f64,
    ) -> Self {
        Self {
            id: StudentId::new(id),
            name: name.into(),
            region: region.into(),
            score1,
            score2,
        }
    }

    #[inline]
    pub fn id(&self) -> StudentId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn region(&self) -> &str {
        &self.region
    }

    #[inline]
    pub fn score1(&self) -> f64 {
        self.score1
    }

    #[inline]
    pub fn score2(&self) -> f64 {
        self.score2
    }

    /// Mean of the two scores, rounded to two decimal places.
    ///
    /// Finite scores always give a finite average, however large.
    pub fn average(&self) -> f64 {
        let scale = 10f64.powi(AVERAGE_DECIMALS);
        // Halving each score first keeps the sum from overflowing.
        let mean = self.score1 / 2.0 + self.score2 / 2.0;
        let scaled = mean * scale;

        // + 0.0 turns -0.0 into 0.0 so equal averages share one index key
        if scaled.abs() >= NO_FRACTION_FROM {
            // No fractional bits left to round (or the scaling overflowed).
            return mean + 0.0;
        }
        scaled.round() / scale + 0.0
    }

    /// Grade band of [`average`](Self::average).
    pub fn grade(&self) -> Grade {
        Grade::from_average(self.average())
    }

    /// Whether either exam score equals `value` within `tolerance`.
    pub fn has_score(&self, value: f64, tolerance: f64) -> bool {
        (self.score1 - value).abs() <= tolerance || (self.score2 - value).abs() <= tolerance
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | Name: {} | Region: {} | Score 1: {:.2} | Score 2: {:.2} | Average: {:.2} | Grade: {}",
            self.id,
            self.name,
            self.region,
            self.score1,
            self.score2,
            self.average(),
            self.grade()
        )
    }
}
