//! Grade bands derived from a record's average.

use std::fmt;

use crate::common::config::{EXCELLENT_FROM, FAILING_FROM, GOOD_FROM, VERY_GOOD_FROM};

/// Categorical grade for an average.
///
/// | Band        | Average          |
/// |-------------|------------------|
/// | `Weak`      | `< 50`           |
/// | `Failing`   | `[50, 60)`       |
/// | `Good`      | `[60, 75)`       |
/// | `VeryGood`  | `[75, 85)`       |
/// | `Excellent` | `>= 85`          |
///
/// Variants are declared in ascending order, so `Ord` ranks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Grade {
    Weak,
    Failing,
    Good,
    VeryGood,
    Excellent,
}

impl Grade {
    /// Number of grade bands.
    pub const COUNT: usize = 5;

    /// Every grade, lowest first.
    pub const ALL: [Grade; Grade::COUNT] = [
        Grade::Weak,
        Grade::Failing,
        Grade::Good,
        Grade::VeryGood,
        Grade::Excellent,
    ];

    /// Map an average onto its grade band.
    ///
    /// A NaN average falls through every threshold and lands in `Weak`.
    pub fn from_average(average: f64) -> Self {
        if average >= EXCELLENT_FROM {
            Grade::Excellent
        } else if average >= VERY_GOOD_FROM {
            Grade::VeryGood
        } else if average >= GOOD_FROM {
            Grade::Good
        } else if average >= FAILING_FROM {
            Grade::Failing
        } else {
            Grade::Weak
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Grade::Weak => "Weak",
            Grade::Failing => "Failing",
            Grade::Good => "Good",
            Grade::VeryGood => "Very Good",
            Grade::Excellent => "Excellent",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
