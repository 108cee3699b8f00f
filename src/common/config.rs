//! Configuration constants for the roster.

/// Lowest score the shell accepts for an exam.
///
/// The core never checks this; [`Record`](crate::Record) computes an
/// average for any real input.
pub const MIN_SCORE: f64 = 0.0;

/// Highest score the shell accepts for an exam.
pub const MAX_SCORE: f64 = 100.0;

/// Absolute tolerance used when matching an exam score exactly.
///
/// Absorbs representation error, e.g. a score parsed from `"70.1"` still
/// matches a query for `70.1` computed another way.
pub const SCORE_TOLERANCE: f64 = 1e-9;

/// Number of decimal places the average is rounded to.
pub const AVERAGE_DECIMALS: i32 = 2;

// ============================================================================
// Grade thresholds (lower bound of each band, inclusive)
// ============================================================================

/// Averages at or above this are at least `Failing` (below it: `Weak`).
pub const FAILING_FROM: f64 = 50.0;

/// Averages at or above this are at least `Good`.
pub const GOOD_FROM: f64 = 60.0;

/// Averages at or above this are at least `VeryGood`.
pub const VERY_GOOD_FROM: f64 = 75.0;

/// Averages at or above this are `Excellent`.
pub const EXCELLENT_FROM: f64 = 85.0;
