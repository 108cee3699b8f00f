//! Aggregate statistics over a set of records.

use std::fmt;

use crate::record::{Grade, Record};

/// A point-in-time summary of the registered students.
///
/// Computed from the records on demand, so it never goes stale relative to
/// the data it was built from; build a new one after changes.
///
/// # Example
/// ```
/// use roster::{Grade, Record};
/// use roster::shell::Summary;
///
/// let records = [
///     Record::new(1, "A", "N", 90.0, 90.0),
///     Record::new(2, "B", "S", 40.0, 50.0),
/// ];
/// let summary = Summary::from_records(&records);
/// assert_eq!(summary.count, 2);
/// assert_eq!(summary.class_average(), 67.5);
/// assert_eq!(summary.grade_count(Grade::Excellent), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,

    /// Sum of every record's (rounded) average.
    pub average_total: f64,

    /// Highest average seen, `None` when empty.
    pub best: Option<f64>,

    /// Lowest average seen, `None` when empty.
    pub worst: Option<f64>,

    /// Records per grade, indexed in [`Grade::ALL`] order.
    pub grades: [usize; Grade::COUNT],
}

impl Summary {
    /// Summarize any collection of records.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a Record>) -> Self {
        let mut summary = Summary {
            count: 0,
            average_total: 0.0,
            best: None,
            worst: None,
            grades: [0; Grade::COUNT],
        };

        for record in records {
            let average = record.average();
            summary.count += 1;
            summary.average_total += average;
            summary.best = Some(summary.best.map_or(average, |b| b.max(average)));
            summary.worst = Some(summary.worst.map_or(average, |w| w.min(average)));
            summary.grades[record.grade() as usize] += 1;
        }
        summary
    }

    /// Mean of the record averages (0.0 when empty).
    pub fn class_average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.average_total / self.count as f64
        }
    }

    /// Number of records in a grade band.
    pub fn grade_count(&self, grade: Grade) -> usize {
        self.grades[grade as usize]
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Students: {} | Class average: {:.2}",
            self.count,
            self.class_average()
        )?;
        if let (Some(best), Some(worst)) = (self.best, self.worst) {
            write!(f, " | Best: {:.2} | Worst: {:.2}", best, worst)?;
        }
        for grade in Grade::ALL {
            write!(f, "\n  {:<10} {}", grade.label(), self.grade_count(grade))?;
        }
        Ok(())
    }
}
