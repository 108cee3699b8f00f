//! StudentRegistry - both indexes kept in step.

use tracing::{info, warn};

use crate::common::{Error, Result, StudentId};
use crate::index::{AverageIndex, InOrder};
use crate::list::{Iter, LinkedRoster};
use crate::record::Record;
use crate::shell::Summary;

/// Owns one [`LinkedRoster`] and one [`AverageIndex`] over the same students.
///
/// Every insert and delete goes to both structures, so list order and
/// average order always describe the same set of records.
///
/// Ids are unique here even though the core does not require it. A
/// duplicate is rejected before either index is touched, which keeps
/// "remove first match" on the list and "remove all matches" on the tree
/// equivalent.
///
/// # Example
/// ```
/// use roster::{Record, StudentId};
/// use roster::shell::StudentRegistry;
///
/// let mut registry = StudentRegistry::new();
/// registry.add_last(Record::new(1, "Ana", "North", 80.0, 90.0)).unwrap();
/// assert!(registry.add_last(Record::new(1, "Dup", "South", 1.0, 1.0)).is_err());
///
/// assert!(registry.remove(StudentId::new(1)));
/// assert!(registry.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct StudentRegistry {
    list: LinkedRoster,
    index: AverageIndex,
}

impl StudentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered students.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn contains(&self, id: StudentId) -> bool {
        self.list.contains_id(id)
    }

    /// Read access to the list index.
    pub fn list(&self) -> &LinkedRoster {
        &self.list
    }

    /// Read access to the average index.
    pub fn index(&self) -> &AverageIndex {
        &self.index
    }

    // ========================================================================
    // Mirrored mutation
    // ========================================================================

    /// Register a student at the head of the list.
    ///
    /// # Errors
    /// - `Error::DuplicateId` if a student with this id is already registered
    pub fn add_first(&mut self, record: Record) -> Result<()> {
        self.check_unique(&record)?;
        info!(id = %record.id(), name = record.name(), "student added at head");
        self.index.insert(record.clone());
        self.list.add_first(record);
        Ok(())
    }

    /// Register a student at the tail of the list.
    ///
    /// # Errors
    /// - `Error::DuplicateId` if a student with this id is already registered
    pub fn add_last(&mut self, record: Record) -> Result<()> {
        self.check_unique(&record)?;
        info!(id = %record.id(), name = record.name(), "student added at tail");
        self.index.insert(record.clone());
        self.list.add_last(record);
        Ok(())
    }

    /// Remove a student from both indexes.
    ///
    /// Returns `false` if neither index held the id.
    pub fn remove(&mut self, id: StudentId) -> bool {
        let from_list = self.list.remove_by_id(id).is_some();
        let from_index = self.index.remove_by_id(id) > 0;

        if from_list != from_index {
            warn!(%id, from_list, from_index, "indexes disagreed on removal");
        }
        if from_list || from_index {
            info!(%id, "student removed");
        }
        from_list || from_index
    }

    /// Reorder the list by name. The average index is unaffected.
    pub fn sort_by_name(&mut self) {
        self.list.sort_by_name();
    }

    /// Reorder the list by average. The average index is unaffected.
    pub fn sort_by_average(&mut self) {
        self.list.sort_by_average();
    }

    /// Prune tree nodes emptied by removals. Returns the number pruned.
    pub fn compact(&mut self) -> usize {
        self.index.compact()
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Students in list order.
    pub fn iter(&self) -> Iter<'_> {
        self.list.iter()
    }

    /// Students in ascending-average order, read from the tree.
    pub fn by_average(&self) -> InOrder<'_> {
        self.index.in_order()
    }

    /// Students with either exam score equal to `value`, in list order.
    pub fn search_by_score(&self, value: f64) -> Vec<&Record> {
        self.list.search_by_exact_score(value)
    }

    /// Students averaging above `threshold`, scanned in list order.
    pub fn filter_list(&self, threshold: f64) -> Vec<&Record> {
        self.list.filter_average_above(threshold)
    }

    /// Students averaging above `threshold`, read from the tree.
    pub fn filter_index(&self, threshold: f64) -> Vec<&Record> {
        self.index.filter_average_above(threshold)
    }

    pub fn summary(&self) -> Summary {
        Summary::from_records(self.list.iter())
    }

    fn check_unique(&self, record: &Record) -> Result<()> {
        if self.contains(record.id()) {
            return Err(Error::DuplicateId(record.id()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> StudentRegistry {
        let mut registry = StudentRegistry::new();
        registry.add_last(Record::new(1, "Ana", "N", 90.0, 90.0)).unwrap();
        registry.add_first(Record::new(2, "Ben", "S", 60.0, 60.0)).unwrap();
        registry.add_last(Record::new(3, "Cy", "E", 90.0, 90.0)).unwrap();
        registry
    }

    fn ids<'a>(records: impl IntoIterator<Item = &'a Record>) -> Vec<u32> {
        records.into_iter().map(|r| r.id().0).collect()
    }

    #[test]
    fn test_inserts_are_mirrored() {
        let registry = registry();
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.index().len(), 3);
        assert_eq!(ids(registry.iter()), vec![2, 1, 3]);
        assert_eq!(ids(registry.by_average()), vec![2, 1, 3]);
    }

    #[test]
    fn test_duplicate_rejected_without_side_effects() {
        let mut registry = registry();
        let err = registry
            .add_first(Record::new(3, "Other", "W", 10.0, 10.0))
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateId(id) if id == StudentId::new(3)));
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.index().len(), 3);
    }

    #[test]
    fn test_remove_is_mirrored() {
        let mut registry = registry();
        assert!(registry.remove(StudentId::new(2)));
        assert!(!registry.remove(StudentId::new(2)));

        assert_eq!(ids(registry.iter()), vec![1, 3]);
        assert_eq!(ids(registry.by_average()), vec![1, 3]);
        assert_eq!(registry.index().len(), 2);
    }

    #[test]
    fn test_filters_agree() {
        let registry = registry();
        let mut list = ids(registry.filter_list(85.0));
        let mut tree = ids(registry.filter_index(85.0));
        list.sort_unstable();
        tree.sort_unstable();
        assert_eq!(list, tree);
        assert_eq!(list, vec![1, 3]);
    }

    #[test]
    fn test_compact_after_removal() {
        let mut registry = registry();
        registry.remove(StudentId::new(2));
        assert_eq!(registry.compact(), 1);
        assert_eq!(ids(registry.by_average()), vec![1, 3]);
    }

    #[test]
    fn test_summary_reflects_list() {
        let summary = registry().summary();
        assert_eq!(summary.count, 3);
        assert_eq!(summary.best, Some(90.0));
        assert_eq!(summary.worst, Some(60.0));
    }
}
