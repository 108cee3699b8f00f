//! Property tests for the list and tree indexes.
//!
//! Each test drives a structure with random operations and checks it
//! against a plain `Vec` model or against the other index.

use std::collections::VecDeque;

use proptest::prelude::*;
use roster::{AverageIndex, LinkedRoster, Record, StudentId};

/// Scores on a 0.5 grid keep averages exact and make ties likely.
fn score() -> impl Strategy<Value = f64> {
    (0u32..=200).prop_map(|half_points| f64::from(half_points) / 2.0)
}

fn record() -> impl Strategy<Value = Record> {
    (0u32..20, "[a-zA-Z]{1,6}", score(), score())
        .prop_map(|(id, name, s1, s2)| Record::new(id, name, "Region", s1, s2))
}

#[derive(Debug, Clone)]
enum Op {
    AddFirst(Record),
    AddLast(Record),
    Remove(u32),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        record().prop_map(Op::AddFirst),
        record().prop_map(Op::AddLast),
        (0u32..20).prop_map(Op::Remove),
    ]
}

fn ids<'a>(records: impl IntoIterator<Item = &'a Record>) -> Vec<u32> {
    records.into_iter().map(|r| r.id().0).collect()
}

fn sorted(mut ids: Vec<u32>) -> Vec<u32> {
    ids.sort_unstable();
    ids
}

proptest! {
    #[test]
    fn list_matches_deque_model(ops in prop::collection::vec(op(), 0..60)) {
        let mut list = LinkedRoster::new();
        let mut model: VecDeque<Record> = VecDeque::new();

        for op in ops {
            match op {
                Op::AddFirst(r) => {
                    model.push_front(r.clone());
                    list.add_first(r);
                }
                Op::AddLast(r) => {
                    model.push_back(r.clone());
                    list.add_last(r);
                }
                Op::Remove(id) => {
                    let expected = model.iter().position(|r| r.id().0 == id);
                    let removed = list.remove_by_id(StudentId::new(id));
                    prop_assert_eq!(removed.is_some(), expected.is_some());
                    if let Some(pos) = expected {
                        prop_assert_eq!(removed, model.remove(pos));
                    }
                }
            }
            prop_assert_eq!(list.len(), model.len());
        }

        prop_assert_eq!(ids(&list), ids(&model));
        let backwards: Vec<u32> = ids(list.iter().rev());
        let model_backwards: Vec<u32> = ids(model.iter().rev());
        prop_assert_eq!(backwards, model_backwards);
    }

    #[test]
    fn sorts_order_and_preserve_records(records in prop::collection::vec(record(), 0..40)) {
        let mut list: LinkedRoster = records.iter().cloned().collect();

        list.sort_by_name();
        let names: Vec<&str> = list.iter().map(|r| r.name()).collect();
        prop_assert!(names.windows(2).all(|w| w[0].as_bytes() <= w[1].as_bytes()));
        prop_assert_eq!(sorted(ids(&list)), sorted(ids(&records)));

        list.sort_by_average();
        let averages: Vec<f64> = list.iter().map(|r| r.average()).collect();
        prop_assert!(averages.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(list.len(), records.len());
        prop_assert_eq!(sorted(ids(&list)), sorted(ids(&records)));
    }

    #[test]
    fn exact_score_search_is_complete(
        records in prop::collection::vec(record(), 0..40),
        target in score(),
        jitter in -9e-10f64..9e-10,
    ) {
        let list: LinkedRoster = records.iter().cloned().collect();
        let expected: Vec<u32> = records
            .iter()
            .filter(|r| r.score1() == target || r.score2() == target)
            .map(|r| r.id().0)
            .collect();
        prop_assert_eq!(ids(list.search_by_exact_score(target)), expected.clone());

        // Anything within the tolerance finds the same records.
        prop_assert_eq!(ids(list.search_by_exact_score(target + jitter)), expected);
    }

    #[test]
    fn search_rejects_values_beyond_tolerance(
        records in prop::collection::vec(record(), 0..40),
        target in score(),
        offset in 2e-9f64..0.25,
    ) {
        // Grid scores are 0.5 apart, so target ± offset never hits another one.
        let list: LinkedRoster = records.iter().cloned().collect();
        prop_assert!(list.search_by_exact_score(target + offset).is_empty());
        prop_assert!(list.search_by_exact_score(target - offset).is_empty());
    }

    #[test]
    fn in_order_is_sorted(records in prop::collection::vec(record(), 0..60)) {
        let index: AverageIndex = records.iter().cloned().collect();
        let averages: Vec<f64> = index.in_order().map(|r| r.average()).collect();

        prop_assert_eq!(averages.len(), records.len());
        prop_assert!(averages.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn filters_agree(
        records in prop::collection::vec(record(), 0..60),
        threshold in 0u32..=100,
    ) {
        let threshold = f64::from(threshold);
        let list: LinkedRoster = records.iter().cloned().collect();
        let index: AverageIndex = records.iter().cloned().collect();

        prop_assert_eq!(
            sorted(ids(list.filter_average_above(threshold))),
            sorted(ids(index.filter_average_above(threshold)))
        );
    }

    #[test]
    fn index_removal_and_compaction(
        records in prop::collection::vec(record(), 0..60),
        victims in prop::collection::vec(0u32..20, 0..10),
    ) {
        let mut index: AverageIndex = records.iter().cloned().collect();
        let mut model = records.clone();

        for id in victims {
            let expected = model.iter().filter(|r| r.id().0 == id).count();
            prop_assert_eq!(index.remove_by_id(StudentId::new(id)), expected);
            model.retain(|r| r.id().0 != id);
        }
        prop_assert_eq!(index.len(), model.len());
        prop_assert_eq!(sorted(ids(index.in_order())), sorted(ids(&model)));

        let before = ids(index.in_order());
        index.compact();
        prop_assert_eq!(ids(index.in_order()), before);
        prop_assert!(index.node_count() <= index.len());
    }
}
