//! Unit tests for the pre-persistence batch filter.

use star_census::pipeline::batch::compact;

use super::helpers::sample_person;

#[test]
fn compact_drops_absent_entries_preserving_order() {
    let batch = vec![
        Some(sample_person(1)),
        None,
        Some(sample_person(3)),
        None,
        Some(sample_person(5)),
    ];

    let records = compact(batch);
    let ids: Vec<i64> = records.iter().map(|person| person.id).collect();
    assert_eq!(ids, vec![1, 3, 5]);
}

#[test]
fn compact_of_all_absent_batch_is_empty() {
    let records = compact(vec![None, None, None]);
    assert!(records.is_empty());
}

#[test]
fn compact_keeps_full_batch_intact() {
    let batch = vec![Some(sample_person(7)), Some(sample_person(8))];
    let records = compact(batch);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, 7);
    assert_eq!(records[1].id, 8);
}

#[test]
fn compact_of_empty_batch_is_empty() {
    assert!(compact(Vec::new()).is_empty());
}
