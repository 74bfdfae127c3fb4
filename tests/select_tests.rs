//! Integration tests for selection and predicate combinators.

#![cfg(feature = "collection")]

use lowbar::collection::{
    all_truthy, any_truthy, contains, every, filter, index_of, reject, some, uniq,
};
use rstest::rstest;
use std::cell::Cell;
use std::collections::HashMap;

// =============================================================================
// filter / reject
// =============================================================================

#[rstest]
fn filter_keeps_matching_elements_in_order() {
    let numbers = vec![6, 1, 5, 2, 4, 3];
    assert_eq!(filter(&numbers, |n| *n >= 4), vec![6, 5, 4]);
}

#[rstest]
fn reject_is_the_complement_of_filter() {
    let numbers = vec![1, 2, 3, 4, 5, 6];
    let kept = filter(&numbers, |n| n % 3 == 0);
    let dropped = reject(&numbers, |n| n % 3 == 0);
    assert_eq!(kept, vec![3, 6]);
    assert_eq!(dropped, vec![1, 2, 4, 5]);
    assert_eq!(kept.len() + dropped.len(), numbers.len());
}

#[rstest]
fn filter_works_over_mappings() {
    let ages = HashMap::from([("ada", 36), ("alan", 41), ("grace", 85)]);
    let mut over_forty = filter(&ages, |age| *age > 40);
    over_forty.sort_unstable();
    assert_eq!(over_forty, vec![41, 85]);
}

// =============================================================================
// every / some / truthiness defaults
// =============================================================================

#[rstest]
#[case(vec![2, 4, 6], true)]
#[case(vec![2, 5, 6], false)]
#[case(vec![], true)]
fn every_over_cases(#[case] values: Vec<i32>, #[case] expected: bool) {
    assert_eq!(every(&values, |n| n % 2 == 0), expected);
}

#[rstest]
#[case(vec![1, 3, 6], true)]
#[case(vec![1, 3, 5], false)]
#[case(vec![], false)]
fn some_over_cases(#[case] values: Vec<i32>, #[case] expected: bool) {
    assert_eq!(some(&values, |n| n % 2 == 0), expected);
}

#[rstest]
fn every_consults_the_predicate_until_settled() {
    let visits = Cell::new(0);
    let numbers = vec![1, 2, 3, 4];
    let holds = every(&numbers, |n| {
        visits.set(visits.get() + 1);
        *n < 3
    });
    assert!(!holds);
    // Settled at the third element; the fold still walks all four but
    // stops consulting the predicate.
    assert_eq!(visits.get(), 3);
}

#[rstest]
fn some_consults_the_predicate_until_settled() {
    let visits = Cell::new(0);
    let numbers = vec![1, 2, 3, 4];
    let found = some(&numbers, |n| {
        visits.set(visits.get() + 1);
        *n == 2
    });
    assert!(found);
    assert_eq!(visits.get(), 2);
}

#[rstest]
fn truthiness_is_the_default_predicate() {
    assert!(all_truthy(&vec![1, 2, 3]));
    assert!(!all_truthy(&vec![1, 0, 3]));
    assert!(any_truthy(&vec!["", "", "x"]));
    assert!(!any_truthy(&vec![Option::<i32>::None, None]));
}

// =============================================================================
// contains / index_of
// =============================================================================

#[rstest]
fn contains_over_both_shapes() {
    assert!(contains(&vec![1, 2, 3], &2));
    assert!(!contains(&vec![1, 2, 3], &9));

    let mapping = HashMap::from([("k", "v")]);
    assert!(contains(&mapping, &"v"));
}

#[rstest]
fn index_of_reports_first_match() {
    let values = [40, 10, 40, 20];
    assert_eq!(index_of(&values, &40), Some(0));
    assert_eq!(index_of(&values, &20), Some(3));
    assert_eq!(index_of(&values, &99), None);
}

// =============================================================================
// uniq
// =============================================================================

#[rstest]
fn uniq_preserves_first_occurrences() {
    assert_eq!(uniq(&vec![1, 2, 1, 3, 2, 4]), vec![1, 2, 3, 4]);
}

#[rstest]
fn uniq_of_all_distinct_is_identity() {
    assert_eq!(uniq(&vec!["a", "b", "c"]), vec!["a", "b", "c"]);
}

#[rstest]
fn uniq_collides_on_equal_string_representations() {
    // 1 the integer and 1.0 the float cannot share a Vec, but values
    // that render identically do collide; that caveat is the contract.
    let values = vec!["10".to_string(), 10.to_string()];
    assert_eq!(uniq(&values), vec!["10".to_string()]);
}
