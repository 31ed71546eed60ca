#![cfg(feature = "collection")]
//! Tests for the iteration primitives.
//!
//! Tests cover:
//! - each over sequences and mappings
//! - map, pluck, fold, reduce
//! - filter, reject, uniq
//! - contains, every, some, index_of
//! - first, first_n, last, last_n, is_array_like

use collection_utils::collection::*;
use rstest::rstest;
use std::collections::{BTreeMap, HashMap};

// =============================================================================
// each
// =============================================================================

#[rstest]
fn each_iterates_sequence_with_index_and_collection() {
    let animals = vec!["ant", "bat", "cat"];
    let mut iterations = Vec::new();

    each(&animals, |animal, position, collection| {
        iterations.push((*animal, position.index().unwrap(), collection.len()));
    });

    assert_eq!(
        iterations,
        vec![("ant", 0, 3), ("bat", 1, 3), ("cat", 2, 3)]
    );
}

#[rstest]
fn each_iterates_mapping_with_key() {
    let letters = BTreeMap::from([("d", "dog"), ("e", "elephant"), ("f", "flotsam")]);
    let mut iterations = Vec::new();

    each(&letters, |value, position, collection| {
        iterations.push((*value, *position.key().unwrap(), collection.len()));
    });

    assert_eq!(
        iterations,
        vec![("dog", "d", 3), ("elephant", "e", 3), ("flotsam", "f", 3)]
    );
}

#[rstest]
fn each_does_not_iterate_missing_indices_of_empty_sequence() {
    let mut calls = 0;
    each(&[0u8; 0], |_, _, _| calls += 1);
    assert_eq!(calls, 0);
}

// =============================================================================
// map and pluck
// =============================================================================

#[rstest]
#[case(vec![1, 2, 3], vec![2, 4, 6])]
#[case(vec![], vec![])]
#[case(vec![-5], vec![-10])]
fn map_doubles(#[case] input: Vec<i32>, #[case] expected: Vec<i32>) {
    assert_eq!(map(&input, |value, _, _| value * 2), expected);
}

#[rstest]
fn map_over_mapping_produces_sequence() {
    let prices = BTreeMap::from([("a", 1), ("b", 2)]);
    let mut doubled = map(&prices, |price, _, _| price * 2);
    doubled.sort_unstable();
    assert_eq!(doubled, vec![2, 4]);
}

#[rstest]
fn map_does_not_mutate_input() {
    let numbers = vec![1, 2, 3];
    let _ = map(&numbers, |value, _, _| value + 1);
    assert_eq!(numbers, vec![1, 2, 3]);
}

#[rstest]
fn pluck_extracts_field_from_maps() {
    let people = vec![
        HashMap::from([("name", "moe"), ("age", "30")]),
        HashMap::from([("name", "curly"), ("age", "50")]),
    ];
    assert_eq!(pluck(&people, "name"), vec![Some(&"moe"), Some(&"curly")]);
}

#[rstest]
fn pluck_reports_missing_field_as_none() {
    let records = vec![
        BTreeMap::from([("id".to_string(), 1)]),
        BTreeMap::from([("other".to_string(), 2)]),
    ];
    assert_eq!(pluck(&records, "id"), vec![Some(&1), None]);
}

#[cfg(feature = "serde")]
#[rstest]
fn pluck_over_json_objects() {
    use serde_json::json;

    let people = json!([
        { "name": "moe", "age": 30 },
        { "name": "curly", "age": 50 },
        { "name": "shemp" },
    ]);
    let ages = pluck(&people, "age");
    assert_eq!(ages, vec![Some(&json!(30)), Some(&json!(50)), None]);
}

// =============================================================================
// fold and reduce
// =============================================================================

#[rstest]
fn reduce_sums_without_initial_value() {
    let sum = reduce(&[1, 2, 3], |total, value, _, _| total + value, None::<i32>);
    assert_eq!(sum, Some(6));
}

#[rstest]
fn reduce_uses_initial_value() {
    let sum = reduce(&[1, 2, 3], |total, value, _, _| total + value, Some(10));
    assert_eq!(sum, Some(16));
}

#[rstest]
fn reduce_passes_position_and_collection() {
    let numbers = [1, 2, 3];
    let weighted = reduce(
        &numbers,
        |total, value, position, collection| {
            total + value * position.index().unwrap() as i32 + collection.len() as i32
        },
        Some(0),
    );
    // 1*0 + 3 + 2*1 + 3 + 3*2 + 3
    assert_eq!(weighted, Some(17));
}

#[rstest]
fn fold_passes_position_and_collection() {
    let letters = ["x", "y"];
    let trace = fold(
        &letters,
        Vec::new(),
        |mut trace: Vec<String>, letter, position, collection| {
            trace.push(format!("{letter}@{}/{}", position.index().unwrap(), collection.len()));
            trace
        },
    );
    assert_eq!(trace, vec!["x@0/2".to_string(), "y@1/2".to_string()]);
}

#[rstest]
fn reduce_empty_without_initial_value_is_none() {
    let empty: Vec<String> = Vec::new();
    let joined = reduce(
        &empty,
        |joined: String, word, _, _| joined + word,
        None,
    );
    assert_eq!(joined, None);
}

#[rstest]
fn reduce_single_element_without_initial_value_skips_callback() {
    let mut calls = 0;
    let result = reduce(
        &[42],
        |total, value, _, _| {
            calls += 1;
            total + value
        },
        None::<i32>,
    );
    assert_eq!(result, Some(42));
    assert_eq!(calls, 0);
}

#[rstest]
fn reduce_over_mapping_values() {
    let stock = HashMap::from([("apples", 3), ("pears", 4)]);
    let total = reduce(&stock, |total, count, _, _| total + count, Some(0));
    assert_eq!(total, Some(7));
}

#[rstest]
fn fold_into_accumulator_of_another_type() {
    let lengths = fold(&["a", "bb", "ccc"], 0usize, |total, word, _, _| total + word.len());
    assert_eq!(lengths, 6);
}

#[rstest]
fn fold_builds_string_in_order() {
    let words = ["a", "b", "c"];
    let joined = fold(&words, String::new(), |joined, word, _, _| joined + word);
    assert_eq!(joined, "abc");
}

// =============================================================================
// filter, reject, uniq
// =============================================================================

#[rstest]
fn filter_returns_accepted_elements_in_order() {
    let evens = filter(&[1, 2, 3, 4, 5, 6], |value| value % 2 == 0);
    assert_eq!(evens, vec![&2, &4, &6]);
}

#[rstest]
fn filter_over_mapping_values() {
    let scores = BTreeMap::from([("a", 10), ("b", 55), ("c", 70)]);
    let passing = filter(&scores, |score| *score >= 50);
    assert_eq!(passing, vec![&55, &70]);
}

#[rstest]
fn reject_returns_rejected_elements_in_order() {
    let odds = reject(&[1, 2, 3, 4, 5, 6], |value| value % 2 == 0);
    assert_eq!(odds, vec![&1, &3, &5]);
}

#[rstest]
#[case(vec![1, 2, 2, 3, 4, 4], vec![1, 2, 3, 4])]
#[case(vec![1, 1, 1], vec![1])]
#[case(vec![], vec![])]
#[case(vec![3, 1, 3, 2, 1], vec![3, 1, 2])]
fn uniq_keeps_first_occurrence(#[case] input: Vec<i32>, #[case] expected: Vec<i32>) {
    let unique: Vec<i32> = uniq(&input).into_iter().copied().collect();
    assert_eq!(unique, expected);
}

#[cfg(feature = "serde")]
#[rstest]
fn uniq_json_keeps_number_and_string_apart() {
    use serde_json::json;

    let values = json!([1, "1", 1, "1"]);
    assert_eq!(uniq(&values), vec![&json!(1), &json!("1")]);
}

// =============================================================================
// contains, every, some
// =============================================================================

#[rstest]
#[case(4, true)]
#[case(5, false)]
fn contains_in_sequence(#[case] target: i32, #[case] expected: bool) {
    assert_eq!(contains(&[1, 2, 3, 4], &target), expected);
}

#[rstest]
fn contains_in_mapping_values() {
    let mapping = HashMap::from([("a", 4), ("b", 5), ("c", 6)]);
    assert!(contains(&mapping, &5));
    assert!(!contains(&mapping, &7));
}

#[rstest]
#[case(vec![], true)]
#[case(vec![true, true], true)]
#[case(vec![true, false], false)]
#[case(vec![false, false], false)]
fn every_identity_predicate(#[case] input: Vec<bool>, #[case] expected: bool) {
    assert_eq!(every(&input, |flag| *flag), expected);
}

#[rstest]
#[case(vec![], false)]
#[case(vec![false, false], false)]
#[case(vec![false, true], true)]
#[case(vec![true, true], true)]
fn some_identity_predicate(#[case] input: Vec<bool>, #[case] expected: bool) {
    assert_eq!(some(&input, |flag| *flag), expected);
}

#[rstest]
fn every_and_some_on_empty_mapping() {
    let empty: HashMap<String, i32> = HashMap::new();
    assert!(every(&empty, |_| false));
    assert!(!some(&empty, |_| true));
}

// =============================================================================
// index_of, first, last
// =============================================================================

#[rstest]
#[case(&[10, 20, 30, 40], 40, 0, Some(3))]
#[case(&[10, 20, 30, 40], 35, 0, None)]
#[case(&[1, 2, 3, 2], 2, 0, Some(1))]
#[case(&[1, 2, 3, 2], 2, 2, Some(3))]
#[case(&[1, 2, 3, 2], 2, 4, None)]
fn index_of_cases(
    #[case] sequence: &[i32],
    #[case] target: i32,
    #[case] from_index: usize,
    #[case] expected: Option<usize>,
) {
    assert_eq!(index_of(sequence, &target, from_index), expected);
}

#[rstest]
fn first_and_last_single_elements() {
    let numbers = [1, 2, 3];
    assert_eq!(first(&numbers), Some(&1));
    assert_eq!(last(&numbers), Some(&3));
}

#[rstest]
#[case(0, &[])]
#[case(2, &[1, 2])]
#[case(5, &[1, 2, 3])]
fn first_n_cases(#[case] count: usize, #[case] expected: &[i32]) {
    assert_eq!(first_n(&[1, 2, 3], count), expected);
}

#[rstest]
#[case(0, &[])]
#[case(2, &[2, 3])]
#[case(5, &[1, 2, 3])]
fn last_n_cases(#[case] count: usize, #[case] expected: &[i32]) {
    assert_eq!(last_n(&[1, 2, 3], count), expected);
}

#[rstest]
fn first_and_last_of_empty() {
    let empty: [i32; 0] = [];
    assert_eq!(first(&empty), None);
    assert_eq!(last(&empty), None);
    assert!(first_n(&empty, 3).is_empty());
    assert!(last_n(&empty, 3).is_empty());
}

// =============================================================================
// is_array_like
// =============================================================================

#[rstest]
fn is_array_like_for_sequences_and_mappings() {
    assert!(is_array_like(&[1, 2, 3]));
    assert!(is_array_like(&vec!["a"]));
    assert!(!is_array_like(&HashMap::<String, i32>::new()));
    assert!(!is_array_like(&BTreeMap::from([("length", 1)])));
}

#[cfg(feature = "serde")]
#[rstest]
fn is_array_like_for_json() {
    use serde_json::json;

    assert!(is_array_like(&json!([])));
    assert!(!is_array_like(&json!({ "length": 0 })));
    assert!(!is_array_like(&json!("string")));
}
