#![cfg(feature = "ordering")]
//! Tests for predicate sorting and reference-order re-sequencing.

use proptest::prelude::*;
use rstest::rstest;
use slicekit::ordering::{max_of, min_of, order_by_reference, order_in_place, sort, sort_by_less};

// =============================================================================
// Test Structures
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
struct Ticket {
    queue: &'static str,
    number: u32,
}

fn ticket(queue: &'static str, number: u32) -> Ticket {
    Ticket { queue, number }
}

// =============================================================================
// Sorting
// =============================================================================

#[rstest]
fn test_sort_by_less_is_stable() {
    let mut tickets = vec![ticket("b", 1), ticket("a", 2), ticket("b", 3), ticket("a", 4)];
    sort_by_less(&mut tickets, |left, right| left.queue < right.queue);
    let numbers: Vec<u32> = tickets.iter().map(|entry| entry.number).collect();
    assert_eq!(numbers, vec![2, 4, 1, 3]);
}

#[rstest]
#[case::ascending(true, vec![1.5, 2.0, 3.25])]
#[case::descending(false, vec![3.25, 2.0, 1.5])]
fn test_sort_floats(#[case] ascending: bool, #[case] expected: Vec<f64>) {
    let mut values = vec![2.0, 3.25, 1.5];
    sort(&mut values, ascending);
    assert_eq!(values, expected);
}

#[rstest]
fn test_sort_returns_slice_for_chaining() {
    let mut words = ["pear", "apple"];
    assert_eq!(sort(&mut words, true).first(), Some(&"apple"));
}

#[rstest]
#[case::empty(vec![], None, None)]
#[case::single(vec![7], Some(7), Some(7))]
#[case::mixed(vec![4, -2, 9, -2], Some(-2), Some(9))]
fn test_min_max(#[case] values: Vec<i32>, #[case] minimum: Option<i32>, #[case] maximum: Option<i32>) {
    assert_eq!(min_of(&values), minimum);
    assert_eq!(max_of(&values), maximum);
}

// =============================================================================
// Re-sequencing
// =============================================================================

#[rstest]
fn test_order_by_reference_groups_by_key() {
    let tickets = vec![ticket("ops", 1), ticket("dev", 2), ticket("ops", 3), ticket("qa", 4)];
    let ordered = order_by_reference(&["dev", "ops"], &tickets, |entry| entry.queue);
    assert_eq!(
        ordered,
        vec![ticket("dev", 2), ticket("ops", 1), ticket("ops", 3), ticket("qa", 4)]
    );
}

#[rstest]
fn test_order_by_reference_unknown_keys_keep_first_appearance() {
    let ordered = order_by_reference(&[3], &[5, 4, 3, 5, 4], |value| *value);
    assert_eq!(ordered, vec![3, 5, 5, 4, 4]);
}

#[rstest]
fn test_order_by_reference_repeated_reference_key() {
    let ordered = order_by_reference(&[2, 1, 2], &[1, 2, 2], |value| *value);
    assert_eq!(ordered, vec![2, 2, 1]);
}

#[rstest]
#[case::empty_reference(vec![], vec![3, 1, 2])]
#[case::reference_without_matches(vec![9, 8], vec![3, 1, 2])]
fn test_order_by_reference_passthrough(#[case] reference: Vec<i32>, #[case] expected: Vec<i32>) {
    assert_eq!(order_by_reference(&reference, &[3, 1, 2], |value| *value), expected);
}

#[rstest]
fn test_order_in_place_moves_values() {
    let mut names = vec![String::from("b1"), String::from("a1"), String::from("b2")];
    let ordered = order_in_place(&['a', 'b'], &mut names, |name| {
        name.chars().next().unwrap_or_default()
    });
    assert_eq!(ordered, ["a1", "b1", "b2"]);
}

// =============================================================================
// Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_order_by_reference_is_permutation(
        reference in prop::collection::vec(0..8_u8, 0..10),
        items in prop::collection::vec(0..8_u8, 0..40)
    ) {
        let mut ordered = order_by_reference(&reference, &items, |value| *value);
        let mut original = items.clone();
        ordered.sort_unstable();
        original.sort_unstable();
        prop_assert_eq!(ordered, original);
    }
}

proptest! {
    #[test]
    fn prop_sort_ascending_is_sorted(values in prop::collection::vec(any::<i32>(), 0..60)) {
        let mut sorted = values.clone();
        sort(&mut sorted, true);
        prop_assert!(sorted.windows(2).all(|pair| pair[0] <= pair[1]));
    }
}

proptest! {
    #[test]
    fn prop_min_max_bound_every_value(values in prop::collection::vec(any::<i32>(), 1..60)) {
        let minimum = min_of(&values).unwrap();
        let maximum = max_of(&values).unwrap();
        prop_assert!(values.iter().all(|value| minimum <= *value && *value <= maximum));
    }
}
