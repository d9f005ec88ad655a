#![cfg(feature = "ordering")]
//! Laws and reference cases for `Order<T>` and sorting.
//!
//! - **Idempotence**: `sort(sort(xs, o), o) == sort(xs, o)`
//! - **Reverse**: for pairwise distinct elements, `sort(xs, o.reverse())`
//!   reversed is `sort(xs, o)`
//! - **Stability**: equal elements keep their input order
//! - **Monoid**: `Order::empty()` is neutral for `combine`

use std::cmp::Ordering;
use std::collections::BTreeSet;

use fp_training::ordering::{
    Order, Person, sort, sort_by, sort_numbers, sort_numbers_descending, sort_optional_numbers,
    sort_persons_by_age, sort_persons_by_age_then_name, sort_persons_by_name, sort_strings,
};
use fp_training::typeclass::{Monoid, Semigroup};
use proptest::prelude::*;
use rstest::{fixture, rstest};

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_sort_is_idempotent(items in prop::collection::vec(any::<i32>(), 0..64)) {
        let order = Order::natural();
        let once = sort(&items, &order);
        prop_assert_eq!(sort(&once, &order), once);
    }

    #[test]
    fn prop_sort_matches_std(items in prop::collection::vec(any::<i32>(), 0..64)) {
        let mut expected = items.clone();
        expected.sort_unstable();
        prop_assert_eq!(sort(&items, &Order::natural()), expected);
    }

    #[test]
    fn prop_reverse_sort_is_reversed_sort(distinct in prop::collection::btree_set(any::<i32>(), 0..64)) {
        let items: Vec<i32> = distinct.into_iter().rev().collect();
        let order = Order::<i32>::natural();

        let mut descending = sort(&items, &order.reverse());
        descending.reverse();

        prop_assert_eq!(descending, sort(&items, &order));
    }

    #[test]
    fn prop_sort_is_stable(items in prop::collection::vec((0u8..4, any::<u16>()), 0..64)) {
        let by_key = Order::<u8>::natural().map_input(|pair: &(u8, u16)| &pair.0);
        let sorted = sort(&items, &by_key);

        for key in 0..4 {
            let input_order: Vec<u16> = items.iter().filter(|pair| pair.0 == key).map(|pair| pair.1).collect();
            let output_order: Vec<u16> = sorted.iter().filter(|pair| pair.0 == key).map(|pair| pair.1).collect();
            prop_assert_eq!(input_order, output_order);
        }
    }

    #[test]
    fn prop_empty_order_is_neutral(left in any::<i32>(), right in any::<i32>()) {
        let order = Order::<i32>::natural();
        let combined_left = Order::empty().combine(order.clone());
        let combined_right = order.clone().combine(Order::empty());

        prop_assert_eq!(combined_left.compare(&left, &right), order.compare(&left, &right));
        prop_assert_eq!(combined_right.compare(&left, &right), order.compare(&left, &right));
    }

    #[test]
    fn prop_option_puts_none_first(value in any::<i32>()) {
        let order = Order::<i32>::natural().option();
        prop_assert_eq!(order.compare(&None, &Some(value)), Ordering::Less);
        prop_assert_eq!(order.compare(&Some(value), &None), Ordering::Greater);
        prop_assert_eq!(order.compare(&None, &None), Ordering::Equal);
    }
}

// =============================================================================
// Reference cases
// =============================================================================

#[fixture]
fn persons() -> Vec<Person> {
    vec![
        Person::new("Dorian", Some(29)),
        Person::new("Alice", Some(42)),
        Person::new("Edgar", None),
        Person::new("Bob", None),
        Person::new("Crystal", Some(29)),
    ]
}

fn names(persons: &[Person]) -> Vec<&str> {
    persons.iter().map(|person| person.name.as_str()).collect()
}

#[rstest]
fn test_sort_strings() {
    let strings = ["xyz", "aba", "ori", "aab", "ghl"].map(String::from);
    assert_eq!(sort_strings(&strings), ["aab", "aba", "ghl", "ori", "xyz"]);
}

#[rstest]
fn test_sort_numbers_both_ways() {
    let numbers = [3, -1, 2, 0];
    assert_eq!(sort_numbers(&numbers), vec![-1, 0, 2, 3]);
    assert_eq!(sort_numbers_descending(&numbers), vec![3, 2, 0, -1]);
}

#[rstest]
fn test_sort_optional_numbers() {
    assert_eq!(
        sort_optional_numbers(&[Some(3), None, Some(1), None]),
        vec![None, None, Some(1), Some(3)]
    );
}

#[rstest]
fn test_sort_persons_by_name(persons: Vec<Person>) {
    assert_eq!(
        names(&sort_persons_by_name(&persons)),
        vec!["Alice", "Bob", "Crystal", "Dorian", "Edgar"]
    );
}

#[rstest]
fn test_sort_persons_by_age_is_stable(persons: Vec<Person>) {
    assert_eq!(
        names(&sort_persons_by_age(&persons)),
        vec!["Edgar", "Bob", "Dorian", "Crystal", "Alice"]
    );
}

#[rstest]
fn test_sort_persons_by_age_then_name(persons: Vec<Person>) {
    assert_eq!(
        names(&sort_persons_by_age_then_name(&persons)),
        vec!["Bob", "Edgar", "Crystal", "Dorian", "Alice"]
    );
}

#[rstest]
fn test_sort_by_matches_then(persons: Vec<Person>) {
    let chained = Person::by_age().then(&Person::by_name());
    assert_eq!(
        sort_by(&persons, &[Person::by_age(), Person::by_name()]),
        sort(&persons, &chained)
    );
}

#[rstest]
fn test_sort_by_without_orders_keeps_input(persons: Vec<Person>) {
    assert_eq!(sort_by(&persons, &[]), persons);
}

#[rstest]
fn test_contramap_by_length() {
    let by_length = Order::<usize>::natural().contramap(|text: &&str| text.len());
    let words = ["ccc", "a", "bb"];
    assert_eq!(sort(&words, &by_length), vec!["a", "bb", "ccc"]);
}

#[rstest]
fn test_sorted_output_is_a_permutation() {
    let items = vec![5, 3, 5, 1];
    let sorted = sort(&items, &Order::natural());
    let input: BTreeSet<(usize, i32)> = count_occurrences(&items);
    let output: BTreeSet<(usize, i32)> = count_occurrences(&sorted);
    assert_eq!(input, output);
}

fn count_occurrences(items: &[i32]) -> BTreeSet<(usize, i32)> {
    items
        .iter()
        .map(|item| (items.iter().filter(|other| *other == item).count(), *item))
        .collect()
}
