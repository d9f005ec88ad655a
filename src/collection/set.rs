use std::collections::HashSet;
use std::hash::Hash;

use crate::ordering::Order;

/// Collects `items` into a set, dropping duplicates.
///
/// # Examples
///
/// ```rust
/// use fp_training::collection::to_set;
///
/// let set = to_set([3, 1, 3, 2, 1]);
/// assert_eq!(set.len(), 3);
/// ```
pub fn to_set<T, I>(items: I) -> HashSet<T>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    items.into_iter().collect()
}

/// Materializes a set as a sequence sorted by `order`.
///
/// Two calls on the same set with the same order give the same sequence.
/// When `order` is a total order over the elements, the output only depends
/// on the set's contents.
///
/// # Complexity
///
/// O(n log n)
///
/// # Examples
///
/// ```rust
/// use fp_training::collection::{to_set, to_sorted_vec};
/// use fp_training::ordering::Order;
///
/// let set = to_set([3, 1, 3, 2, 1]);
/// assert_eq!(to_sorted_vec(&set, &Order::natural()), vec![1, 2, 3]);
/// ```
pub fn to_sorted_vec<T: Clone>(set: &HashSet<T>, order: &Order<T>) -> Vec<T> {
    let mut elements: Vec<&T> = set.iter().collect();
    elements.sort_by(|left, right| order.compare(left, right));
    elements.into_iter().cloned().collect()
}

/// Elements of `left` that are not in `right`.
///
/// Operand order matters: `set_difference(a, b)` is generally not
/// `set_difference(b, a)`.
///
/// # Complexity
///
/// O(n) where n = `left.len()`
pub fn set_difference<T: Eq + Hash + Clone>(left: &HashSet<T>, right: &HashSet<T>) -> HashSet<T> {
    left.difference(right).cloned().collect()
}

/// Elements present in both sets.
///
/// # Complexity
///
/// O(min(n, m))
///
/// # Examples
///
/// ```rust
/// use fp_training::collection::{set_intersection, to_set};
///
/// let odds = to_set([1, 3, 5, 7, 9]);
/// let primes = to_set([2, 3, 5, 7]);
/// assert_eq!(set_intersection(&odds, &primes), to_set([3, 5, 7]));
/// ```
pub fn set_intersection<T: Eq + Hash + Clone>(left: &HashSet<T>, right: &HashSet<T>) -> HashSet<T> {
    let (smaller, larger) = if left.len() <= right.len() {
        (left, right)
    } else {
        (right, left)
    };

    smaller
        .iter()
        .filter(|element| larger.contains(*element))
        .cloned()
        .collect()
}

/// Elements present in either set.
pub fn set_union<T: Eq + Hash + Clone>(left: &HashSet<T>, right: &HashSet<T>) -> HashSet<T> {
    left.union(right).cloned().collect()
}
