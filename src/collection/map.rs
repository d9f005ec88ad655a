use std::collections::HashMap;
use std::hash::Hash;

use crate::ordering::Order;
use crate::typeclass::Semigroup;

/// Builds a map in which the latest pair for a key wins.
///
/// # Examples
///
/// ```rust
/// use fp_training::collection::to_map_keep_last;
///
/// let map = to_map_keep_last([(1, "Bob"), (1, "Robert")]);
/// assert_eq!(map[&1], "Robert");
/// ```
pub fn to_map_keep_last<K, V, I>(pairs: I) -> HashMap<K, V>
where
    K: Eq + Hash,
    I: IntoIterator<Item = (K, V)>,
{
    pairs.into_iter().collect()
}

/// Builds a map in which the earliest pair for a key wins.
pub fn to_map_keep_first<K, V, I>(pairs: I) -> HashMap<K, V>
where
    K: Eq + Hash,
    I: IntoIterator<Item = (K, V)>,
{
    pairs.into_iter().fold(HashMap::new(), |mut map, (key, value)| {
        map.entry(key).or_insert(value);
        map
    })
}

/// Builds a map, resolving collisions with `merge(old, new)`.
///
/// Collisions are folded in input order, so three pairs sharing a key give
/// `merge(merge(first, second), third)`.
///
/// # Examples
///
/// ```rust
/// use fp_training::collection::to_map_merge;
///
/// let map = to_map_merge([("k", 1), ("k", 2), ("k", 3)], |old, new| old * 10 + new);
/// assert_eq!(map["k"], 123);
/// ```
pub fn to_map_merge<K, V, I, F>(pairs: I, mut merge: F) -> HashMap<K, V>
where
    K: Eq + Hash,
    I: IntoIterator<Item = (K, V)>,
    F: FnMut(V, V) -> V,
{
    pairs.into_iter().fold(HashMap::new(), |mut map, (key, value)| {
        let merged = match map.remove(&key) {
            Some(old) => merge(old, value),
            None => value,
        };
        map.insert(key, merged);
        map
    })
}

/// Builds a map, combining colliding values with their [`Semigroup`].
///
/// # Examples
///
/// ```rust
/// use fp_training::collection::to_map_combine;
///
/// let map = to_map_combine([(2, "Bob".to_string()), (2, "Robert".to_string())]);
/// assert_eq!(map[&2], "BobRobert");
/// ```
pub fn to_map_combine<K, V, I>(pairs: I) -> HashMap<K, V>
where
    K: Eq + Hash,
    V: Semigroup,
    I: IntoIterator<Item = (K, V)>,
{
    to_map_merge(pairs, V::combine)
}

/// A map over the keys of both maps.
///
/// A key present in only one map keeps its value. A key present in both is
/// mapped to `combine(value_left, value_right)`.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use fp_training::collection::map_union_with;
///
/// let left = HashMap::from([("home", 5), ("about", 2)]);
/// let right = HashMap::from([("home", 10), ("faq", 5)]);
/// let total = map_union_with(left, right, |a, b| a + b);
///
/// assert_eq!(total, HashMap::from([("home", 15), ("about", 2), ("faq", 5)]));
/// ```
pub fn map_union_with<K, V, F>(left: HashMap<K, V>, right: HashMap<K, V>, mut combine: F) -> HashMap<K, V>
where
    K: Eq + Hash,
    F: FnMut(V, V) -> V,
{
    right.into_iter().fold(left, |mut map, (key, value_right)| {
        let merged = match map.remove(&key) {
            Some(value_left) => combine(value_left, value_right),
            None => value_right,
        };
        map.insert(key, merged);
        map
    })
}

/// A map over the keys present in both maps, mapped to
/// `combine(value_left, value_right)`.
pub fn map_intersection_with<K, V, F>(
    left: HashMap<K, V>,
    mut right: HashMap<K, V>,
    mut combine: F,
) -> HashMap<K, V>
where
    K: Eq + Hash,
    F: FnMut(V, V) -> V,
{
    left.into_iter()
        .filter_map(|(key, value_left)| {
            right
                .remove(&key)
                .map(|value_right| (key, combine(value_left, value_right)))
        })
        .collect()
}

/// The entries of `map`, sorted by key.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use fp_training::collection::to_sorted_entries;
/// use fp_training::ordering::Order;
///
/// let map = HashMap::from([(2, "b"), (1, "a")]);
/// assert_eq!(to_sorted_entries(&map, &Order::natural()), vec![(1, "a"), (2, "b")]);
/// ```
pub fn to_sorted_entries<K: Clone, V: Clone>(map: &HashMap<K, V>, order: &Order<K>) -> Vec<(K, V)> {
    let mut entries: Vec<(&K, &V)> = map.iter().collect();
    entries.sort_by(|(left, _), (right, _)| order.compare(left, right));
    entries
        .into_iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
