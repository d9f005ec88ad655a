//! Monoid type class - a semigroup with an identity element.
//!
//! # Laws
//!
//! ```text
//! Monoid::empty().combine(a) == a
//! a.combine(Monoid::empty()) == a
//! ```

use std::ops::Add;

use super::Semigroup;
use super::wrappers::Sum;

/// A [`Semigroup`] with a neutral element.
///
/// # Examples
///
/// ```rust
/// use fp_training::typeclass::{Monoid, Sum};
///
/// assert_eq!(Sum::<u32>::empty(), Sum(0));
/// assert_eq!(String::combine_all(vec!["a".to_string(), "b".to_string()]), "ab");
/// ```
pub trait Monoid: Semigroup + Sized {
    /// Returns the identity element.
    fn empty() -> Self;

    /// Folds every element left-to-right, starting from [`Monoid::empty`].
    ///
    /// An empty iterator yields [`Monoid::empty`].
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        iterator.into_iter().fold(Self::empty(), Self::combine)
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_combine_all_empty_is_identity() {
        assert_eq!(Sum::<i64>::combine_all(Vec::new()), Sum(0));
        assert_eq!(String::combine_all(Vec::new()), "");
        assert_eq!(Vec::<u8>::combine_all(Vec::new()), Vec::<u8>::new());
    }

    #[rstest]
    fn test_combine_all_sums() {
        assert_eq!(Sum::combine_all([Sum(2), Sum(4), Sum(3)]), Sum(9));
    }

    #[rstest]
    fn test_identity_laws_for_string() {
        let value = String::from("Clara");
        assert_eq!(String::empty().combine(value.clone()), value);
        assert_eq!(value.clone().combine(String::empty()), value);
    }
}
