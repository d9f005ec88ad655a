//! Newtype wrappers selecting a combination rule.

/// Combines by addition.
///
/// # Examples
///
/// ```rust
/// use fp_training::typeclass::{Semigroup, Sum};
///
/// assert_eq!(Sum(5).combine(Sum(10)), Sum(15));
/// assert_eq!(Sum(7).into_inner(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum<A>(pub A);

/// Keeps the value that was combined first.
///
/// # Examples
///
/// ```rust
/// use fp_training::typeclass::{First, Semigroup};
///
/// assert_eq!(First("Bob").combine(First("Robert")), First("Bob"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct First<A>(pub A);

/// Keeps the value that was combined last.
///
/// # Examples
///
/// ```rust
/// use fp_training::typeclass::{Last, Semigroup};
///
/// assert_eq!(Last("Bob").combine(Last("Robert")), Last("Robert"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Last<A>(pub A);

macro_rules! impl_wrapper {
    ($wrapper:ident) => {
        impl<A> $wrapper<A> {
            /// Wraps a value.
            #[inline]
            pub const fn new(value: A) -> Self {
                Self(value)
            }

            /// Consumes the wrapper and returns the inner value.
            #[inline]
            pub fn into_inner(self) -> A {
                self.0
            }

            /// Returns a reference to the inner value.
            #[inline]
            pub const fn as_inner(&self) -> &A {
                &self.0
            }
        }

        impl<A> From<A> for $wrapper<A> {
            fn from(value: A) -> Self {
                Self::new(value)
            }
        }
    };
}

impl_wrapper!(Sum);
impl_wrapper!(First);
impl_wrapper!(Last);
