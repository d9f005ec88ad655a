//! Type classes used as collision-resolution rules.
//!
//! When two values meet (two map entries under the same key, two comparators
//! chained together, two page-view counters) something must decide how they
//! combine. That decision is a [`Semigroup`]; when there is also a neutral
//! starting value it is a [`Monoid`].
//!
//! The newtype wrappers pick a rule for a type that has several sensible
//! ones:
//!
//! - [`First`]: keep the value seen first
//! - [`Last`]: keep the value seen last
//! - [`Sum`]: add the values
//!
//! # Examples
//!
//! ```rust
//! use fp_training::typeclass::{Last, Monoid, Semigroup, Sum};
//!
//! assert_eq!(Last("Bob").combine(Last("Robert")), Last("Robert"));
//! assert_eq!(Sum::combine_all(vec![Sum(5), Sum(10)]), Sum(15));
//! assert_eq!(String::from("Bob").combine(String::from("Robert")), "BobRobert");
//! ```

mod monoid;
mod semigroup;
mod wrappers;

pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{First, Last, Sum};
