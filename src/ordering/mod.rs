//! Ordering - composable comparators and stable sorting.
//!
//! [`Order<T>`] describes how to order values of `T`. Orders are built
//! from a primitive order ([`Order::natural`]) and reshaped with
//! combinators:
//!
//! - [`Order::reverse`]: the opposite order
//! - [`Order::option`]: lifts an order to `Option<T>`, `None` first
//! - [`Order::map_input`] / [`Order::contramap`]: orders a record by one field
//! - [`Order::then`] and the [`Semigroup`](crate::typeclass::Semigroup) /
//!   [`Monoid`](crate::typeclass::Monoid) instances: tie-breaking chains
//!
//! [`sort`] and [`sort_by`] never touch their input and are stable.
//!
//! # Examples
//!
//! ```rust
//! use fp_training::ordering::{sort, Order};
//!
//! let descending = Order::<i64>::natural().reverse();
//! assert_eq!(sort(&[1337, 42, 5701], &descending), vec![5701, 1337, 42]);
//! ```

mod order;
mod person;

pub use order::{Order, sort, sort_by};
pub use person::{
    Person, sort_numbers, sort_numbers_descending, sort_optional_numbers,
    sort_persons_by_age, sort_persons_by_age_then_name, sort_persons_by_name, sort_strings,
};
