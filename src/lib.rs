//! # fp-training
//!
//! Functional programming drills for Rust.
//!
//! ## Overview
//!
//! Every module is a small set of independent, side-effect-free helpers that
//! exercise one functional idiom:
//!
//! - **Numeric**: parity, Collatz stepping, division that cannot panic
//! - **Composition**: `pipe!` and `compose!` macros
//! - **Type Classes**: `Semigroup`, `Monoid` and the `First`/`Last`/`Sum` wrappers
//! - **Ordering**: composable comparators (`Order<T>`) and stable sorting
//! - **Combat**: `Option`/`Result` chaining over a tiny game model
//! - **Collections**: set and map construction with explicit collision rules
//! - **Effect**: `Reader` based injection, async division and traversal
//! - **Users**: injected services driving asynchronous fallible use-cases
//!
//! ## Feature Flags
//!
//! - `typeclass`: `Semigroup`, `Monoid` and wrappers
//! - `compose`: composition macros and helpers
//! - `ordering`: `Order<T>` and sorting helpers
//! - `combat`: the combat drills
//! - `collection`: set and map helpers
//! - `effect`: `Reader` and localized greetings
//! - `async`: async division, traversal strategies, country lookups and user use-cases
//! - `serde`: `Serialize`/`Deserialize` on plain data types
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fp_training::numeric::{safe_divide, safe_divide_with_error, DivisionByZeroError};
//!
//! assert_eq!(safe_divide(25.0, 5.0), Some(5.0));
//! assert_eq!(safe_divide(25.0, 0.0), None);
//! assert_eq!(safe_divide_with_error(25.0, 0.0), Err(DivisionByZeroError));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use fp_training::prelude::*;
/// ```
pub mod prelude {
    pub use crate::numeric::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "ordering")]
    pub use crate::ordering::*;

    #[cfg(feature = "combat")]
    pub use crate::combat::*;

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;

    #[cfg(feature = "async")]
    pub use crate::users::*;
}

pub mod config;
pub mod numeric;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "ordering")]
pub mod ordering;

#[cfg(feature = "combat")]
pub mod combat;

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "async")]
pub mod users;
