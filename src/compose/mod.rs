//! Function composition utilities.
//!
//! Small functions composed like Lego bricks: [`pipe!`] feeds a value
//! through functions left-to-right, [`compose!`] builds a new function that
//! applies its arguments right-to-left.
//!
//! ```text
//! pipe!(x, f, g, h) == h(g(f(x)))
//! compose!(h, g, f)(x) == h(g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```
//! use fp_training::compose;
//! use fp_training::compose::not;
//! use fp_training::numeric::is_even;
//!
//! let is_odd = compose!(not, is_even);
//! assert!(is_odd(7));
//! assert!(!is_odd(8));
//! ```
//!
//! ```
//! use fp_training::pipe;
//! use fp_training::compose::if_then_else;
//! use fp_training::numeric::is_even;
//!
//! let value: i64 = 7;
//! let next = pipe!(
//!     value,
//!     is_even,
//!     if_then_else(|| value / 2, || value * 3 + 1)
//! );
//! assert_eq!(next, 22);
//! ```

mod compose_macro;
mod pipe_macro;

/// Boolean negation as a function, so it can be composed.
///
/// # Examples
///
/// ```
/// use fp_training::compose::not;
///
/// assert!(not(false));
/// ```
#[inline]
pub const fn not(value: bool) -> bool {
    !value
}

/// Returns its argument unchanged.
///
/// # Examples
///
/// ```
/// use fp_training::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// The `if`/`else` statement as a function of the condition.
///
/// Only the selected branch is evaluated.
///
/// # Examples
///
/// ```
/// use fp_training::compose::if_then_else;
///
/// let choose = if_then_else(|| "yes", || "no");
/// assert_eq!(choose(true), "yes");
/// assert_eq!(choose(false), "no");
/// ```
pub fn if_then_else<A, T, F>(on_true: T, on_false: F) -> impl Fn(bool) -> A
where
    T: Fn() -> A,
    F: Fn() -> A,
{
    move |condition| if condition { on_true() } else { on_false() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{collatz_step, collatz_step_three, is_even, is_odd};

    #[test]
    fn test_composed_is_odd_matches_numeric() {
        let composed = crate::compose!(not, is_even);
        for value in -10..10 {
            assert_eq!(composed(value), is_odd(value));
        }
    }

    #[test]
    fn test_composed_collatz_three_steps() {
        let three_steps = crate::compose!(collatz_step, collatz_step, collatz_step);
        for value in [12, 10, 8, 27] {
            assert_eq!(three_steps(value), collatz_step_three(value));
        }
    }

    #[test]
    fn test_if_then_else_is_lazy() {
        let choose = if_then_else(|| 1, || unreachable!("false branch evaluated"));
        assert_eq!(choose(true), 1);
    }
}
