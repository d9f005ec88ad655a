//! Numeric helpers: parity, Collatz stepping and division that cannot panic.
//!
//! These are the leaves every other drill builds on. Nothing in here
//! allocates or fails loudly: a zero divisor is represented as `None` or as
//! a [`DivisionByZeroError`] value, never as a panic.
//!
//! # Examples
//!
//! ```rust
//! use fp_training::numeric::{collatz_step_three, is_odd, safe_divide};
//!
//! assert!(is_odd(7));
//! assert_eq!(collatz_step_three(12), 10);
//! assert_eq!(safe_divide(-25.0, 0.0), None);
//! ```

mod collatz;
mod division;

pub use collatz::{collatz_sequence, collatz_step, collatz_step_three};
pub use division::{DivisionByZeroError, divide, safe_divide, safe_divide_with_error};

/// Returns `true` if `value` is even.
///
/// # Examples
///
/// ```rust
/// use fp_training::numeric::is_even;
///
/// assert!(is_even(42));
/// assert!(is_even(0));
/// assert!(!is_even(-3));
/// ```
#[inline]
pub const fn is_even(value: i64) -> bool {
    value % 2 == 0
}

/// Returns `true` if `value` is odd.
///
/// Always the negation of [`is_even`], including for negative numbers.
///
/// # Examples
///
/// ```rust
/// use fp_training::numeric::is_odd;
///
/// assert!(is_odd(-3));
/// assert!(!is_odd(10));
/// ```
#[inline]
pub const fn is_odd(value: i64) -> bool {
    !is_even(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_even() {
        assert!(is_even(2));
        assert!(is_even(-4));
        assert!(!is_even(1));
        assert!(!is_even(i64::MAX));
        assert!(is_even(i64::MIN));
    }

    #[test]
    fn test_is_odd_negates_is_even() {
        for value in -20..20 {
            assert_eq!(is_odd(value), !is_even(value));
        }
    }
}
