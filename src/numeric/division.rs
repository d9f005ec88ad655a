//! Division with the zero divisor made explicit.

use thiserror::Error;

/// The divisor of a division was zero.
///
/// # Examples
///
/// ```rust
/// use fp_training::numeric::DivisionByZeroError;
///
/// assert_eq!(DivisionByZeroError.to_string(), "Error: Division by zero");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Error)]
#[error("Error: Division by zero")]
pub struct DivisionByZeroError;

/// Plain IEEE 754 division.
///
/// Dividing by zero yields an infinity (or `NaN` for `0 / 0`).
///
/// # Examples
///
/// ```rust
/// use fp_training::numeric::divide;
///
/// assert_eq!(divide(25.0, 5.0), 5.0);
/// assert_eq!(divide(25.0, 0.0), f64::INFINITY);
/// assert_eq!(divide(-25.0, 0.0), f64::NEG_INFINITY);
/// ```
#[inline]
pub fn divide(dividend: f64, divisor: f64) -> f64 {
    dividend / divisor
}

/// Divides `dividend` by `divisor`, returning `None` when `divisor` is zero.
///
/// Both `0.0` and `-0.0` count as zero.
///
/// # Examples
///
/// ```rust
/// use fp_training::numeric::safe_divide;
///
/// assert_eq!(safe_divide(25.0, 5.0), Some(5.0));
/// assert_eq!(safe_divide(25.0, 0.0), None);
/// ```
#[inline]
#[allow(clippy::float_cmp)]
pub fn safe_divide(dividend: f64, divisor: f64) -> Option<f64> {
    (divisor != 0.0).then(|| divide(dividend, divisor))
}

/// Divides `dividend` by `divisor`, failing with [`DivisionByZeroError`]
/// when `divisor` is zero.
///
/// This is [`safe_divide`] with the absence turned into a typed error.
///
/// # Errors
///
/// Returns [`DivisionByZeroError`] if `divisor` is zero.
///
/// # Examples
///
/// ```rust
/// use fp_training::numeric::{safe_divide_with_error, DivisionByZeroError};
///
/// assert_eq!(safe_divide_with_error(25.0, 5.0), Ok(5.0));
/// assert_eq!(safe_divide_with_error(25.0, 0.0), Err(DivisionByZeroError));
/// ```
#[inline]
pub fn safe_divide_with_error(dividend: f64, divisor: f64) -> Result<f64, DivisionByZeroError> {
    safe_divide(dividend, divisor).ok_or(DivisionByZeroError)
}

static_assertions::assert_impl_all!(DivisionByZeroError: Send, Sync, std::error::Error);
