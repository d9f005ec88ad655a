//! Collatz sequence stepping.
//!
//! The rule is `n / 2` for even numbers and `3n + 1` for odd numbers.
//! The domain is `u64`: negative input cannot be expressed, `0` is even and
//! is its own successor, and `3n + 1` saturates at `u64::MAX`.

/// Computes the next number of the Collatz sequence.
///
/// # Examples
///
/// ```rust
/// use fp_training::numeric::collatz_step;
///
/// assert_eq!(collatz_step(12), 6);
/// assert_eq!(collatz_step(3), 10);
/// assert_eq!(collatz_step(0), 0);
/// ```
#[inline]
pub const fn collatz_step(value: u64) -> u64 {
    if value % 2 == 0 {
        value / 2
    } else {
        value.saturating_mul(3).saturating_add(1)
    }
}

/// Computes the number three steps ahead in the Collatz sequence.
///
/// # Examples
///
/// ```rust
/// use fp_training::numeric::collatz_step_three;
///
/// assert_eq!(collatz_step_three(12), 10);
/// assert_eq!(collatz_step_three(10), 8);
/// assert_eq!(collatz_step_three(8), 1);
/// ```
#[inline]
pub const fn collatz_step_three(value: u64) -> u64 {
    collatz_step(collatz_step(collatz_step(value)))
}

/// Returns the Collatz sequence starting at `start`, ending with `1`.
///
/// The sequence for `0` is empty since `0` never reaches `1`. A trajectory
/// that saturates stops at `u64::MAX`.
///
/// # Examples
///
/// ```rust
/// use fp_training::numeric::collatz_sequence;
///
/// let sequence: Vec<u64> = collatz_sequence(6).collect();
/// assert_eq!(sequence, vec![6, 3, 10, 5, 16, 8, 4, 2, 1]);
/// assert_eq!(collatz_sequence(0).count(), 0);
/// ```
pub fn collatz_sequence(start: u64) -> impl Iterator<Item = u64> {
    let first = (start != 0).then_some(start);
    std::iter::successors(first, |&current| {
        (current != 1 && current != u64::MAX).then(|| collatz_step(current))
    })
}
