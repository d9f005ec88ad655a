//! Left-to-right application of a value through functions.

/// Pipes a value through functions left-to-right.
///
/// `pipe!(x, f, g)` evaluates to `g(f(x))`; `pipe!(x)` is `x`.
///
/// # Examples
///
/// ```
/// use fp_training::pipe;
///
/// let trimmed_length = pipe!("  hello ", str::trim, str::len);
/// assert_eq!(trimmed_length, 5);
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };

    ($value:expr, $function:expr $(, $remaining_functions:expr)* $(,)?) => {
        $crate::pipe!(($function)($value) $(, $remaining_functions)*)
    };
}
