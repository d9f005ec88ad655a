//! Right-to-left function composition.

/// Composes functions right-to-left.
///
/// `compose!(f, g, h)` builds `move |x| f(g(h(x)))`. A single function is
/// returned as is.
///
/// # Examples
///
/// ```
/// use fp_training::compose;
///
/// let add_one = |x: u64| x + 1;
/// let double = |x: u64| x * 2;
///
/// let composed = compose!(add_one, double);
/// assert_eq!(composed(5), 11);
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr) => {
        $function
    };

    ($outer_function:expr, $($inner_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner = $crate::compose!($($inner_functions),+);
        move |input| outer(inner(input))
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_compose_single() {
        let negate = |x: i64| -x;
        let composed = compose!(negate);
        assert_eq!(composed(4), -4);
    }

    #[test]
    fn test_compose_applies_rightmost_first() {
        let halve = |x: u64| x / 2;
        let increment = |x: u64| x + 1;
        let composed = compose!(halve, increment);
        assert_eq!(composed(9), 5);
    }

    #[test]
    fn test_compose_trailing_comma() {
        let to_string = |x: u8| x.to_string();
        let square = |x: u8| x * x;
        let composed = compose!(to_string, square,);
        assert_eq!(composed(3), "9");
    }
}
