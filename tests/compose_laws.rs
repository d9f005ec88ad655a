#![cfg(feature = "compose")]
//! Property-based tests for composition.
//!
//! - **Pipe**: `pipe!(x, f, g) == g(f(x))`
//! - **Compose**: `compose!(f, g)(x) == f(g(x))`
//! - **Consistency**: `pipe!(x, f, g) == compose!(g, f)(x)`
//! - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`

use fp_training::compose::{identity, if_then_else, not};
use fp_training::numeric::{collatz_step, collatz_step_three, is_even, is_odd};
use fp_training::{compose, pipe};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_pipe_applies_left_to_right(x in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(3);

        prop_assert_eq!(pipe!(x, function1, function2), function2(function1(x)));
    }

    #[test]
    fn prop_compose_applies_right_to_left(x in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(3);

        let composed = compose!(function1, function2);

        prop_assert_eq!(composed(x), function1(function2(x)));
    }

    #[test]
    fn prop_pipe_consistent_with_compose(x in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_sub(7);
        let function2 = |n: i32| n.wrapping_mul(2);

        let composed = compose!(function2, function1);

        prop_assert_eq!(pipe!(x, function1, function2), composed(x));
    }

    #[test]
    fn prop_compose_identity(x in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(2);

        let left = compose!(identity, function);
        let right = compose!(function, identity);

        prop_assert_eq!(left(x), function(x));
        prop_assert_eq!(right(x), function(x));
    }

    #[test]
    fn prop_compose_associativity(x in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);
        let function3 = |n: i32| n.wrapping_sub(3);

        let inner_right = compose!(function2, function3);
        let left_associative = compose!(function1, inner_right);
        let inner_left = compose!(function1, function2);
        let right_associative = compose!(inner_left, function3);

        prop_assert_eq!(left_associative(x), right_associative(x));
    }

    #[test]
    fn prop_not_is_even_is_odd(x in any::<i64>()) {
        let composed = compose!(not, is_even);
        prop_assert_eq!(composed(x), is_odd(x));
        prop_assert_eq!(pipe!(x, is_even, not), is_odd(x));
    }

    #[test]
    fn prop_three_collatz_steps(x in 0u64..1_000_000) {
        prop_assert_eq!(pipe!(x, collatz_step, collatz_step, collatz_step), collatz_step_three(x));
    }

    #[test]
    fn prop_if_then_else_selects_branch(condition in any::<bool>()) {
        let choose = if_then_else(|| "yes", || "no");
        prop_assert_eq!(choose(condition), if condition { "yes" } else { "no" });
    }
}
