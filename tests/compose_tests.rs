//! Tests for the composition macros and combinators.

use preludium::compose::{constant, flip, identity};
use preludium::data::Either;
use preludium::{flow, mdo, pipe};
use rstest::rstest;

// =============================================================================
// pipe! and flow!
// =============================================================================

#[rstest]
fn pipe_applies_left_to_right() {
    fn double(x: i32) -> i32 {
        x * 2
    }
    fn add_one(x: i32) -> i32 {
        x + 1
    }

    assert_eq!(pipe!(5, double, add_one), 11);
    assert_eq!(pipe!(5, add_one, double), 12);
    assert_eq!(pipe!(5), 5);
}

#[rstest]
fn flow_builds_a_reusable_pipeline() {
    let pipeline = flow!(|n: i32| n.to_string(), |s: String| s.len());
    assert_eq!(pipeline(7), 1);
    assert_eq!(pipeline(1234), 4);
}

#[rstest]
fn flow_applied_equals_pipe() {
    let square = |x: i32| x * x;
    let negate = |x: i32| -x;
    assert_eq!(flow!(square, negate)(4), pipe!(4, square, negate));
}

#[rstest]
fn identity_is_the_composition_unit() {
    let double = |x: i32| x * 2;
    assert_eq!(flow!(identity, double)(5), double(5));
    assert_eq!(flow!(double, identity)(5), double(5));
}

#[rstest]
fn constant_and_flip_combinators() {
    let always_one = constant::<_, &str>(1);
    assert_eq!(always_one("ignored"), 1);

    let append = |a: String, b: &str| a + b;
    assert_eq!(flip(append)("b", "a".to_string()), "ab");
}

// =============================================================================
// mdo!
// =============================================================================

#[rstest]
fn mdo_sequences_option() {
    let result = mdo! {
        a <= Some(1);
        b <= Some(2);
        let sum = a + b;
        Some(sum * 10)
    };
    assert_eq!(result, Some(30));
}

#[rstest]
fn mdo_short_circuits_on_the_first_failure() {
    let result = mdo! {
        a <= Some(1);
        _ <= None::<i32>;
        Some(a)
    };
    assert_eq!(result, None);

    let failed: Either<String, i32> = mdo! {
        a <= Either::Right(1);
        b <= Either::<String, i32>::Left("broken".to_string());
        Either::Right(a + b)
    };
    assert_eq!(failed, Either::Left("broken".to_string()));
}

#[rstest]
fn mdo_enumerates_vec_combinations_like_a_comprehension() {
    let pairs = mdo! {
        a <= vec![1, 2, 3];
        b <= vec![10, 20];
        vec![(a, b)]
    };
    assert_eq!(pairs.len(), 6);
    assert_eq!(pairs.first(), Some(&(1, 10)));
    assert_eq!(pairs.last(), Some(&(3, 20)));
}

#[rstest]
fn mdo_destructures_tuples() {
    let result = mdo! {
        (a, b) <= Some((2, 3));
        c <= Some(10);
        Some(a * b + c)
    };
    assert_eq!(result, Some(16));
}
