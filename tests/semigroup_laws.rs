//! Property-based tests for Semigroup associativity and Monoid identity.

use preludium::data::{Datum, Either, These};
use preludium::typeclass::{Max, Min, Monoid, Product, Semigroup, Sum};
use proptest::prelude::*;

fn datum_strategy() -> impl Strategy<Value = Datum<Vec<i32>>> {
    prop_oneof![
        Just(Datum::Initial),
        Just(Datum::Pending),
        prop::collection::vec(any::<i32>(), 0..4).prop_map(Datum::Refresh),
        prop::collection::vec(any::<i32>(), 0..4).prop_map(Datum::Replete),
    ]
}

fn either_strategy() -> impl Strategy<Value = Either<String, Vec<i32>>> {
    prop_oneof![
        ".{0,4}".prop_map(Either::Left),
        prop::collection::vec(any::<i32>(), 0..4).prop_map(Either::Right),
    ]
}

fn these_strategy() -> impl Strategy<Value = These<String, Vec<i32>>> {
    prop_oneof![
        ".{0,4}".prop_map(These::Left),
        prop::collection::vec(any::<i32>(), 0..4).prop_map(These::Right),
        (".{0,4}", prop::collection::vec(any::<i32>(), 0..4))
            .prop_map(|(l, r)| These::Both(l, r)),
    ]
}

// =============================================================================
// Associativity
// =============================================================================

proptest! {
    #[test]
    fn prop_string_associativity(a in ".{0,8}", b in ".{0,8}", c in ".{0,8}") {
        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_vec_associativity(
        a in prop::collection::vec(any::<i32>(), 0..8),
        b in prop::collection::vec(any::<i32>(), 0..8),
        c in prop::collection::vec(any::<i32>(), 0..8),
    ) {
        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_datum_associativity(a in datum_strategy(), b in datum_strategy(), c in datum_strategy()) {
        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_either_associativity(a in either_strategy(), b in either_strategy(), c in either_strategy()) {
        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_these_associativity(a in these_strategy(), b in these_strategy(), c in these_strategy()) {
        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        prop_assert_eq!(left, right);
    }

    // Narrow ranges keep the arithmetic away from overflow, which is
    // not the property under test.
    #[test]
    fn prop_sum_and_product_associativity(a in -1000_i64..1000, b in -1000_i64..1000, c in -1000_i64..1000) {
        let left = Sum::new(a).combine(Sum::new(b)).combine(Sum::new(c));
        let right = Sum::new(a).combine(Sum::new(b).combine(Sum::new(c)));
        prop_assert_eq!(left, right);

        let left = Product::new(a).combine(Product::new(b)).combine(Product::new(c));
        let right = Product::new(a).combine(Product::new(b).combine(Product::new(c)));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Monoid identity
// =============================================================================

proptest! {
    #[test]
    fn prop_string_identity(value in ".{0,8}") {
        prop_assert_eq!(String::empty().combine(value.clone()), value.clone());
        prop_assert_eq!(value.clone().combine(String::empty()), value);
    }

    #[test]
    fn prop_datum_identity(value in datum_strategy()) {
        let empty: Datum<Vec<i32>> = Monoid::empty();
        prop_assert_eq!(empty.clone().combine(value.clone()), value.clone());
        prop_assert_eq!(value.clone().combine(empty), value);
    }

    #[test]
    fn prop_min_max_identity(value in any::<i32>()) {
        prop_assert_eq!(Min::<i32>::empty().combine(Min::new(value)), Min::new(value));
        prop_assert_eq!(Max::<i32>::empty().combine(Max::new(value)), Max::new(value));
    }
}

// =============================================================================
// Fixed scenarios
// =============================================================================

#[test]
fn sum_wrapping_overflow_is_out_of_scope_for_small_inputs() {
    let total = Sum::combine_all([1_i64, 2, 3, 4].map(Sum::new));
    assert_eq!(total, Sum::new(10));
}

#[test]
fn either_combine_keeps_the_first_left() {
    let first: Either<&str, String> = Either::Left("first");
    let second: Either<&str, String> = Either::Left("second");
    assert_eq!(first.combine(second), Either::Left("first"));
}
