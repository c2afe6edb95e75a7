//! Property-based tests for the isomorphism round-trip laws.
//!
//! For any iso: `review(view(s)) == s` and `view(review(a)) == a`.

use preludium::iso::Iso;
use preludium::newtype;
use proptest::prelude::*;

newtype! {
    /// A user identifier.
    pub struct UserId(u64);
}

newtype! {
    /// An opaque session token.
    pub struct Token(String);
}

proptest! {
    #[test]
    fn prop_newtype_round_trips_both_ways(value in any::<u64>()) {
        let iso = UserId::iso();
        prop_assert_eq!(iso.review(iso.view(UserId(value))), UserId(value));
        prop_assert_eq!(iso.view(iso.review(value)), value);
    }

    #[test]
    fn prop_string_newtype_round_trips(value in ".{0,16}") {
        let iso = Token::iso();
        prop_assert_eq!(iso.review(iso.view(Token(value.clone()))), Token(value.clone()));
        prop_assert_eq!(iso.view(iso.review(value.clone())), value);
    }

    #[test]
    fn prop_reverse_swaps_the_round_trip(value in any::<u64>()) {
        let reversed = UserId::iso().reverse();
        prop_assert_eq!(reversed.review(reversed.view(value)), value);
    }

    #[test]
    fn prop_composed_isos_still_round_trip(value in any::<u64>()) {
        // UserId <-> u64 <-> offset u64; both legs are lossless.
        let shifted = Iso::new(|n: u64| n.wrapping_add(1), |n: u64| n.wrapping_sub(1));
        let chained = UserId::iso().compose(shifted);
        prop_assert_eq!(chained.review(chained.view(UserId(value))), UserId(value));
    }

    #[test]
    fn prop_modify_applies_through_the_iso(value in any::<u64>()) {
        let bumped = UserId::iso().modify(UserId(value), |n| n.wrapping_add(1));
        prop_assert_eq!(bumped, UserId(value.wrapping_add(1)));
    }
}
