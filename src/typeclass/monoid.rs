//! Monoid type class - a semigroup with an identity element.
//!
//! A `Monoid` adds an `empty` value to [`Semigroup`]: combining with
//! `empty` on either side changes nothing. This is what makes folding
//! an arbitrary (possibly empty) collection of values well-defined.
//!
//! # Laws
//!
//! - **Left Identity**: `M::empty().combine(x) == x`
//! - **Right Identity**: `x.combine(M::empty()) == x`
//!
//! # Examples
//!
//! ```rust
//! use preludium::typeclass::{Monoid, Semigroup};
//!
//! let value = String::from("hello");
//! assert_eq!(String::empty().combine(value.clone()), value);
//!
//! let total = Vec::combine_all(vec![vec![1], vec![2, 3], vec![]]);
//! assert_eq!(total, vec![1, 2, 3]);
//! ```

use std::collections::BTreeMap;

use super::semigroup::Semigroup;

/// A type class for semigroups with an identity element.
///
/// # Laws
///
/// `M::empty().combine(x) == x` and `x.combine(M::empty()) == x`.
pub trait Monoid: Semigroup {
    /// The identity element for `combine`.
    fn empty() -> Self;

    /// Combines every value of an iterator, starting from `empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use preludium::typeclass::Monoid;
    ///
    /// let joined = String::combine_all(["a", "b", "c"].map(String::from));
    /// assert_eq!(joined, "abc");
    /// ```
    #[inline]
    fn combine_all<I>(items: I) -> Self
    where
        Self: Sized,
        I: IntoIterator<Item = Self>,
    {
        items.into_iter().fold(Self::empty(), Semigroup::combine)
    }
}

impl Monoid for String {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }
}

impl Monoid for () {
    #[inline]
    fn empty() -> Self {}
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    #[inline]
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}

impl<A: Monoid, B: Monoid, C: Monoid> Monoid for (A, B, C) {
    #[inline]
    fn empty() -> Self {
        (A::empty(), B::empty(), C::empty())
    }
}

impl<A: Semigroup> Monoid for Option<A> {
    #[inline]
    fn empty() -> Self {
        None
    }
}

impl<K: Ord, V: Semigroup> Monoid for BTreeMap<K, V> {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }
}
