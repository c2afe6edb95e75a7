//! Const container - a fixed carrier with a phantom value type.
//!
//! `Const<E, A>` stores only an `E`; the `A` parameter exists purely at
//! the type level. Mapping over it is a no-op on the carrier, which
//! makes `Const` the standard trick for threading a fixed value through
//! code written against the capability traits - accumulating through
//! the carrier's [`Monoid`] instead of computing anything from `A`.
//!
//! # Examples
//!
//! ```rust
//! use preludium::data::Const;
//! use preludium::typeclass::{Applicative, Functor};
//!
//! let tagged: Const<String, i32> = Const::new("length".to_string());
//! let remapped: Const<String, bool> = tagged.fmap(|n| n > 0);
//! assert_eq!(remapped.get(), "length");
//! ```

use std::marker::PhantomData;

use crate::typeclass::{Applicative, Functor, Kind, Monoid, Semigroup};

/// A carrier value with a phantom second parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Const<E, A> {
    value: E,
    marker: PhantomData<A>,
}

impl<E, A> Const<E, A> {
    /// Wraps a carrier value.
    #[inline]
    pub const fn new(value: E) -> Self {
        Self {
            value,
            marker: PhantomData,
        }
    }

    /// Borrows the carrier.
    #[inline]
    pub const fn get(&self) -> &E {
        &self.value
    }

    /// Unwraps the carrier.
    #[inline]
    pub fn into_inner(self) -> E {
        self.value
    }

    /// Reinterprets the phantom parameter without touching the carrier.
    #[inline]
    pub fn retag<B>(self) -> Const<E, B> {
        Const::new(self.value)
    }
}

impl<E, A> Kind for Const<E, A> {
    type Inner = A;
    type Of<B> = Const<E, B>;
}

impl<E, A> Functor for Const<E, A> {
    /// The function is never called; only the phantom changes.
    #[inline]
    fn fmap<B, F>(self, _function: F) -> Const<E, B>
    where
        F: FnMut(A) -> B,
    {
        self.retag()
    }
}

impl<E: Monoid, A> Applicative for Const<E, A> {
    #[inline]
    fn pure<B>(_value: B) -> Const<E, B> {
        Const::new(E::empty())
    }

    /// Carriers combine; the function is never called.
    #[inline]
    fn map2<B, C, F>(self, other: Const<E, B>, _function: F) -> Const<E, C>
    where
        A: Clone,
        B: Clone,
        F: FnMut(A, B) -> C,
    {
        Const::new(self.value.combine(other.value))
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Const<E, B>,
        third: Const<E, C>,
        _function: F,
    ) -> Const<E, D>
    where
        A: Clone,
        B: Clone,
        C: Clone,
        F: FnMut(A, B, C) -> D,
    {
        Const::new(self.value.combine(second.value).combine(third.value))
    }
}

impl<E: Semigroup, A> Semigroup for Const<E, A> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        Self::new(self.value.combine(other.value))
    }
}

impl<E: Monoid, A> Monoid for Const<E, A> {
    #[inline]
    fn empty() -> Self {
        Self::new(E::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn fmap_never_touches_the_carrier() {
        let tagged: Const<String, i32> = Const::new("keep".to_string());
        let remapped: Const<String, bool> = tagged.fmap(|_| unreachable!());
        assert_eq!(remapped.get(), "keep");
    }

    #[rstest]
    fn pure_produces_the_monoid_identity() {
        let lifted: Const<String, i32> = <Const<String, i32> as Applicative>::pure(42);
        assert_eq!(lifted.get(), "");
    }

    #[rstest]
    fn map2_combines_carriers() {
        let left: Const<String, i32> = Const::new("a".to_string());
        let right: Const<String, i32> = Const::new("b".to_string());
        let combined: Const<String, i32> = left.map2(right, |a, b| a + b);
        assert_eq!(combined.get(), "ab");
    }

    #[rstest]
    fn sequencing_const_accumulates_without_values() {
        let first: Const<Vec<&str>, i32> = Const::new(vec!["f"]);
        let second: Const<Vec<&str>, &str> = Const::new(vec!["s"]);
        let sequenced = crate::typeclass::sequence2(first, second);
        assert_eq!(sequenced.get(), &vec!["f", "s"]);
    }
}
