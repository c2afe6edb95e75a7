//! Identity container - a value with no added effect.
//!
//! `Identity<A>` wraps a value and nothing else. It is the trivial
//! instance of the whole capability stack, useful as a base case for
//! generic code and in tests.

use crate::typeclass::{Applicative, Foldable, Functor, Kind, Monad, Monoid, Semigroup};

/// A container adding no effect to its value.
///
/// # Examples
///
/// ```rust
/// use preludium::data::Identity;
/// use preludium::typeclass::Functor;
///
/// let doubled = Identity::new(21).fmap(|n| n * 2);
/// assert_eq!(doubled.into_inner(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Wraps a value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Unwraps the value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> From<A> for Identity<A> {
    #[inline]
    fn from(value: A) -> Self {
        Self(value)
    }
}

impl<A> Kind for Identity<A> {
    type Inner = A;
    type Of<B> = Identity<B>;
}

impl<A> Functor for Identity<A> {
    #[inline]
    fn fmap<B, F>(self, mut function: F) -> Identity<B>
    where
        F: FnMut(A) -> B,
    {
        Identity(function(self.0))
    }
}

impl<A> Applicative for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B> {
        Identity(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Identity<B>, mut function: F) -> Identity<C>
    where
        A: Clone,
        B: Clone,
        F: FnMut(A, B) -> C,
    {
        Identity(function(self.0, other.0))
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Identity<B>,
        third: Identity<C>,
        mut function: F,
    ) -> Identity<D>
    where
        A: Clone,
        B: Clone,
        C: Clone,
        F: FnMut(A, B, C) -> D,
    {
        Identity(function(self.0, second.0, third.0))
    }
}

impl<A> Monad for Identity<A> {
    #[inline]
    fn flat_map<B, F>(self, mut function: F) -> Identity<B>
    where
        F: FnMut(A) -> Identity<B>,
    {
        function(self.0)
    }
}

impl<A> Foldable for Identity<A> {
    #[inline]
    fn fold_left<B, F>(self, initial: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        function(initial, self.0)
    }
}

impl<A: Semigroup> Semigroup for Identity<A> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        Identity(self.0.combine(other.0))
    }
}

impl<A: Monoid> Monoid for Identity<A> {
    #[inline]
    fn empty() -> Self {
        Identity(A::empty())
    }
}
