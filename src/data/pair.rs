//! Pair container - a value with an accumulating second component.
//!
//! `Pair<A, B>` is a two-slot product whose capability instances act on
//! the *first* slot; the second rides along. When the second component
//! is a [`Monoid`] the pair sequences writer-style: each step's second
//! component is combined onto the running log.
//!
//! # Examples
//!
//! ```rust
//! use preludium::data::Pair;
//! use preludium::typeclass::Monad;
//!
//! let step = |n: i32| Pair::new(n * 2, vec![format!("doubled {n}")]);
//! let run = Pair::new(3, Vec::new()).flat_map(step).flat_map(step);
//! assert_eq!(run.first(), &12);
//! assert_eq!(run.second().len(), 2);
//! ```

use crate::typeclass::{Applicative, Foldable, Functor, Kind, Monad, Monoid, Semigroup};

/// A product of two values, mapped over its first component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pair<A, B>(pub A, pub B);

impl<A, B> Pair<A, B> {
    /// Builds a pair.
    #[inline]
    pub const fn new(first: A, second: B) -> Self {
        Self(first, second)
    }

    /// The first component.
    #[inline]
    pub const fn first(&self) -> &A {
        &self.0
    }

    /// The second component.
    #[inline]
    pub const fn second(&self) -> &B {
        &self.1
    }

    /// Splits the pair into a tuple.
    #[inline]
    pub fn into_tuple(self) -> (A, B) {
        (self.0, self.1)
    }

    /// Swaps the components.
    #[inline]
    pub fn swap(self) -> Pair<B, A> {
        Pair(self.1, self.0)
    }

    /// Transforms the second component.
    #[inline]
    pub fn map_second<C, F>(self, function: F) -> Pair<A, C>
    where
        F: FnOnce(B) -> C,
    {
        Pair(self.0, function(self.1))
    }

    /// Transforms both components at once.
    #[inline]
    pub fn bimap<C, D, F, G>(self, on_first: F, on_second: G) -> Pair<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D,
    {
        Pair(on_first(self.0), on_second(self.1))
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    #[inline]
    fn from((first, second): (A, B)) -> Self {
        Self(first, second)
    }
}

impl<A, B> From<Pair<A, B>> for (A, B) {
    #[inline]
    fn from(pair: Pair<A, B>) -> Self {
        pair.into_tuple()
    }
}

impl<A, B> Kind for Pair<A, B> {
    type Inner = A;
    type Of<C> = Pair<C, B>;
}

impl<A, B> Functor for Pair<A, B> {
    #[inline]
    fn fmap<C, F>(self, mut function: F) -> Pair<C, B>
    where
        F: FnMut(A) -> C,
    {
        Pair(function(self.0), self.1)
    }
}

impl<A, B: Monoid> Applicative for Pair<A, B> {
    #[inline]
    fn pure<C>(value: C) -> Pair<C, B> {
        Pair(value, B::empty())
    }

    /// Firsts combine through the function; seconds combine through
    /// their monoid, left to right.
    #[inline]
    fn map2<C, D, F>(self, other: Pair<C, B>, mut function: F) -> Pair<D, B>
    where
        A: Clone,
        C: Clone,
        F: FnMut(A, C) -> D,
    {
        Pair(function(self.0, other.0), self.1.combine(other.1))
    }

    #[inline]
    fn map3<C, D, E, F>(self, second: Pair<C, B>, third: Pair<D, B>, mut function: F) -> Pair<E, B>
    where
        A: Clone,
        C: Clone,
        D: Clone,
        F: FnMut(A, C, D) -> E,
    {
        Pair(
            function(self.0, second.0, third.0),
            self.1.combine(second.1).combine(third.1),
        )
    }
}

impl<A, B: Monoid> Monad for Pair<A, B> {
    #[inline]
    fn flat_map<C, F>(self, mut function: F) -> Pair<C, B>
    where
        F: FnMut(A) -> Pair<C, B>,
    {
        let Pair(next, log) = function(self.0);
        Pair(next, self.1.combine(log))
    }
}

impl<A, B> Foldable for Pair<A, B> {
    #[inline]
    fn fold_left<C, F>(self, initial: C, mut function: F) -> C
    where
        F: FnMut(C, A) -> C,
    {
        function(initial, self.0)
    }
}

impl<A: Semigroup, B: Semigroup> Semigroup for Pair<A, B> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        Pair(self.0.combine(other.0), self.1.combine(other.1))
    }
}

impl<A: Monoid, B: Monoid> Monoid for Pair<A, B> {
    #[inline]
    fn empty() -> Self {
        Pair(A::empty(), B::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    type Logged = Pair<i32, Vec<&'static str>>;

    #[rstest]
    fn fmap_touches_only_the_first_component() {
        let pair: Logged = Pair::new(2, vec!["log"]);
        assert_eq!(pair.fmap(|n| n + 1), Pair::new(3, vec!["log"]));
    }

    #[rstest]
    fn flat_map_threads_the_log() {
        let run: Logged = Pair::new(3, vec!["start"])
            .flat_map(|n| Pair::new(n * 2, vec!["doubled"]))
            .flat_map(|n| Pair::new(n + 1, vec!["bumped"]));
        assert_eq!(run, Pair::new(7, vec!["start", "doubled", "bumped"]));
    }

    #[rstest]
    fn pure_starts_with_an_empty_log() {
        let lifted: Logged = <Logged as Applicative>::pure(5);
        assert_eq!(lifted, Pair::new(5, Vec::new()));
    }

    #[rstest]
    fn map2_combines_logs_left_to_right() {
        let left: Logged = Pair::new(1, vec!["a"]);
        let right: Logged = Pair::new(2, vec!["b"]);
        assert_eq!(left.map2(right, |a, b| a + b), Pair::new(3, vec!["a", "b"]));
    }

    #[rstest]
    fn tuple_round_trips() {
        let pair = Pair::from((1, "x"));
        assert_eq!(pair.into_tuple(), (1, "x"));
        assert_eq!(Pair::new(1, "x").swap(), Pair::new("x", 1));
    }

    #[rstest]
    fn bimap_touches_both_components() {
        let mapped = Pair::new(1, "x").bimap(|n| n + 1, str::len);
        assert_eq!(mapped, Pair::new(2, 1));
    }
}
