//! Either container - a disjoint union biased toward its right case.
//!
//! `Either<L, R>` holds a `Left(L)` or a `Right(R)`. Composition
//! (`fmap`, `flat_map`, `map2`) acts on the `Right` case and
//! short-circuits on the first `Left`, which makes `Left` the failure
//! channel by convention. For validation-style error accumulation use
//! [`Either::map2_accumulating`], which combines `Left`s through their
//! [`Semigroup`] instead of stopping at the first one.
//!
//! `Either<L, R>` and `Result<R, L>` carry the same information and
//! convert freely via `From` in both directions.
//!
//! # Examples
//!
//! ```rust
//! use preludium::data::Either;
//! use preludium::typeclass::Monad;
//!
//! let parsed: Either<String, i32> = Either::Right(2);
//! let result = parsed.flat_map(|n| {
//!     if n > 0 {
//!         Either::Right(n * 10)
//!     } else {
//!         Either::Left(String::from("not positive"))
//!     }
//! });
//! assert_eq!(result, Either::Right(20));
//! ```

use crate::typeclass::{Applicative, Foldable, Functor, Kind, Monad, Semigroup};

/// A value that is either a `Left(L)` or a `Right(R)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left case, conventionally the failure channel.
    Left(L),
    /// The right case, conventionally the success channel.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns `true` for `Left`.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` for `Right`.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Extracts the left value, if present.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Extracts the right value, if present.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Transforms the left value, leaving `Right` untouched.
    #[inline]
    pub fn map_left<M, F>(self, function: F) -> Either<M, R>
    where
        F: FnOnce(L) -> M,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Transforms both cases at once.
    #[inline]
    pub fn bimap<M, B, F, G>(self, on_left: F, on_right: G) -> Either<M, B>
    where
        F: FnOnce(L) -> M,
        G: FnOnce(R) -> B,
    {
        match self {
            Self::Left(value) => Either::Left(on_left(value)),
            Self::Right(value) => Either::Right(on_right(value)),
        }
    }

    /// Collapses both cases to a single value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use preludium::data::Either;
    ///
    /// let either: Either<String, i32> = Either::Right(3);
    /// let rendered = either.fold(|e| e, |n| n.to_string());
    /// assert_eq!(rendered, "3");
    /// ```
    #[inline]
    pub fn fold<B, F, G>(self, on_left: F, on_right: G) -> B
    where
        F: FnOnce(L) -> B,
        G: FnOnce(R) -> B,
    {
        match self {
            Self::Left(value) => on_left(value),
            Self::Right(value) => on_right(value),
        }
    }

    /// Swaps the cases.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    /// Returns `self` when `Right`, otherwise `other`.
    #[inline]
    pub fn alt(self, other: Self) -> Self {
        match self {
            Self::Right(value) => Self::Right(value),
            Self::Left(_) => other,
        }
    }

    /// Recovers from a `Left` by running a fallback computation on it.
    #[inline]
    pub fn recover<F>(self, function: F) -> Self
    where
        F: FnOnce(L) -> Self,
    {
        match self {
            Self::Left(value) => function(value),
            Self::Right(value) => Self::Right(value),
        }
    }

    /// Returns the right value or computes a default from the left.
    #[inline]
    pub fn right_or_else<F>(self, function: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        self.fold(function, |value| value)
    }

    /// Converts from `Result`, mapping `Err` to `Left`.
    #[inline]
    pub fn from_result(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }

    /// Converts into `Result`, mapping `Left` to `Err`.
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Self::Left(error) => Err(error),
            Self::Right(value) => Ok(value),
        }
    }

    /// Combines two values, accumulating `Left`s instead of stopping at
    /// the first one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use preludium::data::Either;
    ///
    /// let first: Either<Vec<&str>, i32> = Either::Left(vec!["too small"]);
    /// let second: Either<Vec<&str>, i32> = Either::Left(vec!["not even"]);
    /// let combined = first.map2_accumulating(second, |a, b| a + b);
    /// assert_eq!(combined, Either::Left(vec!["too small", "not even"]));
    /// ```
    #[inline]
    pub fn map2_accumulating<B, C, F>(self, other: Either<L, B>, function: F) -> Either<L, C>
    where
        L: Semigroup,
        F: FnOnce(R, B) -> C,
    {
        match (self, other) {
            (Self::Right(a), Either::Right(b)) => Either::Right(function(a, b)),
            (Self::Left(first), Either::Left(second)) => Either::Left(first.combine(second)),
            (Self::Left(error), Either::Right(_)) => Either::Left(error),
            (Self::Right(_), Either::Left(error)) => Either::Left(error),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        Self::from_result(result)
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        either.into_result()
    }
}

impl<L, R> Kind for Either<L, R> {
    type Inner = R;
    type Of<B> = Either<L, B>;
}

impl<L, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, mut function: F) -> Either<L, B>
    where
        F: FnMut(R) -> B,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }
}

impl<L, R> Applicative for Either<L, R> {
    #[inline]
    fn pure<B>(value: B) -> Either<L, B> {
        Either::Right(value)
    }

    /// Short-circuits on the first `Left`, left to right.
    #[inline]
    fn map2<B, C, F>(self, other: Either<L, B>, mut function: F) -> Either<L, C>
    where
        R: Clone,
        B: Clone,
        F: FnMut(R, B) -> C,
    {
        match (self, other) {
            (Self::Right(a), Either::Right(b)) => Either::Right(function(a, b)),
            (Self::Left(error), _) => Either::Left(error),
            (_, Either::Left(error)) => Either::Left(error),
        }
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Either<L, B>,
        third: Either<L, C>,
        mut function: F,
    ) -> Either<L, D>
    where
        R: Clone,
        B: Clone,
        C: Clone,
        F: FnMut(R, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Right(a), Either::Right(b), Either::Right(c)) => {
                Either::Right(function(a, b, c))
            }
            (Self::Left(error), _, _) => Either::Left(error),
            (_, Either::Left(error), _) | (_, _, Either::Left(error)) => Either::Left(error),
        }
    }
}

impl<L, R> Monad for Either<L, R> {
    #[inline]
    fn flat_map<B, F>(self, mut function: F) -> Either<L, B>
    where
        F: FnMut(R) -> Either<L, B>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }
}

impl<L, R> Foldable for Either<L, R> {
    #[inline]
    fn fold_left<B, F>(self, initial: B, mut function: F) -> B
    where
        F: FnMut(B, R) -> B,
    {
        match self {
            Self::Left(_) => initial,
            Self::Right(value) => function(initial, value),
        }
    }
}

/// The first `Left` wins; two `Right`s combine.
impl<L, R: Semigroup> Semigroup for Either<L, R> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Right(a), Self::Right(b)) => Self::Right(a.combine(b)),
            (Self::Left(error), _) => Self::Left(error),
            (_, Self::Left(error)) => Self::Left(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ok(n: i32) -> Either<String, i32> {
        Either::Right(n)
    }

    fn fail(message: &str) -> Either<String, i32> {
        Either::Left(message.to_string())
    }

    #[rstest]
    fn fmap_acts_on_right_only() {
        assert_eq!(ok(2).fmap(|n| n + 1), ok(3));
        assert_eq!(fail("boom").fmap(|n| n + 1), fail("boom"));
    }

    #[rstest]
    fn flat_map_short_circuits_on_left() {
        assert_eq!(ok(2).flat_map(|n| ok(n * 10)), ok(20));
        assert_eq!(fail("boom").flat_map(|n| ok(n * 10)), fail("boom"));
        assert_eq!(ok(2).flat_map(|_| fail("later")), fail("later"));
    }

    #[rstest]
    fn map2_keeps_the_first_left() {
        assert_eq!(fail("first").map2(fail("second"), |a, b| a + b), fail("first"));
        assert_eq!(ok(1).map2(ok(2), |a, b| a + b), ok(3));
    }

    #[rstest]
    fn map2_accumulating_combines_lefts() {
        let first: Either<String, i32> = fail("first");
        let second: Either<String, i32> = fail("second");
        assert_eq!(
            first.map2_accumulating(second, |a, b| a + b),
            fail("firstsecond")
        );
        assert_eq!(ok(1).map2_accumulating(ok(2), |a, b| a + b), ok(3));
    }

    #[rstest]
    fn alt_and_recover_restore_failures() {
        assert_eq!(fail("boom").alt(ok(5)), ok(5));
        assert_eq!(ok(1).alt(ok(5)), ok(1));
        assert_eq!(fail("boom").recover(|e| ok(e.len() as i32)), ok(4));
    }

    #[rstest]
    fn fold_collapses_both_cases() {
        assert_eq!(ok(3).fold(|_| 0, |n| n), 3);
        assert_eq!(fail("x").fold(|e| e.len() as i32, |n| n), 1);
    }

    #[rstest]
    fn swap_exchanges_the_cases() {
        assert_eq!(ok(1).swap(), Either::Left(1));
        assert_eq!(fail("e").swap(), Either::Right("e".to_string()));
    }

    #[rstest]
    fn result_round_trips() {
        let either: Either<String, i32> = Result::Ok(1).into();
        assert_eq!(either, ok(1));
        let back: Result<i32, String> = either.into();
        assert_eq!(back, Ok(1));
    }

    #[rstest]
    fn combine_prefers_the_first_left() {
        let left: Either<&str, String> = Either::Left("first");
        let other: Either<&str, String> = Either::Left("second");
        assert_eq!(left.combine(other), Either::Left("first"));

        let a: Either<&str, String> = Either::Right("a".to_string());
        let b: Either<&str, String> = Either::Right("b".to_string());
        assert_eq!(a.combine(b), Either::Right("ab".to_string()));
    }

    #[rstest]
    fn sequencing_stops_at_the_first_left() {
        let sequenced = crate::typeclass::sequence3(ok(1), ok(2), fail("third"));
        assert_eq!(sequenced, Either::Left("third".to_string()));
    }
}
