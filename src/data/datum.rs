//! Datum container - the lifecycle of an asynchronously loaded value.
//!
//! `Datum<A>` has four states: nothing has happened ([`Initial`]), a
//! load is in flight ([`Pending`]), a value has arrived ([`Replete`]),
//! and a value is being reloaded while the previous one is still shown
//! ([`Refresh`]). `Replete` and `Refresh` are the *valued* states;
//! `Pending` and `Refresh` are the *loading* states.
//!
//! Combination follows an explicit precedence: values combine where
//! both sides carry one, and loading dominates the display state, so
//! combining `Replete(a)` with `Pending` yields `Refresh(a)` — the
//! value is preserved, the in-flight load is remembered.
//!
//! [`Initial`]: Datum::Initial
//! [`Pending`]: Datum::Pending
//! [`Replete`]: Datum::Replete
//! [`Refresh`]: Datum::Refresh
//!
//! # Examples
//!
//! ```rust
//! use preludium::data::Datum;
//! use preludium::typeclass::Semigroup;
//!
//! let shown = Datum::Replete(vec![1]);
//! let reloading = Datum::Pending;
//! assert_eq!(shown.combine(reloading), Datum::Refresh(vec![1]));
//! ```

use crate::typeclass::{
    Alternative, Applicative, Foldable, Functor, Kind, Monad, Monoid, Semigroup,
};

use super::either::Either;

/// A four-state container for values that load over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Datum<A> {
    /// No load has been requested yet.
    #[default]
    Initial,
    /// A load is in flight and no value has ever arrived.
    Pending,
    /// A value is being reloaded; the previous value is still available.
    Refresh(A),
    /// A value has arrived and is current.
    Replete(A),
}

impl<A> Datum<A> {
    /// Returns `true` for `Initial`.
    #[inline]
    pub const fn is_initial(&self) -> bool {
        matches!(self, Self::Initial)
    }

    /// Returns `true` for `Pending`.
    #[inline]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Returns `true` for `Refresh`.
    #[inline]
    pub const fn is_refresh(&self) -> bool {
        matches!(self, Self::Refresh(_))
    }

    /// Returns `true` for `Replete`.
    #[inline]
    pub const fn is_replete(&self) -> bool {
        matches!(self, Self::Replete(_))
    }

    /// Returns `true` when a value is present (`Replete` or `Refresh`).
    #[inline]
    pub const fn is_valued(&self) -> bool {
        matches!(self, Self::Replete(_) | Self::Refresh(_))
    }

    /// Returns `true` when a load is in flight (`Pending` or `Refresh`).
    #[inline]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Pending | Self::Refresh(_))
    }

    /// Collapses the four states to a single value.
    #[inline]
    pub fn fold<B, I, P, RF, RP>(
        self,
        on_initial: I,
        on_pending: P,
        on_refresh: RF,
        on_replete: RP,
    ) -> B
    where
        I: FnOnce() -> B,
        P: FnOnce() -> B,
        RF: FnOnce(A) -> B,
        RP: FnOnce(A) -> B,
    {
        match self {
            Self::Initial => on_initial(),
            Self::Pending => on_pending(),
            Self::Refresh(value) => on_refresh(value),
            Self::Replete(value) => on_replete(value),
        }
    }

    /// Extracts the value from the valued states.
    #[inline]
    pub fn to_option(self) -> Option<A> {
        match self {
            Self::Refresh(value) | Self::Replete(value) => Some(value),
            Self::Initial | Self::Pending => None,
        }
    }

    /// Returns the value or computes a default.
    #[inline]
    pub fn value_or_else<F>(self, default: F) -> A
    where
        F: FnOnce() -> A,
    {
        self.to_option().unwrap_or_else(default)
    }

    /// Marks the datum as loading again: `Replete` becomes `Refresh`,
    /// `Initial` becomes `Pending`, loading states stay as they are.
    #[inline]
    pub fn to_refreshing(self) -> Self {
        match self {
            Self::Initial | Self::Pending => Self::Pending,
            Self::Refresh(value) | Self::Replete(value) => Self::Refresh(value),
        }
    }

    /// Marks the in-flight load as settled: `Refresh` becomes `Replete`,
    /// `Pending` becomes `Initial`.
    #[inline]
    pub fn to_settled(self) -> Self {
        match self {
            Self::Initial | Self::Pending => Self::Initial,
            Self::Refresh(value) | Self::Replete(value) => Self::Replete(value),
        }
    }
}

impl<A> Kind for Datum<A> {
    type Inner = A;
    type Of<B> = Datum<B>;
}

impl<A> Functor for Datum<A> {
    #[inline]
    fn fmap<B, F>(self, mut function: F) -> Datum<B>
    where
        F: FnMut(A) -> B,
    {
        match self {
            Self::Initial => Datum::Initial,
            Self::Pending => Datum::Pending,
            Self::Refresh(value) => Datum::Refresh(function(value)),
            Self::Replete(value) => Datum::Replete(function(value)),
        }
    }
}

impl<A> Applicative for Datum<A> {
    #[inline]
    fn pure<B>(value: B) -> Datum<B> {
        Datum::Replete(value)
    }

    /// Both sides valued: values combine, `Refresh` if either side is
    /// refreshing. Any side unvalued: no value, `Pending` if either
    /// side is `Pending`, else `Initial`.
    fn map2<B, C, F>(self, other: Datum<B>, mut function: F) -> Datum<C>
    where
        A: Clone,
        B: Clone,
        F: FnMut(A, B) -> C,
    {
        match (self, other) {
            (Self::Replete(a), Datum::Replete(b)) => Datum::Replete(function(a, b)),
            (Self::Refresh(a), Datum::Replete(b) | Datum::Refresh(b))
            | (Self::Replete(a), Datum::Refresh(b)) => Datum::Refresh(function(a, b)),
            (Self::Pending, _) | (_, Datum::Pending) => Datum::Pending,
            _ => Datum::Initial,
        }
    }

    fn map3<B, C, D, F>(self, second: Datum<B>, third: Datum<C>, mut function: F) -> Datum<D>
    where
        A: Clone,
        B: Clone,
        C: Clone,
        F: FnMut(A, B, C) -> D,
    {
        self.map2(second, |a, b| (a, b))
            .map2(third, move |(a, b), c| function(a, b, c))
    }
}

impl<A> Monad for Datum<A> {
    /// Chaining from `Refresh` re-marks the continuation's result as
    /// loading, so an in-flight refresh survives the chain.
    #[inline]
    fn flat_map<B, F>(self, mut function: F) -> Datum<B>
    where
        F: FnMut(A) -> Datum<B>,
    {
        match self {
            Self::Initial => Datum::Initial,
            Self::Pending => Datum::Pending,
            Self::Replete(value) => function(value),
            Self::Refresh(value) => function(value).to_refreshing(),
        }
    }
}

impl<A> Foldable for Datum<A> {
    #[inline]
    fn fold_left<B, F>(self, initial: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Self::Refresh(value) | Self::Replete(value) => function(initial, value),
            Self::Initial | Self::Pending => initial,
        }
    }
}

impl<A> Alternative for Datum<A> {
    #[inline]
    fn empty() -> Self {
        Self::Initial
    }

    /// The first valued side wins; otherwise the more advanced loading
    /// state is kept.
    #[inline]
    fn alt(self, other: Self) -> Self {
        match (self, other) {
            (valued @ (Self::Replete(_) | Self::Refresh(_)), _) => valued,
            (_, valued @ (Self::Replete(_) | Self::Refresh(_))) => valued,
            (Self::Pending, _) | (_, Self::Pending) => Self::Pending,
            _ => Self::Initial,
        }
    }
}

/// `Initial` is the identity; loading dominates the display state, so
/// `Replete(a) + Pending = Refresh(a)`. Two valued sides combine their
/// values and keep the refresh marker if either side carried one.
impl<A: Semigroup> Semigroup for Datum<A> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Initial, that) => that,
            (this, Self::Initial) => this,
            (Self::Pending, Self::Pending) => Self::Pending,
            (Self::Pending, Self::Replete(b) | Self::Refresh(b)) => Self::Refresh(b),
            (Self::Replete(a) | Self::Refresh(a), Self::Pending) => Self::Refresh(a),
            (Self::Replete(a), Self::Replete(b)) => Self::Replete(a.combine(b)),
            (Self::Refresh(a), Self::Replete(b) | Self::Refresh(b))
            | (Self::Replete(a), Self::Refresh(b)) => Self::Refresh(a.combine(b)),
        }
    }
}

impl<A: Semigroup> Monoid for Datum<A> {
    #[inline]
    fn empty() -> Self {
        Self::Initial
    }
}

/// A datum whose value may itself be a failure.
pub type DatumEither<E, A> = Datum<Either<E, A>>;

/// A successfully loaded value: `Replete(Right(value))`.
#[inline]
pub fn success<E, A>(value: A) -> DatumEither<E, A> {
    Datum::Replete(Either::Right(value))
}

/// A loaded failure: `Replete(Left(error))`.
#[inline]
pub fn failure<E, A>(error: E) -> DatumEither<E, A> {
    Datum::Replete(Either::Left(error))
}

/// Returns `true` when a `Right` value is present.
#[inline]
pub fn is_success<E, A>(datum: &DatumEither<E, A>) -> bool {
    matches!(
        datum,
        Datum::Replete(Either::Right(_)) | Datum::Refresh(Either::Right(_))
    )
}

/// Returns `true` when a `Left` error is present.
#[inline]
pub fn is_failure<E, A>(datum: &DatumEither<E, A>) -> bool {
    matches!(
        datum,
        Datum::Replete(Either::Left(_)) | Datum::Refresh(Either::Left(_))
    )
}

/// Transforms the success value, leaving every other state untouched.
#[inline]
pub fn map_success<E, A, B, F>(datum: DatumEither<E, A>, mut function: F) -> DatumEither<E, B>
where
    F: FnMut(A) -> B,
{
    datum.fmap(|either| either.fmap(&mut function))
}

/// Transforms the failure value, leaving every other state untouched.
#[inline]
pub fn map_failure<E, A, M, F>(datum: DatumEither<E, A>, mut function: F) -> DatumEither<M, A>
where
    F: FnMut(E) -> M,
{
    datum.fmap(|either| either.map_left(&mut function))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn fmap_touches_only_valued_states() {
        assert_eq!(Datum::Replete(2).fmap(|n| n + 1), Datum::Replete(3));
        assert_eq!(Datum::Refresh(2).fmap(|n| n + 1), Datum::Refresh(3));
        assert_eq!(Datum::<i32>::Initial.fmap(|n| n + 1), Datum::Initial);
        assert_eq!(Datum::<i32>::Pending.fmap(|n| n + 1), Datum::Pending);
    }

    #[rstest]
    #[case(Datum::Replete(1), Datum::Replete(2), Datum::Replete(3))]
    #[case(Datum::Refresh(1), Datum::Replete(2), Datum::Refresh(3))]
    #[case(Datum::Replete(1), Datum::Refresh(2), Datum::Refresh(3))]
    #[case(Datum::Refresh(1), Datum::Refresh(2), Datum::Refresh(3))]
    #[case(Datum::Pending, Datum::Replete(2), Datum::Pending)]
    #[case(Datum::Refresh(1), Datum::Pending, Datum::Pending)]
    #[case(Datum::Initial, Datum::Replete(2), Datum::Initial)]
    #[case(Datum::Initial, Datum::Pending, Datum::Pending)]
    fn map2_follows_the_precedence_table(
        #[case] left: Datum<i32>,
        #[case] right: Datum<i32>,
        #[case] expected: Datum<i32>,
    ) {
        assert_eq!(left.map2(right, |a, b| a + b), expected);
    }

    #[rstest]
    fn flat_map_preserves_refresh_through_the_chain() {
        let chained = Datum::Refresh(2).flat_map(|n| Datum::Replete(n * 10));
        assert_eq!(chained, Datum::Refresh(20));

        let aborted = Datum::Refresh(2).flat_map(|_| Datum::<i32>::Initial);
        assert_eq!(aborted, Datum::Pending);

        assert_eq!(Datum::Replete(2).flat_map(|n| Datum::Replete(n)), Datum::Replete(2));
        assert_eq!(Datum::<i32>::Pending.flat_map(Datum::Replete), Datum::Pending);
    }

    #[rstest]
    fn combine_preserves_values_under_loading() {
        let shown: Datum<Vec<i32>> = Datum::Refresh(vec![1]);
        assert_eq!(shown.combine(Datum::Pending), Datum::Refresh(vec![1]));

        let replete: Datum<Vec<i32>> = Datum::Replete(vec![1]);
        assert_eq!(replete.combine(Datum::Pending), Datum::Refresh(vec![1]));
    }

    #[rstest]
    fn combine_identity_is_initial() {
        let value: Datum<Vec<i32>> = Datum::Replete(vec![1]);
        assert_eq!(<Datum<Vec<i32>> as Monoid>::empty().combine(value.clone()), value);
        assert_eq!(value.clone().combine(Monoid::empty()), value);
    }

    #[rstest]
    fn combine_merges_two_values() {
        let left: Datum<Vec<i32>> = Datum::Replete(vec![1]);
        let right: Datum<Vec<i32>> = Datum::Replete(vec![2]);
        assert_eq!(left.combine(right), Datum::Replete(vec![1, 2]));

        let refreshing: Datum<Vec<i32>> = Datum::Refresh(vec![1]);
        let settled: Datum<Vec<i32>> = Datum::Replete(vec![2]);
        assert_eq!(refreshing.combine(settled), Datum::Refresh(vec![1, 2]));
    }

    #[rstest]
    fn alt_prefers_the_first_valued_state() {
        assert_eq!(Datum::Replete(1).alt(Datum::Replete(2)), Datum::Replete(1));
        assert_eq!(Datum::Pending.alt(Datum::Replete(2)), Datum::Replete(2));
        assert_eq!(Datum::<i32>::Initial.alt(Datum::Pending), Datum::Pending);
        assert_eq!(Datum::<i32>::Initial.alt(Datum::Initial), Datum::Initial);
    }

    #[rstest]
    fn state_transitions_round_trip() {
        assert_eq!(Datum::Replete(1).to_refreshing(), Datum::Refresh(1));
        assert_eq!(Datum::<i32>::Initial.to_refreshing(), Datum::Pending);
        assert_eq!(Datum::Refresh(1).to_settled(), Datum::Replete(1));
        assert_eq!(Datum::<i32>::Pending.to_settled(), Datum::Initial);
    }

    #[rstest]
    fn datum_either_helpers() {
        let loaded: DatumEither<String, i32> = success(1);
        assert!(is_success(&loaded));
        assert!(!is_failure(&loaded));

        let failed: DatumEither<String, i32> = failure("boom".to_string());
        assert!(is_failure(&failed));

        assert_eq!(map_success(loaded, |n| n + 1), success(2));
        assert_eq!(
            map_failure(failed, |e| e.len()),
            failure::<usize, i32>(4)
        );
    }

    #[rstest]
    fn to_option_extracts_valued_states() {
        assert_eq!(Datum::Replete(1).to_option(), Some(1));
        assert_eq!(Datum::Refresh(1).to_option(), Some(1));
        assert_eq!(Datum::<i32>::Pending.to_option(), None);
        assert_eq!(Datum::<i32>::Initial.value_or_else(|| 9), 9);
    }
}
