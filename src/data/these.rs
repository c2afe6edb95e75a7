//! These container - one side, the other, or both at once.
//!
//! `These<L, R>` extends [`Either`](super::Either) with a third case,
//! `Both(L, R)`, carrying a value *and* a left-channel annotation. The
//! usual reading is partial failure: a computation produced a result but
//! also warnings. Composition is right-biased; the left channel is
//! accumulated across `Both` steps through its [`Semigroup`], never
//! dropped.
//!
//! # Examples
//!
//! ```rust
//! use preludium::data::These;
//! use preludium::typeclass::Monad;
//!
//! let warned: These<Vec<String>, i32> = These::Both(vec!["stale".into()], 2);
//! let chained = warned.flat_map(|n| These::Both(vec!["slow".into()], n * 10));
//! assert_eq!(
//!     chained,
//!     These::Both(vec!["stale".to_string(), "slow".to_string()], 20)
//! );
//! ```

use crate::typeclass::{Applicative, Foldable, Functor, Kind, Monad, Semigroup};

/// A value that is a `Left(L)`, a `Right(R)`, or both at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum These<L, R> {
    /// Only the left channel.
    Left(L),
    /// Only the right channel.
    Right(R),
    /// Both channels at once.
    Both(L, R),
}

impl<L, R> These<L, R> {
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

    /// Returns `true` for `Both`.
    #[inline]
    pub const fn is_both(&self) -> bool {
        matches!(self, Self::Both(_, _))
    }

    /// Extracts the left channel, if present.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(left) | Self::Both(left, _) => Some(left),
            Self::Right(_) => None,
        }
    }

    /// Extracts the right channel, if present.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Right(right) | Self::Both(_, right) => Some(right),
            Self::Left(_) => None,
        }
    }

    /// Transforms the left channel wherever it appears.
    #[inline]
    pub fn map_left<M, F>(self, mut function: F) -> These<M, R>
    where
        F: FnMut(L) -> M,
    {
        match self {
            Self::Left(left) => These::Left(function(left)),
            Self::Right(right) => These::Right(right),
            Self::Both(left, right) => These::Both(function(left), right),
        }
    }

    /// Transforms both channels at once.
    #[inline]
    pub fn bimap<M, B, F, G>(self, mut on_left: F, mut on_right: G) -> These<M, B>
    where
        F: FnMut(L) -> M,
        G: FnMut(R) -> B,
    {
        match self {
            Self::Left(left) => These::Left(on_left(left)),
            Self::Right(right) => These::Right(on_right(right)),
            Self::Both(left, right) => These::Both(on_left(left), on_right(right)),
        }
    }

    /// Collapses the three cases to a single value.
    #[inline]
    pub fn fold<B, F, G, H>(self, on_left: F, on_right: G, on_both: H) -> B
    where
        F: FnOnce(L) -> B,
        G: FnOnce(R) -> B,
        H: FnOnce(L, R) -> B,
    {
        match self {
            Self::Left(left) => on_left(left),
            Self::Right(right) => on_right(right),
            Self::Both(left, right) => on_both(left, right),
        }
    }

    /// Swaps the channels.
    #[inline]
    pub fn swap(self) -> These<R, L> {
        match self {
            Self::Left(left) => These::Right(left),
            Self::Right(right) => These::Left(right),
            Self::Both(left, right) => These::Both(right, left),
        }
    }
}

impl<L, R> Kind for These<L, R> {
    type Inner = R;
    type Of<B> = These<L, B>;
}

impl<L, R> Functor for These<L, R> {
    #[inline]
    fn fmap<B, F>(self, mut function: F) -> These<L, B>
    where
        F: FnMut(R) -> B,
    {
        match self {
            Self::Left(left) => These::Left(left),
            Self::Right(right) => These::Right(function(right)),
            Self::Both(left, right) => These::Both(left, function(right)),
        }
    }
}

impl<L: Semigroup, R> Applicative for These<L, R> {
    #[inline]
    fn pure<B>(value: B) -> These<L, B> {
        These::Right(value)
    }

    /// Left channels accumulate; a bare `Left` on either side poisons
    /// the value, keeping every annotation seen so far.
    fn map2<B, C, F>(self, other: These<L, B>, mut function: F) -> These<L, C>
    where
        R: Clone,
        B: Clone,
        F: FnMut(R, B) -> C,
    {
        match (self, other) {
            (Self::Right(a), These::Right(b)) => These::Right(function(a, b)),
            (Self::Right(a), These::Both(l, b)) | (Self::Both(l, a), These::Right(b)) => {
                These::Both(l, function(a, b))
            }
            (Self::Both(l1, a), These::Both(l2, b)) => These::Both(l1.combine(l2), function(a, b)),
            (Self::Left(l1), These::Left(l2) | These::Both(l2, _))
            | (Self::Both(l1, _), These::Left(l2)) => These::Left(l1.combine(l2)),
            (Self::Left(l), These::Right(_)) | (Self::Right(_), These::Left(l)) => These::Left(l),
        }
    }

    fn map3<B, C, D, F>(self, second: These<L, B>, third: These<L, C>, mut function: F) -> These<L, D>
    where
        R: Clone,
        B: Clone,
        C: Clone,
        F: FnMut(R, B, C) -> D,
    {
        self.map2(second, |a, b| (a, b))
            .map2(third, move |(a, b), c| function(a, b, c))
    }
}

impl<L: Semigroup, R> Monad for These<L, R> {
    /// Right-biased sequencing; annotations from a `Both` input are
    /// prepended to whatever the continuation produces.
    fn flat_map<B, F>(self, mut function: F) -> These<L, B>
    where
        F: FnMut(R) -> These<L, B>,
    {
        match self {
            Self::Left(left) => These::Left(left),
            Self::Right(right) => function(right),
            Self::Both(left, right) => match function(right) {
                These::Left(l) => These::Left(left.combine(l)),
                These::Right(b) => These::Both(left, b),
                These::Both(l, b) => These::Both(left.combine(l), b),
            },
        }
    }
}

impl<L, R> Foldable for These<L, R> {
    #[inline]
    fn fold_left<B, F>(self, initial: B, mut function: F) -> B
    where
        F: FnMut(B, R) -> B,
    {
        match self {
            Self::Right(right) | Self::Both(_, right) => function(initial, right),
            Self::Left(_) => initial,
        }
    }
}

/// Channels combine pointwise; a one-sided value meets a two-sided one
/// by filling in the missing side.
impl<L: Semigroup, R: Semigroup> Semigroup for These<L, R> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Left(l1), Self::Left(l2)) => Self::Left(l1.combine(l2)),
            (Self::Right(r1), Self::Right(r2)) => Self::Right(r1.combine(r2)),
            (Self::Left(l), Self::Right(r)) | (Self::Right(r), Self::Left(l)) => Self::Both(l, r),
            (Self::Left(l1), Self::Both(l2, r)) => Self::Both(l1.combine(l2), r),
            (Self::Both(l1, r), Self::Left(l2)) => Self::Both(l1.combine(l2), r),
            (Self::Right(r1), Self::Both(l, r2)) => Self::Both(l, r1.combine(r2)),
            (Self::Both(l, r1), Self::Right(r2)) => Self::Both(l, r1.combine(r2)),
            (Self::Both(l1, r1), Self::Both(l2, r2)) => {
                Self::Both(l1.combine(l2), r1.combine(r2))
            }
        }
    }
}
