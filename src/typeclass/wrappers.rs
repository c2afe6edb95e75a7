//! Numeric wrappers selecting a monoid for primitive types.
//!
//! A number carries several lawful monoids (addition, multiplication,
//! minimum, maximum), so the plain primitives implement none of them.
//! These wrappers pick one each: [`Sum`], [`Product`], [`Min`], [`Max`].
//!
//! # Examples
//!
//! ```rust
//! use preludium::typeclass::{Monoid, Sum, Max};
//!
//! let total = Sum::combine_all([1, 2, 3].map(Sum::new));
//! assert_eq!(total, Sum::new(6));
//!
//! let largest = Max::combine_all([3, 1, 2].map(Max::new));
//! assert_eq!(largest, Max::new(3));
//! ```

use std::ops::{Add, Mul};

use super::monoid::Monoid;
use super::semigroup::Semigroup;

/// A wrapper selecting addition as the combine operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum<T>(pub T);

/// A wrapper selecting multiplication as the combine operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Product<T>(pub T);

/// A wrapper selecting the minimum as the combine operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Min<T>(pub T);

/// A wrapper selecting the maximum as the combine operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Max<T>(pub T);

macro_rules! wrapper_accessors {
    ($($name:ident),*) => {
        $(
            impl<T> $name<T> {
                /// Wraps a value.
                #[inline]
                pub const fn new(value: T) -> Self {
                    Self(value)
                }

                /// Unwraps the value.
                #[inline]
                pub fn into_inner(self) -> T {
                    self.0
                }
            }
        )*
    };
}

wrapper_accessors!(Sum, Product, Min, Max);

/// A trait for types with minimum and maximum values, supplying the
/// identities for the [`Min`] and [`Max`] monoids.
pub trait Bounded {
    /// The smallest value of the type.
    const MIN_VALUE: Self;
    /// The largest value of the type.
    const MAX_VALUE: Self;
}

macro_rules! bounded_instances {
    ($($t:ty),*) => {
        $(
            impl Bounded for $t {
                const MIN_VALUE: Self = <$t>::MIN;
                const MAX_VALUE: Self = <$t>::MAX;
            }
        )*
    };
}

bounded_instances!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T: Add<Output = T>> Semigroup for Sum<T> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<T: Add<Output = T> + Default> Monoid for Sum<T> {
    #[inline]
    fn empty() -> Self {
        Self(T::default())
    }
}

impl<T: Mul<Output = T>> Semigroup for Product<T> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

macro_rules! product_identity_instances {
    ($($t:ty => $one:expr),*) => {
        $(
            impl Monoid for Product<$t> {
                #[inline]
                fn empty() -> Self {
                    Self($one)
                }
            }
        )*
    };
}

product_identity_instances!(
    i8 => 1, i16 => 1, i32 => 1, i64 => 1, i128 => 1, isize => 1,
    u8 => 1, u16 => 1, u32 => 1, u64 => 1, u128 => 1, usize => 1,
    f32 => 1.0, f64 => 1.0
);

impl<T: Ord> Semigroup for Min<T> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }
}

impl<T: Ord + Bounded> Monoid for Min<T> {
    #[inline]
    fn empty() -> Self {
        Self(T::MAX_VALUE)
    }
}

impl<T: Ord> Semigroup for Max<T> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }
}

impl<T: Ord + Bounded> Monoid for Max<T> {
    #[inline]
    fn empty() -> Self {
        Self(T::MIN_VALUE)
    }
}
