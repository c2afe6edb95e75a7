//! Applicative type class - combining independent effectful values.
//!
//! An `Applicative` extends [`Functor`] with the ability to lift plain
//! values into the container (`pure`) and to combine several wrapped
//! values with a plain function (`map2`, `map3`). How the effects
//! combine is up to the instance: `Option` yields `None` unless every
//! side is `Some`, `Vec` produces every left-to-right combination, and
//! `Either` stops at the first `Left`.
//!
//! # Laws
//!
//! Stated in terms of `apply` (derivable from `map2`):
//!
//! - **Identity**: `pure(id).apply(v) == v`
//! - **Homomorphism**: `pure(f).apply(pure(x)) == pure(f(x))`
//! - **Interchange**: `u.apply(pure(y)) == pure(|f| f(y)).apply(u)`
//!
//! # Examples
//!
//! ```rust
//! use preludium::typeclass::Applicative;
//!
//! let x: Option<i32> = <Option<i32>>::pure(42);
//! assert_eq!(x, Some(42));
//!
//! let sum = Some(1).map2(Some(2), |a, b| a + b);
//! assert_eq!(sum, Some(3));
//! ```

use super::functor::Functor;

/// A type class for containers supporting lifting and independent
/// combination.
///
/// `pure`, `map2`, and `map3` are the primitives; `product`, `apply`,
/// and the biased products are derived from `map2`.
///
/// The combined element types carry `Clone` bounds because multi-shot
/// containers (`Vec`) must revisit values once per combination;
/// single-shot containers ignore the bound.
pub trait Applicative: Functor {
    /// Lifts a plain value into the container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use preludium::typeclass::Applicative;
    ///
    /// let lifted: Vec<i32> = <Vec<i32>>::pure(7);
    /// assert_eq!(lifted, vec![7]);
    /// ```
    fn pure<B>(value: B) -> Self::Of<B>;

    /// Combines two wrapped values with a binary function.
    ///
    /// Effects are applied left to right: `self` first, then `other`.
    fn map2<B, C, F>(self, other: Self::Of<B>, function: F) -> Self::Of<C>
    where
        Self::Inner: Clone,
        B: Clone,
        F: FnMut(Self::Inner, B) -> C;

    /// Combines three wrapped values with a ternary function.
    fn map3<B, C, D, F>(self, second: Self::Of<B>, third: Self::Of<C>, function: F) -> Self::Of<D>
    where
        Self::Inner: Clone,
        B: Clone,
        C: Clone,
        F: FnMut(Self::Inner, B, C) -> D;

    /// Pairs two wrapped values, keeping both results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use preludium::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).product(Some("a")), Some((1, "a")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::Of<B>) -> Self::Of<(Self::Inner, B)>
    where
        Self: Sized,
        Self::Inner: Clone,
        B: Clone,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Combines two wrapped values, keeping the left result.
    #[inline]
    fn product_left<B>(self, other: Self::Of<B>) -> Self::Of<Self::Inner>
    where
        Self: Sized,
        Self::Inner: Clone,
        B: Clone,
    {
        self.map2(other, |a, _| a)
    }

    /// Combines two wrapped values, keeping the right result.
    #[inline]
    fn product_right<B>(self, other: Self::Of<B>) -> Self::Of<B>
    where
        Self: Sized,
        Self::Inner: Clone,
        B: Clone,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies a wrapped function to a wrapped value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use preludium::typeclass::Applicative;
    ///
    /// let function: Option<fn(i32) -> i32> = Some(|x| x * 2);
    /// assert_eq!(function.apply(Some(21)), Some(42));
    /// ```
    #[inline]
    fn apply<B, Output>(self, other: Self::Of<B>) -> Self::Of<Output>
    where
        Self: Sized,
        Self::Inner: FnMut(B) -> Output + Clone,
        B: Clone,
    {
        self.map2(other, |mut function, value| function(value))
    }
}

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, mut function: F) -> Option<C>
    where
        A: Clone,
        B: Clone,
        F: FnMut(A, B) -> C,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Option<B>, third: Option<C>, mut function: F) -> Option<D>
    where
        A: Clone,
        B: Clone,
        C: Clone,
        F: FnMut(A, B, C) -> D,
    {
        match (self, second, third) {
            (Some(a), Some(b), Some(c)) => Some(function(a, b, c)),
            _ => None,
        }
    }
}

impl<T, E> Applicative for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Ok(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Result<B, E>, mut function: F) -> Result<C, E>
    where
        T: Clone,
        B: Clone,
        F: FnMut(T, B) -> C,
    {
        match (self, other) {
            (Ok(a), Ok(b)) => Ok(function(a, b)),
            (Err(error), _) | (_, Err(error)) => Err(error),
        }
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Result<B, E>,
        third: Result<C, E>,
        mut function: F,
    ) -> Result<D, E>
    where
        T: Clone,
        B: Clone,
        C: Clone,
        F: FnMut(T, B, C) -> D,
    {
        match (self, second, third) {
            (Ok(a), Ok(b), Ok(c)) => Ok(function(a, b, c)),
            (Err(error), _, _) | (_, Err(error), _) | (_, _, Err(error)) => Err(error),
        }
    }
}

impl<T: Clone> Applicative for Vec<T> {
    #[inline]
    fn pure<B>(value: B) -> Vec<B> {
        vec![value]
    }

    /// Produces every left-to-right combination (the cartesian product),
    /// with `self` as the outer, slower-varying side.
    fn map2<B, C, F>(self, other: Vec<B>, mut function: F) -> Vec<C>
    where
        T: Clone,
        B: Clone,
        F: FnMut(T, B) -> C,
    {
        let mut result = Vec::with_capacity(self.len() * other.len());
        for a in &self {
            for b in &other {
                result.push(function(a.clone(), b.clone()));
            }
        }
        result
    }

    fn map3<B, C, D, F>(self, second: Vec<B>, third: Vec<C>, mut function: F) -> Vec<D>
    where
        T: Clone,
        B: Clone,
        C: Clone,
        F: FnMut(T, B, C) -> D,
    {
        let mut result = Vec::with_capacity(self.len() * second.len() * third.len());
        for a in &self {
            for b in &second {
                for c in &third {
                    result.push(function(a.clone(), b.clone(), c.clone()));
                }
            }
        }
        result
    }
}

impl<T> Applicative for Box<T> {
    #[inline]
    fn pure<B>(value: B) -> Box<B> {
        Box::new(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Box<B>, mut function: F) -> Box<C>
    where
        T: Clone,
        B: Clone,
        F: FnMut(T, B) -> C,
    {
        Box::new(function(*self, *other))
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Box<B>, third: Box<C>, mut function: F) -> Box<D>
    where
        T: Clone,
        B: Clone,
        C: Clone,
        F: FnMut(T, B, C) -> D,
    {
        Box::new(function(*self, *second, *third))
    }
}
