//! Monad type class - sequencing computations within a context.
//!
//! A `Monad` extends [`Applicative`](super::Applicative) with `flat_map`,
//! which lets the result of one computation decide what computation runs
//! next. Failure and short-circuiting are whatever the instance encodes:
//! `None` for `Option`, the first `Left` for `Either`, an absent value
//! for `Datum`.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy:
//!
//! - **Left Identity**: `pure(a).flat_map(f) == f(a)`
//! - **Right Identity**: `m.flat_map(pure) == m`
//! - **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//!
//! # Examples
//!
//! ```rust
//! use preludium::typeclass::Monad;
//!
//! fn parse_positive(s: &str) -> Option<i32> {
//!     s.parse::<i32>().ok().filter(|&n| n > 0)
//! }
//!
//! let result = Some("42").flat_map(parse_positive).flat_map(|n| Some(n * 2));
//! assert_eq!(result, Some(84));
//! ```

use super::applicative::Applicative;
use super::kind::Kind;

/// A type class for containers supporting dependent sequencing.
///
/// # Laws
///
/// Left identity: `pure(a).flat_map(f) == f(a)`.
/// Right identity: `m.flat_map(pure) == m`.
/// Associativity: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`.
pub trait Monad: Applicative {
    /// Applies a container-returning function to the value inside the
    /// monad and flattens the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use preludium::typeclass::Monad;
    ///
    /// let halved = Some(10).flat_map(|n| if n % 2 == 0 { Some(n / 2) } else { None });
    /// assert_eq!(halved, Some(5));
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::Of<B>
    where
        F: FnMut(Self::Inner) -> Self::Of<B>;

    /// Alias for `flat_map`, matching the naming of `Option::and_then`
    /// and `Result::and_then`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::Of<B>
    where
        Self: Sized,
        F: FnMut(Self::Inner) -> Self::Of<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first result.
    ///
    /// Failure in `self` propagates and `next` is never produced.
    #[inline]
    fn then<B>(self, next: Self::Of<B>) -> Self::Of<B>
    where
        Self: Sized,
        Self::Of<B>: Clone,
    {
        self.flat_map(move |_| next.clone())
    }

    /// Flattens one level of nesting (`join`).
    ///
    /// The equality bounds pin `N` to the inner container held by
    /// `self`, so the call needs no type annotation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use preludium::typeclass::Monad;
    ///
    /// let nested: Option<Option<i32>> = Some(Some(1));
    /// assert_eq!(nested.join(), Some(1));
    /// ```
    #[inline]
    fn join<N>(self) -> N
    where
        Self: Sized + Monad<Inner = N, Of<N::Inner> = N>,
        N: Kind,
    {
        self.flat_map::<N::Inner, _>(|inner| inner)
    }
}

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, mut function: F) -> Option<B>
    where
        F: FnMut(A) -> Option<B>,
    {
        match self {
            Some(value) => function(value),
            None => None,
        }
    }
}

impl<T, E> Monad for Result<T, E> {
    #[inline]
    fn flat_map<B, F>(self, mut function: F) -> Result<B, E>
    where
        F: FnMut(T) -> Result<B, E>,
    {
        match self {
            Ok(value) => function(value),
            Err(error) => Err(error),
        }
    }
}

impl<T: Clone> Monad for Vec<T> {
    #[inline]
    fn flat_map<B, F>(self, mut function: F) -> Vec<B>
    where
        F: FnMut(T) -> Vec<B>,
    {
        let mut result = Vec::new();
        for value in self {
            result.extend(function(value));
        }
        result
    }
}

impl<T> Monad for Box<T> {
    #[inline]
    fn flat_map<B, F>(self, mut function: F) -> Box<B>
    where
        F: FnMut(T) -> Box<B>,
    {
        function(*self)
    }
}
