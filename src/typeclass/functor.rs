//! Functor type class - mapping over container values.
//!
//! A `Functor` is a container whose contents can be transformed while the
//! shape of the container stays fixed. This is the most basic capability
//! in the hierarchy and everything else builds on it.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use preludium::typeclass::Functor;
//!
//! let some_value: Option<i32> = Some(5);
//! let transformed: Option<String> = some_value.fmap(|n| n.to_string());
//! assert_eq!(transformed, Some("5".to_string()));
//!
//! let none_value: Option<i32> = None;
//! assert_eq!(none_value.fmap(|n| n.to_string()), None);
//! ```

use std::collections::BTreeMap;

use super::kind::Kind;

/// A type class for containers that can have a function mapped over their
/// contents.
///
/// The mapping closure is `FnMut` rather than `FnOnce` so that
/// multi-element containers (`Vec`, `BTreeMap`, trees) are first-class
/// functors; single-shot containers simply call the closure at most once.
///
/// # Laws
///
/// Identity: `fa.fmap(|x| x) == fa`.
/// Composition: `fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))`.
///
/// # Examples
///
/// ```rust
/// use preludium::typeclass::Functor;
///
/// let x: Option<i32> = Some(5);
/// let y: Option<i32> = x.fmap(|n| n * 2);
/// assert_eq!(y, Some(10));
/// ```
pub trait Functor: Kind {
    /// Applies a function to the value(s) inside the functor.
    fn fmap<B, F>(self, function: F) -> Self::Of<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Replaces every value inside the functor with a constant.
    ///
    /// Equivalent to `fmap(|_| value.clone())`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use preludium::typeclass::Functor;
    ///
    /// let x: Option<i32> = Some(5);
    /// assert_eq!(x.replace("replaced"), Some("replaced"));
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::Of<B>
    where
        Self: Sized,
        B: Clone,
    {
        self.fmap(move |_| value.clone())
    }

    /// Discards the value(s) inside the functor, keeping only the shape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use preludium::typeclass::Functor;
    ///
    /// let x: Option<i32> = Some(5);
    /// assert_eq!(x.void(), Some(()));
    /// ```
    #[inline]
    fn void(self) -> Self::Of<()>
    where
        Self: Sized,
    {
        self.fmap(|_| ())
    }
}

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnMut(A) -> B,
    {
        self.map(function)
    }
}

impl<T, E> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnMut(T) -> B,
    {
        self.map(function)
    }
}

impl<T> Functor for Vec<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }
}

impl<T> Functor for Box<T> {
    #[inline]
    fn fmap<B, F>(self, mut function: F) -> Box<B>
    where
        F: FnMut(T) -> B,
    {
        Box::new(function(*self))
    }
}

impl<K: Ord, V> Functor for BTreeMap<K, V> {
    #[inline]
    fn fmap<B, F>(self, mut function: F) -> BTreeMap<K, B>
    where
        F: FnMut(V) -> B,
    {
        self.into_iter()
            .map(|(key, value)| (key, function(value)))
            .collect()
    }
}
