//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust has no native type-constructor polymorphism: there is no way to
//! write a trait abstracting over `Option<_>` and `Vec<_>` as constructors.
//! The [`Kind`] trait plays that role through a Generic Associated Type.
//! Implementing `Kind` for a container registers it as a type constructor;
//! `Of<B>` is the lookup from the constructor and a parameter to the
//! concrete instantiated type. The lookup is total and entirely
//! type-level: using an unregistered type is a compile error, never a
//! runtime failure.
//!
//! # Example
//!
//! ```rust
//! use preludium::typeclass::Kind;
//!
//! fn rewrap<T: Kind>(_value: T) -> T::Of<String>
//! where
//!     T::Of<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none_string: Option<String> = rewrap(Some(42));
//! assert_eq!(none_string, None);
//! ```

use std::collections::BTreeMap;

/// A trait representing a unary type constructor.
///
/// `Kind` emulates higher-kinded types via a Generic Associated Type,
/// which lets the capability traits ([`Functor`](super::Functor),
/// [`Applicative`](super::Applicative), [`Monad`](super::Monad)) be
/// written once against the constructor rather than per container.
///
/// # Associated Types
///
/// - `Inner`: the parameter the constructor is currently applied to.
/// - `Of<B>`: the same constructor applied to `B` instead.
///
/// # Laws
///
/// For any `F: Kind`, `F::Of<F::Inner>` is the same type as `F`, and
/// `F::Of<B>` keeps every non-mapped parameter fixed (for example
/// `Result<T, E>::Of<B>` is `Result<B, E>`).
pub trait Kind {
    /// The inner type the constructor is applied to.
    type Inner;

    /// The same constructor applied to `B`.
    ///
    /// The `Kind<Inner = B>` constraint keeps the result a registered
    /// constructor, so transformations can be chained.
    type Of<B>: Kind<Inner = B>;
}

impl<A> Kind for Option<A> {
    type Inner = A;
    type Of<B> = Option<B>;
}

impl<T, E> Kind for Result<T, E> {
    type Inner = T;
    type Of<B> = Result<B, E>;
}

impl<T> Kind for Vec<T> {
    type Inner = T;
    type Of<B> = Vec<B>;
}

impl<T> Kind for Box<T> {
    type Inner = T;
    type Of<B> = Box<B>;
}

impl<K: Ord, V> Kind for BTreeMap<K, V> {
    type Inner = V;
    type Of<B> = BTreeMap<K, B>;
}
