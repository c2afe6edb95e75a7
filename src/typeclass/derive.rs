//! Derived operations from a minimal monad definition.
//!
//! Given `pure` and `flat_map` for a constructor, the remaining
//! capability operations follow from fixed formulas:
//!
//! ```text
//! map(f)(fa)    = flat_map(|a| pure(f(a)))(fa)
//! apply(ff)(fa) = flat_map(|f| map(f)(fa))(ff)
//! join(ffa)     = flat_map(identity)(ffa)
//! ```
//!
//! These formulas are written here once, generically: they work for any
//! [`Monad`] instance. If the instance's `pure`/`flat_map` satisfy the
//! monad laws, the derived operations satisfy the functor and
//! applicative laws automatically; that is a standard algebraic fact and
//! is pinned by the law tests rather than re-proved per type.
//!
//! The `Kind<Of<…> = …>` bounds tie the derived result type back to the
//! same constructor family; they hold definitionally for every instance
//! in this crate and the compiler discharges them at the call site.
//!
//! # Examples
//!
//! ```rust
//! use preludium::typeclass::derive;
//!
//! let mapped = derive::map_via_flat_map(Some(2), |n| n * 10);
//! assert_eq!(mapped, Some(20));
//!
//! let flattened = derive::join(Some(Some(1)));
//! assert_eq!(flattened, Some(1));
//! ```

use super::applicative::Applicative;
use super::functor::Functor;
use super::kind::Kind;
use super::monad::Monad;

/// Derives `map` from `pure` and `flat_map`.
pub fn map_via_flat_map<M, B, F>(wrapped: M, function: F) -> M::Of<B>
where
    M: Monad,
    F: FnMut(M::Inner) -> B,
    M::Of<B>: Applicative + Kind<Inner = B, Of<B> = M::Of<B>>,
{
    let mut function = function;
    wrapped.flat_map(move |value| <M::Of<B> as Applicative>::pure(function(value)))
}

/// Derives `map2` from `flat_map` and `map`.
///
/// The `Clone` bounds exist because `flat_map` may invoke its
/// continuation several times (multi-shot constructors), and each
/// invocation needs its own copy of the second computation.
pub fn map2_via_flat_map<M, B, C, F>(first: M, second: M::Of<B>, function: F) -> M::Of<C>
where
    M: Monad,
    M::Inner: Clone,
    F: FnMut(M::Inner, B) -> C,
    M::Of<B>: Functor + Clone + Kind<Inner = B, Of<C> = M::Of<C>>,
{
    let mut function = function;
    first.flat_map(move |a| second.clone().fmap(|b| function(a.clone(), b)))
}

/// Derives `apply` from `flat_map` and `map`: resolve the function
/// effect first, then map the function over the value effect.
pub fn apply_via_flat_map<M, B, Output>(function: M, value: M::Of<B>) -> M::Of<Output>
where
    M: Monad,
    M::Inner: FnMut(B) -> Output,
    M::Of<B>: Functor + Clone + Kind<Inner = B, Of<Output> = M::Of<Output>>,
{
    function.flat_map(move |mut f| value.clone().fmap(|b| f(b)))
}

/// Derives `join` from `flat_map`: flattens one level of nesting.
///
/// The equality bounds name the inner container `N` directly: the outer
/// constructor must hold values of its own family, so `N` is pinned by
/// the argument type alone and the call never needs an annotation.
///
/// # Examples
///
/// ```rust
/// use preludium::typeclass::derive;
///
/// assert_eq!(derive::join(Some(Some(1))), Some(1));
/// assert_eq!(derive::join(Some(None::<i32>)), None);
/// ```
pub fn join<N, M>(nested: M) -> N
where
    N: Kind,
    M: Monad<Inner = N, Of<N::Inner> = N>,
{
    nested.flat_map::<N::Inner, _>(|inner| inner)
}
