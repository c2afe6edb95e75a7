//! Isomorphisms between equivalent types.
//!
//! An [`Iso<S, A>`] is a pair of total functions `view: S -> A` and
//! `review: A -> S` that invert each other. The [`newtype!`](crate::newtype)
//! macro generates a wrapper struct together with its iso, giving
//! newtypes a lossless bridge to their inner representation.
//!
//! # Laws
//!
//! - **Round trip one way**: `iso.review(iso.view(s)) == s`
//! - **Round trip the other way**: `iso.view(iso.review(a)) == a`
//!
//! # Examples
//!
//! ```rust
//! use preludium::iso::Iso;
//!
//! let celsius_to_fahrenheit = Iso::new(
//!     |c: f64| c * 9.0 / 5.0 + 32.0,
//!     |f: f64| (f - 32.0) * 5.0 / 9.0,
//! );
//! assert_eq!(celsius_to_fahrenheit.view(100.0), 212.0);
//! assert_eq!(celsius_to_fahrenheit.review(212.0), 100.0);
//! ```

use std::rc::Rc;

/// A two-way lossless conversion between `S` and `A`.
pub struct Iso<S, A> {
    view_function: Rc<dyn Fn(S) -> A>,
    review_function: Rc<dyn Fn(A) -> S>,
}

impl<S, A> Clone for Iso<S, A> {
    fn clone(&self) -> Self {
        Self {
            view_function: Rc::clone(&self.view_function),
            review_function: Rc::clone(&self.review_function),
        }
    }
}

impl<S: 'static, A: 'static> Iso<S, A> {
    /// Builds an iso from the two directions.
    ///
    /// The caller is responsible for the round-trip laws; nothing can
    /// check them at construction time.
    pub fn new<V, R>(view: V, review: R) -> Self
    where
        V: Fn(S) -> A + 'static,
        R: Fn(A) -> S + 'static,
    {
        Self {
            view_function: Rc::new(view),
            review_function: Rc::new(review),
        }
    }

    /// Converts forward.
    #[must_use]
    pub fn view(&self, source: S) -> A {
        (self.view_function)(source)
    }

    /// Converts backward.
    #[must_use]
    pub fn review(&self, value: A) -> S {
        (self.review_function)(value)
    }

    /// Flips the directions.
    #[must_use]
    pub fn reverse(self) -> Iso<A, S> {
        Iso {
            view_function: self.review_function,
            review_function: self.view_function,
        }
    }

    /// Chains two isos into one.
    #[must_use]
    pub fn compose<B: 'static>(self, next: Iso<A, B>) -> Iso<S, B> {
        let forward_outer = Rc::clone(&self.view_function);
        let forward_inner = Rc::clone(&next.view_function);
        let backward_inner = next.review_function;
        let backward_outer = self.review_function;
        Iso {
            view_function: Rc::new(move |source| forward_inner(forward_outer(source))),
            review_function: Rc::new(move |value| backward_outer(backward_inner(value))),
        }
    }

    /// Applies a function on the `A` side of a value on the `S` side.
    pub fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        self.review(function(self.view(source)))
    }
}

/// Generates a newtype wrapper with its [`Iso`] to the inner type.
///
/// The wrapper is a tuple struct with a public field, the standard
/// derives, and an `iso()` constructor whose `view` unwraps and whose
/// `review` is the struct constructor itself.
///
/// # Examples
///
/// ```rust
/// use preludium::newtype;
///
/// newtype! {
///     /// An email address.
///     pub struct Email(String);
/// }
///
/// let iso = Email::iso();
/// let email = Email("user@example.com".to_string());
/// assert_eq!(iso.review(iso.view(email.clone())), email);
/// ```
#[macro_export]
macro_rules! newtype {
    ($(#[$attribute:meta])* $visibility:vis struct $name:ident($inner:ty);) => {
        $(#[$attribute])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $visibility struct $name(pub $inner);

        impl $name {
            /// The isomorphism between this wrapper and its inner type.
            #[must_use]
            pub fn iso() -> $crate::iso::Iso<$name, $inner> {
                $crate::iso::Iso::new(|wrapper: $name| wrapper.0, $name)
            }
        }
    };
}
