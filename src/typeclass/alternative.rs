//! Alternative type class - choice between effectful computations.
//!
//! An `Alternative` is an [`Applicative`] with a failure value and an
//! associative choice operation: `alt` tries the left computation and
//! falls back to the right one when the left is the failure value. This
//! is the structural form of "recover": no exception flows, the failure
//! variant is just data.
//!
//! # Laws
//!
//! - **Left Identity**: `empty().alt(x) == x`
//! - **Right Identity**: `x.alt(empty()) == x`
//! - **Associativity**: `x.alt(y).alt(z) == x.alt(y.alt(z))`

use super::applicative::Applicative;

/// A type class for applicatives with failure and choice.
///
/// # Examples
///
/// ```rust
/// use preludium::typeclass::Alternative;
///
/// let fallback = None.alt(Some(2));
/// assert_eq!(fallback, Some(2));
///
/// let kept = Some(1).alt(Some(2));
/// assert_eq!(kept, Some(1));
/// ```
pub trait Alternative: Applicative {
    /// The failure value of the container.
    fn empty() -> Self;

    /// Returns `self` unless it is the failure value, in which case
    /// `other` is returned.
    fn alt(self, other: Self) -> Self;
}

impl<A> Alternative for Option<A> {
    #[inline]
    fn empty() -> Self {
        None
    }

    #[inline]
    fn alt(self, other: Self) -> Self {
        self.or(other)
    }
}

impl<T: Clone> Alternative for Vec<T> {
    #[inline]
    fn empty() -> Self {
        Vec::new()
    }

    #[inline]
    fn alt(self, other: Self) -> Self {
        let mut combined = self;
        combined.extend(other);
        combined
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn option_alt_prefers_first_some() {
        assert_eq!(Some(1).alt(Some(2)), Some(1));
        assert_eq!(None.alt(Some(2)), Some(2));
        assert_eq!(Some(1).alt(None), Some(1));
        assert_eq!(None::<i32>.alt(None), None);
    }

    #[rstest]
    fn vec_alt_concatenates() {
        assert_eq!(vec![1].alt(vec![2, 3]), vec![1, 2, 3]);
    }

    #[rstest]
    fn option_identity_laws() {
        let value = Some(7);
        assert_eq!(<Option<i32>>::empty().alt(value), value);
        assert_eq!(value.alt(<Option<i32>>::empty()), value);
    }

    #[rstest]
    fn vec_associativity_law() {
        let x = vec![1];
        let y = vec![2];
        let z = vec![3];
        let left = x.clone().alt(y.clone()).alt(z.clone());
        let right = x.alt(y.alt(z));
        assert_eq!(left, right);
    }
}
