//! Semigroup type class - associative combination.
//!
//! A `Semigroup` is a type with an associative binary operation
//! `combine`. Strings concatenate, `Vec`s append, optional values
//! combine when both are present, and maps merge by combining values
//! under colliding keys.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use preludium::typeclass::Semigroup;
//!
//! let hello = String::from("Hello, ");
//! let world = String::from("World!");
//! assert_eq!(hello.combine(world), "Hello, World!");
//!
//! assert_eq!(vec![1, 2].combine(vec![3, 4]), vec![1, 2, 3, 4]);
//! ```

use std::collections::BTreeMap;

/// A type class for types with an associative `combine` operation.
///
/// # Laws
///
/// Associativity: `a.combine(b).combine(c) == a.combine(b.combine(c))`.
pub trait Semigroup {
    /// Combines two values associatively.
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, cloning as needed.
    #[inline]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

impl Semigroup for () {
    #[inline]
    fn combine(self, (): Self) -> Self {}
}

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    #[inline]
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}

impl<A: Semigroup, B: Semigroup, C: Semigroup> Semigroup for (A, B, C) {
    #[inline]
    fn combine(self, other: Self) -> Self {
        (
            self.0.combine(other.0),
            self.1.combine(other.1),
            self.2.combine(other.2),
        )
    }
}

/// `None` acts as the absent side; two present values combine.
impl<A: Semigroup> Semigroup for Option<A> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(a), Some(b)) => Some(a.combine(b)),
            (Some(a), None) => Some(a),
            (None, that) => that,
        }
    }
}

/// Value-combining union: keys from both maps, colliding values combined.
impl<K: Ord, V: Semigroup> Semigroup for BTreeMap<K, V> {
    fn combine(mut self, other: Self) -> Self {
        for (key, value) in other {
            match self.remove(&key) {
                Some(existing) => {
                    self.insert(key, existing.combine(value));
                }
                None => {
                    self.insert(key, value);
                }
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn string_combine_concatenates() {
        assert_eq!(
            String::from("ab").combine(String::from("cd")),
            String::from("abcd")
        );
    }

    #[rstest]
    fn vec_combine_appends() {
        assert_eq!(vec![1].combine(vec![2, 3]), vec![1, 2, 3]);
    }

    #[rstest]
    fn option_combine_requires_both_for_merge() {
        let left: Option<String> = Some("a".to_string());
        let right: Option<String> = Some("b".to_string());
        assert_eq!(left.combine(right), Some("ab".to_string()));

        let present: Option<String> = Some("a".to_string());
        assert_eq!(present.clone().combine(None), present.clone());
        assert_eq!(None.combine(present.clone()), present);
    }

    #[rstest]
    fn map_combine_merges_colliding_values() {
        let mut left = BTreeMap::new();
        left.insert("k", vec![1]);
        let mut right = BTreeMap::new();
        right.insert("k", vec![2]);
        right.insert("other", vec![3]);

        let merged = left.combine(right);
        assert_eq!(merged.get("k"), Some(&vec![1, 2]));
        assert_eq!(merged.get("other"), Some(&vec![3]));
    }

    #[rstest]
    fn tuple_combine_is_componentwise() {
        let left = (String::from("a"), vec![1]);
        let right = (String::from("b"), vec![2]);
        assert_eq!(left.combine(right), (String::from("ab"), vec![1, 2]));
    }

    #[rstest]
    fn combine_ref_leaves_originals_usable() {
        let left = String::from("a");
        let right = String::from("b");
        assert_eq!(left.combine_ref(&right), "ab");
        assert_eq!(left, "a");
        assert_eq!(right, "b");
    }

    #[rstest]
    fn string_associativity_law() {
        let a = String::from("x");
        let b = String::from("y");
        let c = String::from("z");
        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        assert_eq!(left, right);
    }
}
