//! Foldable type class - collapsing a structure to a summary value.
//!
//! A `Foldable` container can be reduced to a single value by walking
//! its elements in order. `fold_left` is the primitive; `fold_right`,
//! `fold_map`, `to_vec`, and `length` are derived from it.
//!
//! # Examples
//!
//! ```rust
//! use preludium::typeclass::Foldable;
//!
//! let total = vec![1, 2, 3].fold_left(0, |acc, n| acc + n);
//! assert_eq!(total, 6);
//!
//! let absent: Option<i32> = None;
//! assert_eq!(absent.fold_left(10, |acc, n| acc + n), 10);
//! ```

use std::collections::BTreeMap;

use super::kind::Kind;
use super::monoid::Monoid;

/// A type class for containers that can be collapsed element by element.
pub trait Foldable: Kind {
    /// Folds the elements left to right with an accumulator.
    fn fold_left<B, F>(self, initial: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the elements right to left.
    ///
    /// The default buffers the elements; instances with a natural
    /// reverse traversal may override it.
    fn fold_right<B, F>(self, initial: B, function: F) -> B
    where
        Self: Sized,
        F: FnMut(Self::Inner, B) -> B,
    {
        let mut function = function;
        let items = self.fold_left(Vec::new(), |mut acc, value| {
            acc.push(value);
            acc
        });
        items
            .into_iter()
            .rev()
            .fold(initial, |acc, value| function(value, acc))
    }

    /// Maps every element into a [`Monoid`] and combines the results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use preludium::typeclass::Foldable;
    ///
    /// let joined: String = vec!["a", "b", "c"].fold_map(String::from);
    /// assert_eq!(joined, "abc");
    /// ```
    fn fold_map<M, F>(self, function: F) -> M
    where
        Self: Sized,
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
    {
        let mut function = function;
        self.fold_left(M::empty(), |acc, value| acc.combine(function(value)))
    }

    /// Collects the elements into a `Vec` in traversal order.
    fn to_vec(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut acc, value| {
            acc.push(value);
            acc
        })
    }

    /// Counts the elements.
    fn length(self) -> usize
    where
        Self: Sized,
    {
        self.fold_left(0, |count, _| count + 1)
    }
}

impl<A> Foldable for Option<A> {
    #[inline]
    fn fold_left<B, F>(self, initial: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Some(value) => function(initial, value),
            None => initial,
        }
    }
}

impl<T, E> Foldable for Result<T, E> {
    #[inline]
    fn fold_left<B, F>(self, initial: B, mut function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        match self {
            Ok(value) => function(initial, value),
            Err(_) => initial,
        }
    }
}

impl<T> Foldable for Vec<T> {
    #[inline]
    fn fold_left<B, F>(self, initial: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(initial, function)
    }

    #[inline]
    fn fold_right<B, F>(self, initial: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(initial, |acc, value| function(value, acc))
    }
}

impl<T> Foldable for Box<T> {
    #[inline]
    fn fold_left<B, F>(self, initial: B, mut function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        function(initial, *self)
    }
}

impl<K: Ord, V> Foldable for BTreeMap<K, V> {
    /// Folds the values in ascending key order.
    #[inline]
    fn fold_left<B, F>(self, initial: B, mut function: F) -> B
    where
        F: FnMut(B, V) -> B,
    {
        self.into_iter()
            .fold(initial, |acc, (_, value)| function(acc, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn vec_fold_left_accumulates_in_order() {
        let result = vec!["a", "b", "c"].fold_left(String::new(), |acc, s| acc + s);
        assert_eq!(result, "abc");
    }

    #[rstest]
    fn vec_fold_right_accumulates_in_reverse() {
        let result = vec!["a", "b", "c"].fold_right(String::new(), |s, acc| acc + s);
        assert_eq!(result, "cba");
    }

    #[rstest]
    fn option_fold_left_none_keeps_initial() {
        let absent: Option<i32> = None;
        assert_eq!(absent.fold_left(3, |acc, n| acc + n), 3);
    }

    #[rstest]
    fn result_fold_left_err_keeps_initial() {
        let failing: Result<i32, &str> = Err("error");
        assert_eq!(failing.fold_left(3, |acc, n| acc + n), 3);
    }

    #[rstest]
    fn fold_map_combines_through_monoid() {
        let joined: String = vec![1, 2, 3].fold_map(|n| n.to_string());
        assert_eq!(joined, "123");
    }

    #[rstest]
    fn map_fold_left_visits_values_in_key_order() {
        let mut map = BTreeMap::new();
        map.insert("b", 2);
        map.insert("a", 1);
        let collected = map.to_vec();
        assert_eq!(collected, vec![1, 2]);
    }

    #[rstest]
    fn length_counts_elements() {
        assert_eq!(vec![1, 2, 3].length(), 3);
        assert_eq!(Some(1).length(), 1);
        assert_eq!(None::<i32>.length(), 0);
    }
}
