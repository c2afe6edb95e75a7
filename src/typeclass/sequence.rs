//! Sequencing independent effectful computations.
//!
//! `sequence2` through `sequence4` turn a tuple of computations into a
//! computation of a tuple; [`sequence_map`] does the same for a keyed
//! record and [`sequence_vec`] for a homogeneous list. All of them run
//! the computations through [`Applicative::map2`], so the combination
//! order is fixed by the structure and never by the caller.
//!
//! Records are held in a [`BTreeMap`], which sorts keys, so two records
//! built by inserting the same entries in different orders sequence
//! identically.
//!
//! # Examples
//!
//! ```rust
//! use preludium::typeclass::sequence;
//!
//! let paired = sequence::sequence2(Some(1), Some("foo"));
//! assert_eq!(paired, Some((1, "foo")));
//!
//! let missing = sequence::sequence2(Some(1), None::<&str>);
//! assert_eq!(missing, None);
//! ```

use std::collections::BTreeMap;

use super::applicative::Applicative;
use super::kind::Kind;

/// Sequences two computations into a computation of a pair.
pub fn sequence2<F, B>(first: F, second: F::Of<B>) -> F::Of<(F::Inner, B)>
where
    F: Applicative,
    F::Inner: Clone,
    B: Clone,
{
    first.map2(second, |a, b| (a, b))
}

/// Sequences three computations into a computation of a triple.
pub fn sequence3<F, B, C>(
    first: F,
    second: F::Of<B>,
    third: F::Of<C>,
) -> F::Of<(F::Inner, B, C)>
where
    F: Applicative,
    F::Inner: Clone,
    B: Clone,
    C: Clone,
{
    first.map3(second, third, |a, b, c| (a, b, c))
}

/// Sequences four computations into a computation of a quadruple.
pub fn sequence4<F, B, C, D>(
    first: F,
    second: F::Of<B>,
    third: F::Of<C>,
    fourth: F::Of<D>,
) -> F::Of<(F::Inner, B, C, D)>
where
    F: Applicative,
    F::Inner: Clone,
    B: Clone,
    C: Clone,
    D: Clone,
    F::Of<(F::Inner, B, C)>: Applicative
        + Kind<
            Inner = (F::Inner, B, C),
            Of<D> = F::Of<D>,
            Of<(F::Inner, B, C, D)> = F::Of<(F::Inner, B, C, D)>,
        >,
{
    first
        .map3(second, third, |a, b, c| (a, b, c))
        .map2(fourth, |(a, b, c), d| (a, b, c, d))
}

/// Sequences a keyed record of computations into a computation of a
/// record.
///
/// Entries are combined in ascending key order. Because the record is
/// a sorted map, insertion order cannot influence the result.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use preludium::typeclass::sequence;
///
/// let record = BTreeMap::from([("x", Some(1)), ("y", Some(2))]);
/// let sequenced = sequence::sequence_map(record);
/// assert_eq!(sequenced, Some(BTreeMap::from([("x", 1), ("y", 2)])));
/// ```
pub fn sequence_map<K, F>(entries: BTreeMap<K, F>) -> F::Of<BTreeMap<K, F::Inner>>
where
    K: Ord + Clone,
    F: Applicative,
    F::Inner: Clone,
    F::Of<BTreeMap<K, F::Inner>>: Applicative
        + Kind<
            Inner = BTreeMap<K, F::Inner>,
            Of<F::Inner> = F,
            Of<BTreeMap<K, F::Inner>> = F::Of<BTreeMap<K, F::Inner>>,
        >,
{
    let mut accumulated =
        <F::Of<BTreeMap<K, F::Inner>> as Applicative>::pure(BTreeMap::new());
    for (key, wrapped) in entries {
        accumulated = accumulated.map2(wrapped, move |mut record, value| {
            record.insert(key.clone(), value);
            record
        });
    }
    accumulated
}

/// Sequences a list of computations into a computation of a list,
/// preserving element order.
pub fn sequence_vec<F>(items: Vec<F>) -> F::Of<Vec<F::Inner>>
where
    F: Applicative,
    F::Inner: Clone,
    F::Of<Vec<F::Inner>>: Applicative
        + Kind<Inner = Vec<F::Inner>, Of<F::Inner> = F, Of<Vec<F::Inner>> = F::Of<Vec<F::Inner>>>,
{
    let mut accumulated = <F::Of<Vec<F::Inner>> as Applicative>::pure(Vec::new());
    for wrapped in items {
        accumulated = accumulated.map2(wrapped, |mut collected, value| {
            collected.push(value);
            collected
        });
    }
    accumulated
}

/// Maps each element into a computation and sequences the results.
///
/// # Examples
///
/// ```rust
/// use preludium::typeclass::sequence;
///
/// let parsed = sequence::traverse_vec(vec!["1", "2"], |s| s.parse::<i32>().ok());
/// assert_eq!(parsed, Some(vec![1, 2]));
/// ```
pub fn traverse_vec<A, F, Func>(items: Vec<A>, function: Func) -> F::Of<Vec<F::Inner>>
where
    F: Applicative,
    F::Inner: Clone,
    Func: FnMut(A) -> F,
    F::Of<Vec<F::Inner>>: Applicative
        + Kind<Inner = Vec<F::Inner>, Of<F::Inner> = F, Of<Vec<F::Inner>> = F::Of<Vec<F::Inner>>>,
{
    sequence_vec(items.into_iter().map(function).collect())
}
