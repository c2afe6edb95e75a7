//! Rose tree - a value with an ordered forest of subtrees.
//!
//! `Tree<A>` pairs a root value with any number of children. Mapping
//! and folding walk the tree pre-order (root first, then each subtree
//! left to right). `flat_map` grafts: each value is replaced by a whole
//! tree, and the original children are appended below the replacement's
//! own children.
//!
//! # Examples
//!
//! ```rust
//! use preludium::data::Tree;
//! use preludium::typeclass::{Foldable, Functor};
//!
//! let tree = Tree::node(1, vec![Tree::leaf(2), Tree::leaf(3)]);
//! let doubled = tree.fmap(|n| n * 2);
//! assert_eq!(doubled.to_vec(), vec![2, 4, 6]);
//! ```

use crate::typeclass::{Applicative, Foldable, Functor, Kind, Monad};

/// A non-empty tree with ordered children.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tree<A> {
    value: A,
    forest: Vec<Tree<A>>,
}

impl<A> Tree<A> {
    /// Builds a tree from a root value and its subtrees.
    #[inline]
    pub fn node(value: A, forest: Vec<Tree<A>>) -> Self {
        Self { value, forest }
    }

    /// Builds a childless tree.
    #[inline]
    pub fn leaf(value: A) -> Self {
        Self::node(value, Vec::new())
    }

    /// The root value.
    #[inline]
    pub const fn value(&self) -> &A {
        &self.value
    }

    /// The subtrees, left to right.
    #[inline]
    pub fn forest(&self) -> &[Tree<A>] {
        &self.forest
    }

    /// Counts the values in the tree.
    #[must_use]
    pub fn size(&self) -> usize {
        1 + self.forest.iter().map(Tree::size).sum::<usize>()
    }

    /// The number of levels in the tree; a leaf has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.forest.iter().map(Tree::depth).max().unwrap_or(0)
    }

    fn map_with<B, F>(self, function: &mut F) -> Tree<B>
    where
        F: FnMut(A) -> B,
    {
        let value = function(self.value);
        let forest = self
            .forest
            .into_iter()
            .map(|child| child.map_with(function))
            .collect();
        Tree { value, forest }
    }

    fn graft<B, F>(self, function: &mut F) -> Tree<B>
    where
        F: FnMut(A) -> Tree<B>,
    {
        let mut grafted = function(self.value);
        grafted
            .forest
            .extend(self.forest.into_iter().map(|child| child.graft(function)));
        grafted
    }

    fn fold_with<B, F>(self, accumulator: B, function: &mut F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        let mut accumulator = function(accumulator, self.value);
        for child in self.forest {
            accumulator = child.fold_with(accumulator, function);
        }
        accumulator
    }
}

impl<A> Kind for Tree<A> {
    type Inner = A;
    type Of<B> = Tree<B>;
}

impl<A> Functor for Tree<A> {
    /// Pre-order: the root is visited before its subtrees.
    #[inline]
    fn fmap<B, F>(self, mut function: F) -> Tree<B>
    where
        F: FnMut(A) -> B,
    {
        self.map_with(&mut function)
    }
}

impl<A: Clone> Applicative for Tree<A> {
    #[inline]
    fn pure<B>(value: B) -> Tree<B> {
        Tree::leaf(value)
    }

    fn map2<B, C, F>(self, other: Tree<B>, mut function: F) -> Tree<C>
    where
        A: Clone,
        B: Clone,
        F: FnMut(A, B) -> C,
    {
        let mut step = |a: A| other.clone().fmap(|b| function(a.clone(), b));
        self.graft(&mut step)
    }

    fn map3<B, C, D, F>(self, second: Tree<B>, third: Tree<C>, mut function: F) -> Tree<D>
    where
        A: Clone,
        B: Clone,
        C: Clone,
        F: FnMut(A, B, C) -> D,
    {
        self.map2(second, |a, b| (a, b))
            .map2(third, move |(a, b), c| function(a, b, c))
    }
}

impl<A: Clone> Monad for Tree<A> {
    /// Grafting: the original children are appended below the children
    /// of the replacement tree.
    #[inline]
    fn flat_map<B, F>(self, mut function: F) -> Tree<B>
    where
        F: FnMut(A) -> Tree<B>,
    {
        self.graft(&mut function)
    }
}

impl<A> Foldable for Tree<A> {
    /// Pre-order traversal.
    #[inline]
    fn fold_left<B, F>(self, initial: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        self.fold_with(initial, &mut function)
    }
}
