//! Type classes for functional programming.
//!
//! This module provides the capability hierarchy the rest of the crate
//! is written against: [`Kind`] emulates type constructors, the
//! [`Functor`] / [`Applicative`] / [`Monad`] chain captures mapping,
//! combination, and sequencing, and [`Semigroup`] / [`Monoid`] capture
//! associative accumulation. Every trait documents the laws its
//! instances must satisfy.
//!
//! Two submodules are deliberately exposed as namespaces rather than
//! flattened: [`derive`] (operations recovered from a minimal monad
//! definition) and [`sequence`] (tuple, record, and list sequencing).

mod alternative;
mod applicative;
mod foldable;
mod functor;
mod kind;
mod monad;
mod monoid;
mod semigroup;
mod wrappers;

pub mod derive;
pub mod sequence;

pub use alternative::Alternative;
pub use applicative::Applicative;
pub use foldable::Foldable;
pub use functor::Functor;
pub use kind::Kind;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use sequence::{sequence2, sequence3, sequence4, sequence_map, sequence_vec, traverse_vec};
pub use wrappers::{Bounded, Max, Min, Product, Sum};
