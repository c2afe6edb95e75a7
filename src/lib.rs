//! # preludium
//!
//! A functional programming prelude for Rust providing type classes,
//! algebraic containers, and composition macros.
//!
//! ## Overview
//!
//! This library brings the core abstractions of typed functional
//! programming ecosystems to Rust:
//!
//! - **Type Classes**: [`Functor`](typeclass::Functor),
//!   [`Applicative`](typeclass::Applicative), [`Monad`](typeclass::Monad),
//!   [`Foldable`](typeclass::Foldable), [`Semigroup`](typeclass::Semigroup),
//!   [`Monoid`](typeclass::Monoid), defined over a GAT-based emulation of
//!   higher-kinded types ([`Kind`](typeclass::Kind)).
//! - **Derivation**: the canonical formulas deriving `map`, `apply`, and
//!   `join` from `pure` and `flat_map`, written once
//!   ([`typeclass::derive`](typeclass)).
//! - **Generic Sequencing**: tuple and struct sequencing over any
//!   applicative ([`sequence2`](typeclass::sequence2),
//!   [`sequence_map`](typeclass::sequence_map)).
//! - **Containers**: [`Either`](data::Either), [`Datum`](data::Datum),
//!   [`These`](data::These), [`Pair`](data::Pair), [`Const`](data::Const),
//!   [`State`](data::State), [`Tree`](data::Tree),
//!   [`Identity`](data::Identity).
//! - **Composition**: `pipe!`, `flow!`, and the `mdo!` do-notation macro.
//! - **Schema**: a deterministic JSON-Schema builder ([`schema`]).
//! - **Isomorphisms**: [`Iso`](iso::Iso) and the `newtype!` macro.
//!
//! ## Feature Flags
//!
//! - `typeclass`: type class traits and generic combinators
//! - `data`: the container types and the tagged-error utilities
//! - `compose`: the composition macros
//! - `schema`: the JSON-Schema builder
//! - `serde`: `Serialize`/`Deserialize` derives on the plain-data containers
//! - `full`: everything above
//!
//! ## Example
//!
//! ```rust
//! use preludium::typeclass::{Monad, sequence2};
//!
//! let combined = sequence2(Some(1), Some("foo"));
//! assert_eq!(combined, Some((1, "foo")));
//!
//! let chained = Some(2).flat_map(|n| if n > 0 { Some(n * 10) } else { None });
//! assert_eq!(chained, Some(20));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Prelude module for convenient imports.
///
/// Re-exports the commonly used traits, containers, and combinators.
///
/// # Usage
///
/// ```rust
/// use preludium::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "data")]
    pub use crate::data::{
        Const, Datum, DatumEither, Either, Identity, Pair, State, StateEither, TagError,
        TagMatcher, These, Tree,
    };

    pub use crate::iso::Iso;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "data")]
pub mod data;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "schema")]
pub mod schema;

pub mod iso;
