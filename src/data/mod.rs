//! Algebraic container types.
//!
//! Each container is a closed variant type with the standard capability
//! instances from [`crate::typeclass`], plus its own inherent
//! constructors, predicates, and folds. Failure and absence are encoded
//! in the data ([`Either`], [`Datum`], [`These`]), never thrown; the
//! [`error`](mod@error) submodule supplies the tagged boundary error
//! and the wrappers converting host failures into data.

mod constant;
mod either;
mod identity;
mod pair;
mod these;
mod tree;

pub mod datum;
pub mod error;
pub mod state;

pub use constant::Const;
pub use datum::{Datum, DatumEither};
pub use either::Either;
pub use error::{TagError, TagMatcher};
pub use identity::Identity;
pub use pair::Pair;
pub use state::{State, StateEither};
pub use these::These;
pub use tree::Tree;
