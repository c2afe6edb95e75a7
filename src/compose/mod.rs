//! Composition primitives.
//!
//! Three macros and a handful of combinators:
//!
//! - [`pipe!`](crate::pipe) applies functions to a value left to right.
//! - [`flow!`](crate::flow) composes functions into a reusable closure.
//! - [`mdo!`](crate::mdo) writes monadic sequencing as a block.
//! - [`identity`], [`constant`], and [`flip`] are the basic combinators
//!   composition is built from.

mod flow_macro;
mod mdo_macro;
mod pipe_macro;
mod utils;

pub use utils::{constant, flip, identity};
