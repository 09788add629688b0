//! Composition utilities for threading values through combinators
//!
//! `pipe!` applies a value to a sequence of functions right away; `flow!`
//! builds the same sequence into a reusable function.

pub mod composition;

pub use composition::operators;
pub use composition::operators::{forward_compose, identity, tupled, tupled3, untupled, untupled3};
pub use composition::{Compose, Pipe};

/// Prelude module for convenient imports
pub mod prelude {
    pub use super::composition::operators::*;
    pub use super::composition::{Compose, Pipe};
    pub use crate::option::OptionExt;
    pub use crate::{flow, pipe};
}
