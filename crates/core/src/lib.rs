//! Optional and result containers with lawful combinators for `faultline`.
//!
//! This crate models two recurring failure shapes in the type of a value
//! instead of through panics: a value that may be absent (`Option<A>`) and a
//! computation that may fail with a typed reason (`Either<E, A>`).
//!
//! ## Key Components
//!
//! - **`option`**: the `OptionExt` trait plus curried, pipeable combinators
//!   (`map`, `chain`, `flatten`, `fold`, `get_or_else`, `alt`,
//!   `from_predicate`, `from_nullable`).
//! - **`either`**: the `Either` sum type with the same combinator family acting
//!   on `Right` and passing `Left` through.
//! - **`capture`**: the one place where a raised fault becomes typed data
//!   (`try_catch` and friends).
//! - **`functional`**: `pipe!`, `flow!` and the composition operators used to
//!   thread containers through combinators.
//! - **`errors`**: the canonical `Error` produced by `to_error`.
//!
//! ```
//! use faultline_core::{flow, option, pipe};
//!
//! let inverse = |n: f64| if n == 0.0 { None } else { Some(1.0 / n) };
//!
//! let safe_inverse = flow!(inverse, option::get_or_else(|| 0.0));
//! assert_eq!(safe_inverse(2.0), 0.5);
//! assert_eq!(pipe!(0.0, inverse, option::get_or_else(|| 0.0)), 0.0);
//! ```

pub mod capture;
pub mod config;
pub mod constants;
pub mod either;
pub mod errors;
pub mod functional;
pub mod option;
pub mod refinement;

#[cfg(test)]
pub(crate) mod testing;

pub use self::{
    capture::{try_catch, try_catch_k, try_catch_result, try_catch_result_k, Fault},
    config::{CaptureConfig, PanicReport},
    either::Either,
    errors::{to_error, Error, Result},
    option::OptionExt,
    refinement::{narrow, Nullable, Refinement},
};
