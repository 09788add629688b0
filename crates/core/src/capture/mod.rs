//! The exception-capture boundary.
//!
//! This is the only place in the crate where a raised fault is converted into
//! typed data. A fault is either an unwinding panic or an `Err` returned by a
//! function the caller explicitly designates as throwing (the `*_result`
//! variants). Every other combinator neither raises nor catches.
//!
//! The classifier (`on_throw`) always runs outside the guarded scope: a panic
//! inside the classifier propagates to the caller untouched.
//!
//! Resources acquired inside the guarded function are the function's own
//! responsibility; see [`Scoped`] for a guard that releases on every exit
//! path, including unwinding.

mod hook;
mod scoped;

pub use hook::{inside_boundary, install_panic_hook};
pub use scoped::{scoped, Scoped};

use crate::constants::{CAPTURE_LOG_TARGET, OPAQUE_PANIC_PAYLOAD};
use crate::either::Either;
use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

/// A fault intercepted at the capture boundary
pub enum Fault {
    /// Payload of an unwinding panic
    Panic(Box<dyn Any + Send + 'static>),
    /// Error returned by a function designated as throwing
    Raised(Box<dyn StdError + Send + Sync + 'static>),
}

impl Fault {
    pub fn is_panic(&self) -> bool {
        matches!(self, Fault::Panic(_))
    }

    pub fn is_raised(&self) -> bool {
        matches!(self, Fault::Raised(_))
    }

    /// Short label used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Fault::Panic(_) => "panic",
            Fault::Raised(_) => "raised",
        }
    }

    /// Human-readable rendering of the fault payload.
    ///
    /// Panic payloads of type `&str` or `String` are returned verbatim; any
    /// other payload type renders as `"Box<dyn Any>"`.
    pub fn message(&self) -> String {
        match self {
            Fault::Panic(payload) => panic_message(payload.as_ref()),
            Fault::Raised(error) => error.to_string(),
        }
    }

    /// Borrow the raised error as a concrete type
    pub fn downcast_ref<T>(&self) -> Option<&T>
    where
        T: StdError + 'static,
    {
        match self {
            Fault::Raised(error) => error.downcast_ref::<T>(),
            Fault::Panic(_) => None,
        }
    }

    /// Re-raise the fault as a panic on the current thread.
    ///
    /// A raised error becomes the panic payload as-is, boxed as
    /// `Box<dyn Error + Send + Sync>`, so an outer `catch_unwind` can still
    /// downcast it.
    pub fn resume(self) -> ! {
        match self {
            Fault::Panic(payload) => panic::resume_unwind(payload),
            Fault::Raised(error) => panic::panic_any(error),
        }
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fault::Panic(_) => f.debug_tuple("Panic").field(&self.message()).finish(),
            Fault::Raised(error) => f.debug_tuple("Raised").field(error).finish(),
        }
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl From<Box<dyn StdError + Send + Sync + 'static>> for Fault {
    fn from(error: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        Fault::Raised(error)
    }
}

impl From<anyhow::Error> for Fault {
    fn from(error: anyhow::Error) -> Self {
        Fault::Raised(error.into())
    }
}

pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else if let Some(error) = payload.downcast_ref::<Box<dyn StdError + Send + Sync>>() {
        error.to_string()
    } else {
        OPAQUE_PANIC_PAYLOAD.to_string()
    }
}

/// Run `f` inside the boundary, turning an unwinding panic into a `Fault`
fn guarded<A, F>(f: F) -> Result<A, Fault>
where
    F: FnOnce() -> A,
{
    let _boundary = hook::enter();
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(Fault::Panic)
}

fn settle<A, E, H>(outcome: Result<A, Fault>, on_throw: H) -> Either<E, A>
where
    H: FnOnce(Fault) -> E,
{
    match outcome {
        Ok(value) => {
            tracing::trace!(target: CAPTURE_LOG_TARGET, "boundary exited normally");
            Either::Right(value)
        }
        Err(fault) => {
            tracing::debug!(
                target: CAPTURE_LOG_TARGET,
                kind = fault.kind(),
                detail = %fault,
                "captured fault at boundary"
            );
            Either::Left(on_throw(fault))
        }
    }
}

/// Run `f`, returning `Right` on normal completion and `Left(on_throw(fault))`
/// if it panics.
///
/// ```
/// use faultline_core::{to_error, try_catch};
///
/// let ok = try_catch(|| 21 * 2, to_error);
/// assert_eq!(ok.right(), Some(42));
///
/// let failed = try_catch(|| -> i32 { panic!("overflow") }, to_error);
/// assert_eq!(failed.left().map(|error| error.to_string()), Some("panicked: overflow".into()));
/// ```
pub fn try_catch<A, E, F, H>(f: F, on_throw: H) -> Either<E, A>
where
    F: FnOnce() -> A,
    H: FnOnce(Fault) -> E,
{
    settle(guarded(f), on_throw)
}

/// Like [`try_catch`] for functions that signal failure by returning `Err`.
///
/// Both an `Err(x)` and a panic are classified by `on_throw`; the former
/// arrives as [`Fault::Raised`].
pub fn try_catch_result<A, X, E, F, H>(f: F, on_throw: H) -> Either<E, A>
where
    F: FnOnce() -> std::result::Result<A, X>,
    X: Into<Box<dyn StdError + Send + Sync + 'static>>,
    H: FnOnce(Fault) -> E,
{
    let outcome =
        guarded(f).and_then(|result| result.map_err(|error| Fault::Raised(error.into())));
    settle(outcome, on_throw)
}

/// Curried [`try_catch`]: wrap `f` into a function that returns an `Either`
/// instead of panicking.
///
/// Functions of several arguments go through
/// [`tupled`](crate::functional::operators::tupled) and come back out through
/// [`untupled`](crate::functional::operators::untupled) with their arity
/// intact.
pub fn try_catch_k<Args, A, E, F, H>(f: F, on_throw: H) -> impl Fn(Args) -> Either<E, A>
where
    F: Fn(Args) -> A,
    H: Fn(Fault) -> E,
{
    move |args: Args| try_catch(|| f(args), &on_throw)
}

/// Curried [`try_catch_result`]
pub fn try_catch_result_k<Args, A, X, E, F, H>(
    f: F,
    on_throw: H,
) -> impl Fn(Args) -> Either<E, A>
where
    F: Fn(Args) -> std::result::Result<A, X>,
    X: Into<Box<dyn StdError + Send + Sync + 'static>>,
    H: Fn(Fault) -> E,
{
    move |args: Args| try_catch_result(|| f(args), &on_throw)
}
