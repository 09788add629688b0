//! Combinators for the optional container.
//!
//! The container itself is `Option<A>`: `None` carries no payload and
//! allocates nothing, so one representation serves every `A`. Combinators come
//! in two forms:
//!
//! - method form through [`OptionExt`], for plain call chains;
//! - pipeable form as free functions returning reusable closures, for
//!   [`pipe!`](crate::pipe) and [`flow!`](crate::flow).
//!
//! None of these combinators panics or catches a panic; functions handed to
//! them must be total over their input.

use crate::either::Either;
use crate::functional::operators::identity;
use crate::refinement::{self, Nullable, Refinement};

/// Functional utilities for working with Options
pub trait OptionExt<A> {
    /// Collapse the option into a plain value; exactly one branch runs
    fn fold<B, N, S>(self, on_none: N, on_some: S) -> B
    where
        N: FnOnce() -> B,
        S: FnOnce(A) -> B;

    /// Sequence an option-returning function without re-wrapping its result
    fn chain<B, F>(self, f: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>;

    /// Extract the payload, or fall back to `on_none`
    fn get_or_else<N>(self, on_none: N) -> A
    where
        N: FnOnce() -> A;

    /// Keep `Some` as is; evaluate `on_none` only for `None`
    fn alt<N>(self, on_none: N) -> Option<A>
    where
        N: FnOnce() -> Option<A>;

    /// Convert absence into a typed failure
    fn to_either<E, N>(self, on_none: N) -> Either<E, A>
    where
        N: FnOnce() -> E;

    /// Tap into Some values for side effects
    fn tap_some<F>(self, f: F) -> Self
    where
        F: FnOnce(&A);

    /// Tap into None for side effects
    fn tap_none<F>(self, f: F) -> Self
    where
        F: FnOnce();
}

impl<A> OptionExt<A> for Option<A> {
    fn fold<B, N, S>(self, on_none: N, on_some: S) -> B
    where
        N: FnOnce() -> B,
        S: FnOnce(A) -> B,
    {
        match self {
            Some(value) => on_some(value),
            None => on_none(),
        }
    }

    fn chain<B, F>(self, f: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        match self {
            Some(value) => f(value),
            None => None,
        }
    }

    fn get_or_else<N>(self, on_none: N) -> A
    where
        N: FnOnce() -> A,
    {
        self.fold(on_none, identity)
    }

    fn alt<N>(self, on_none: N) -> Option<A>
    where
        N: FnOnce() -> Option<A>,
    {
        match self {
            Some(value) => Some(value),
            None => on_none(),
        }
    }

    fn to_either<E, N>(self, on_none: N) -> Either<E, A>
    where
        N: FnOnce() -> E,
    {
        match self {
            Some(value) => Either::Right(value),
            None => Either::Left(on_none()),
        }
    }

    fn tap_some<F>(self, f: F) -> Self
    where
        F: FnOnce(&A),
    {
        if let Some(ref value) = self {
            f(value);
        }
        self
    }

    fn tap_none<F>(self, f: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_none() {
            f();
        }
        self
    }
}

/// The absent value
pub const fn none<A>() -> Option<A> {
    None
}

/// Wrap a present value
pub fn some<A>(value: A) -> Option<A> {
    Some(value)
}

/// `None` iff `value` is its type's "no value" sentinel
pub fn from_nullable<N>(value: N) -> Option<N::Value>
where
    N: Nullable,
{
    value.into_option()
}

/// Build a constructor that keeps values satisfying `predicate`.
///
/// ```
/// use faultline_core::option;
///
/// let get_even = option::from_predicate(|n: &i32| n % 2 == 0);
/// assert_eq!(get_even(4), Some(4));
/// assert_eq!(get_even(5), None);
/// ```
pub fn from_predicate<A, P>(predicate: P) -> impl Fn(A) -> Option<A>
where
    P: Fn(&A) -> bool,
{
    from_refinement(refinement::from_predicate(predicate))
}

/// Build a constructor that keeps values matching `refinement`, at the
/// narrowed type.
pub fn from_refinement<A, R>(refinement: R) -> impl Fn(A) -> Option<R::Narrowed>
where
    R: Refinement<A>,
{
    move |value: A| refinement.refine(value).ok()
}

pub fn map<A, B, F>(f: F) -> impl Fn(Option<A>) -> Option<B>
where
    F: Fn(A) -> B,
{
    move |container: Option<A>| container.map(&f)
}

pub fn chain<A, B, F>(f: F) -> impl Fn(Option<A>) -> Option<B>
where
    F: Fn(A) -> Option<B>,
{
    move |container: Option<A>| container.chain(&f)
}

/// Remove one level of nesting; `chain` with the identity function
pub fn flatten<A>(container: Option<Option<A>>) -> Option<A> {
    container.chain(identity)
}

pub fn fold<A, B, N, S>(on_none: N, on_some: S) -> impl Fn(Option<A>) -> B
where
    N: Fn() -> B,
    S: Fn(A) -> B,
{
    move |container: Option<A>| container.fold(&on_none, &on_some)
}

pub fn get_or_else<A, N>(on_none: N) -> impl Fn(Option<A>) -> A
where
    N: Fn() -> A,
{
    move |container: Option<A>| container.get_or_else(&on_none)
}

pub fn alt<A, N>(on_none: N) -> impl Fn(Option<A>) -> Option<A>
where
    N: Fn() -> Option<A>,
{
    move |container: Option<A>| container.alt(&on_none)
}

pub fn to_either<A, E, N>(on_none: N) -> impl Fn(Option<A>) -> Either<E, A>
where
    N: Fn() -> E,
{
    move |container: Option<A>| container.to_either(&on_none)
}
