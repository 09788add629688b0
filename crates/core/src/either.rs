//! The result container: success with `A` or failure with a typed reason `E`.
//!
//! By convention `Left` is the failure branch and `Right` the success branch.
//! Every combinator acting "on the success path" transforms `Right` and passes
//! `Left` through untouched. As with [`option`](crate::option), combinators
//! exist as inherent methods and as pipeable free functions.

use crate::functional::operators::identity;
use crate::option::OptionExt;
use crate::refinement::{self, Nullable, Refinement};
use serde::{Deserialize, Serialize};

pub use crate::capture::{try_catch, try_catch_k, try_catch_result, try_catch_result_k};
pub use crate::errors::to_error;

/// A value that is either a typed failure (`Left`) or a success (`Right`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Either<E, A> {
    Left(E),
    Right(A),
}

impl<E, A> Either<E, A> {
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// The failure payload, if any
    pub fn left(self) -> Option<E> {
        self.fold(Some, |_| None)
    }

    /// The success payload, if any
    pub fn right(self) -> Option<A> {
        self.fold(|_| None, Some)
    }

    pub fn as_ref(&self) -> Either<&E, &A> {
        match self {
            Either::Left(error) => Either::Left(error),
            Either::Right(value) => Either::Right(value),
        }
    }

    /// Collapse into a plain value; exactly one branch runs
    pub fn fold<B, L, R>(self, on_left: L, on_right: R) -> B
    where
        L: FnOnce(E) -> B,
        R: FnOnce(A) -> B,
    {
        match self {
            Either::Left(error) => on_left(error),
            Either::Right(value) => on_right(value),
        }
    }

    pub fn map<B, F>(self, f: F) -> Either<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Either::Left(error) => Either::Left(error),
            Either::Right(value) => Either::Right(f(value)),
        }
    }

    pub fn map_left<G, F>(self, f: F) -> Either<G, A>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Either::Left(error) => Either::Left(f(error)),
            Either::Right(value) => Either::Right(value),
        }
    }

    pub fn bimap<G, B, L, R>(self, on_left: L, on_right: R) -> Either<G, B>
    where
        L: FnOnce(E) -> G,
        R: FnOnce(A) -> B,
    {
        match self {
            Either::Left(error) => Either::Left(on_left(error)),
            Either::Right(value) => Either::Right(on_right(value)),
        }
    }

    /// Sequence a fallible step; a `Left` short-circuits and `f` never runs
    pub fn chain<B, F>(self, f: F) -> Either<E, B>
    where
        F: FnOnce(A) -> Either<E, B>,
    {
        match self {
            Either::Left(error) => Either::Left(error),
            Either::Right(value) => f(value),
        }
    }

    /// Extract the success payload, or recover one from the failure
    pub fn get_or_else<L>(self, on_left: L) -> A
    where
        L: FnOnce(E) -> A,
    {
        self.fold(on_left, identity)
    }

    /// Keep `Right` as is; evaluate `on_left` only for a `Left`
    pub fn alt<L>(self, on_left: L) -> Either<E, A>
    where
        L: FnOnce() -> Either<E, A>,
    {
        match self {
            Either::Left(_) => on_left(),
            right => right,
        }
    }

    /// Like [`Either::alt`], but the fallback sees the failure and may change
    /// its type
    pub fn or_else<G, L>(self, on_left: L) -> Either<G, A>
    where
        L: FnOnce(E) -> Either<G, A>,
    {
        match self {
            Either::Left(error) => on_left(error),
            Either::Right(value) => Either::Right(value),
        }
    }

    pub fn swap(self) -> Either<A, E> {
        match self {
            Either::Left(error) => Either::Right(error),
            Either::Right(value) => Either::Left(value),
        }
    }

    pub fn into_result(self) -> Result<A, E> {
        self.into()
    }

    pub fn from_option<L>(container: Option<A>, on_none: L) -> Self
    where
        L: FnOnce() -> E,
    {
        container.to_either(on_none)
    }

    /// `Left(on_none())` iff `value` is its type's "no value" sentinel
    pub fn from_nullable<N, L>(value: N, on_none: L) -> Self
    where
        N: Nullable<Value = A>,
        L: FnOnce() -> E,
    {
        Self::from_option(value.into_option(), on_none)
    }

    /// Build a constructor that accepts values satisfying `predicate` and
    /// turns the rest into failures with `on_false`
    pub fn from_predicate<P, L>(predicate: P, on_false: L) -> impl Fn(A) -> Self
    where
        P: Fn(&A) -> bool,
        L: Fn(A) -> E,
    {
        Self::from_refinement(refinement::from_predicate(predicate), on_false)
    }

    /// Build a constructor that narrows values of type `T` to `A` with
    /// `refinement`; values that do not match go to `on_false`
    pub fn from_refinement<T, R, L>(refinement: R, on_false: L) -> impl Fn(T) -> Self
    where
        R: Refinement<T, Narrowed = A>,
        L: Fn(T) -> E,
    {
        move |value: T| match refinement.refine(value) {
            Ok(narrowed) => Either::Right(narrowed),
            Err(value) => Either::Left(on_false(value)),
        }
    }
}

impl<E, A> Either<E, Either<E, A>> {
    /// Remove one level of nesting; `chain` with the identity function
    pub fn flatten(self) -> Either<E, A> {
        self.chain(identity)
    }
}

impl<E, A> From<Result<A, E>> for Either<E, A> {
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Either::Right(value),
            Err(error) => Either::Left(error),
        }
    }
}

impl<E, A> From<Either<E, A>> for Result<A, E> {
    fn from(either: Either<E, A>) -> Self {
        match either {
            Either::Left(error) => Err(error),
            Either::Right(value) => Ok(value),
        }
    }
}

pub fn left<E, A>(error: E) -> Either<E, A> {
    Either::Left(error)
}

pub fn right<E, A>(value: A) -> Either<E, A> {
    Either::Right(value)
}

/// Build a constructor that narrows values with `refinement` and turns
/// mismatches into failures with `on_false`
pub fn from_refinement<A, E, R, L>(
    refinement: R,
    on_false: L,
) -> impl Fn(A) -> Either<E, R::Narrowed>
where
    R: Refinement<A>,
    L: Fn(A) -> E,
{
    Either::from_refinement(refinement, on_false)
}

pub fn from_option<A, E, L>(on_none: L) -> impl Fn(Option<A>) -> Either<E, A>
where
    L: Fn() -> E,
{
    move |container: Option<A>| Either::from_option(container, &on_none)
}

pub fn map<E, A, B, F>(f: F) -> impl Fn(Either<E, A>) -> Either<E, B>
where
    F: Fn(A) -> B,
{
    move |container: Either<E, A>| container.map(&f)
}

pub fn map_left<E, G, A, F>(f: F) -> impl Fn(Either<E, A>) -> Either<G, A>
where
    F: Fn(E) -> G,
{
    move |container: Either<E, A>| container.map_left(&f)
}

pub fn chain<E, A, B, F>(f: F) -> impl Fn(Either<E, A>) -> Either<E, B>
where
    F: Fn(A) -> Either<E, B>,
{
    move |container: Either<E, A>| container.chain(&f)
}

pub fn flatten<E, A>(container: Either<E, Either<E, A>>) -> Either<E, A> {
    container.flatten()
}

pub fn fold<E, A, B, L, R>(on_left: L, on_right: R) -> impl Fn(Either<E, A>) -> B
where
    L: Fn(E) -> B,
    R: Fn(A) -> B,
{
    move |container: Either<E, A>| container.fold(&on_left, &on_right)
}

pub fn get_or_else<E, A, L>(on_left: L) -> impl Fn(Either<E, A>) -> A
where
    L: Fn(E) -> A,
{
    move |container: Either<E, A>| container.get_or_else(&on_left)
}

pub fn alt<E, A, L>(on_left: L) -> impl Fn(Either<E, A>) -> Either<E, A>
where
    L: Fn() -> Either<E, A>,
{
    move |container: Either<E, A>| container.alt(&on_left)
}

pub fn or_else<E, G, A, L>(on_left: L) -> impl Fn(Either<E, A>) -> Either<G, A>
where
    L: Fn(E) -> Either<G, A>,
{
    move |container: Either<E, A>| container.or_else(&on_left)
}
