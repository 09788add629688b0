//! Left-to-right application and composition of plain functions

use std::fmt::Debug;

/// Function composition trait for building pipelines out of unary functions
pub trait Compose<A, B> {
    /// Forward composition: run `self`, then feed its output to `g`
    fn then_fn<G, C>(self, g: G) -> impl Fn(A) -> C
    where
        G: Fn(B) -> C,
        Self: Fn(A) -> B + Sized;
}

impl<T, A, B> Compose<A, B> for T
where
    T: Fn(A) -> B,
{
    fn then_fn<G, C>(self, g: G) -> impl Fn(A) -> C
    where
        G: Fn(B) -> C,
    {
        move |a: A| g(self(a))
    }
}

/// A value threaded through a sequence of functions
pub struct Pipe<T>(pub T);

impl<T> Pipe<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Apply a function to the wrapped value
    pub fn pipe<F, U>(self, f: F) -> Pipe<U>
    where
        F: FnOnce(T) -> U,
    {
        Pipe(f(self.0))
    }

    /// Apply a side effect function without changing the value
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        f(&self.0);
        self
    }

    pub fn inner(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Debug> Debug for Pipe<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pipe({:?})", self.0)
    }
}

impl<T: Clone> Clone for Pipe<T> {
    fn clone(&self) -> Self {
        Pipe(self.0.clone())
    }
}

impl<T> From<T> for Pipe<T> {
    fn from(value: T) -> Self {
        Pipe(value)
    }
}

/// Function composition operators
pub mod operators {

    /// Forward composition operator (f >> g)
    pub fn forward_compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
    where
        F: Fn(A) -> B,
        G: Fn(B) -> C,
    {
        move |a: A| g(f(a))
    }

    pub fn identity<T>(x: T) -> T {
        x
    }

    /// Turn a two-argument function into one taking a pair
    pub fn tupled<A, B, C, F>(f: F) -> impl Fn((A, B)) -> C
    where
        F: Fn(A, B) -> C,
    {
        move |(a, b): (A, B)| f(a, b)
    }

    /// Inverse of [`tupled`]
    pub fn untupled<A, B, C, F>(f: F) -> impl Fn(A, B) -> C
    where
        F: Fn((A, B)) -> C,
    {
        move |a: A, b: B| f((a, b))
    }

    pub fn tupled3<A, B, C, D, F>(f: F) -> impl Fn((A, B, C)) -> D
    where
        F: Fn(A, B, C) -> D,
    {
        move |(a, b, c): (A, B, C)| f(a, b, c)
    }

    pub fn untupled3<A, B, C, D, F>(f: F) -> impl Fn(A, B, C) -> D
    where
        F: Fn((A, B, C)) -> D,
    {
        move |a: A, b: B, c: C| f((a, b, c))
    }
}

/// Apply a value to a sequence of functions, left to right.
///
/// `pipe!(x, f, g, h)` evaluates `h(g(f(x)))` immediately. Each stage may be
/// any `FnOnce` and may change the type of the value.
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };
    ($value:expr, $($stage:expr),+ $(,)?) => {{
        let piped = $crate::functional::composition::Pipe::new($value);
        $(
            let piped = piped.pipe($stage);
        )+
        piped.into_inner()
    }};
}

/// Compose functions left to right into a new function.
///
/// `flow!(f, g, h)` returns `|x| h(g(f(x)))` without evaluating anything.
/// The first function may take several arguments when they are named up
/// front: `flow!((a, b) => add, double)`.
#[macro_export]
macro_rules! flow {
    (($($arg:ident),+) => $first:expr $(,)?) => {{
        let first = $first;
        move |$($arg),+| first($($arg),+)
    }};
    (($($arg:ident),+) => $first:expr, $($rest:expr),+ $(,)?) => {{
        let first = $first;
        let rest = $crate::flow!($($rest),+);
        move |$($arg),+| rest(first($($arg),+))
    }};
    ($first:expr $(,)?) => {
        $first
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::functional::composition::Compose as _;
        let composed = $first;
        $(
            let composed = composed.then_fn($rest);
        )+
        composed
    }};
}
