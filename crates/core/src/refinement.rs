//! Predicate and refinement plumbing shared by the `option` and `either`
//! constructors.
//!
//! A plain predicate answers "does this value qualify?". A [`Refinement`]
//! answers the same question but, on success, hands back the value at a
//! narrower type, typically one variant pulled out of a tagged union. On
//! failure the original value is returned untouched so callers that need it
//! (for example to build a `Left`) still own it.

/// A capability check that narrows `A` to [`Refinement::Narrowed`].
///
/// Every `Fn(A) -> Result<B, A>` is a refinement:
///
/// ```
/// use faultline_core::Refinement;
///
/// enum Shape {
///     Circle(f64),
///     Square(f64),
/// }
///
/// let circle_radius = |shape: Shape| match shape {
///     Shape::Circle(radius) => Ok(radius),
///     other => Err(other),
/// };
///
/// assert_eq!(circle_radius.refine(Shape::Circle(2.0)).ok(), Some(2.0));
/// assert!(circle_radius.refine(Shape::Square(1.0)).is_err());
/// ```
pub trait Refinement<A> {
    /// The type a matching value is narrowed to
    type Narrowed;

    /// Narrow `value`, or give it back unchanged when it does not match
    fn refine(&self, value: A) -> Result<Self::Narrowed, A>;
}

impl<A, B, F> Refinement<A> for F
where
    F: Fn(A) -> Result<B, A>,
{
    type Narrowed = B;

    fn refine(&self, value: A) -> Result<B, A> {
        self(value)
    }
}

/// Build a refinement from a `TryFrom` conversion that returns the rejected
/// value as its error.
pub fn narrow<A, B>() -> impl Fn(A) -> Result<B, A>
where
    B: TryFrom<A, Error = A>,
{
    <B as TryFrom<A>>::try_from
}

/// Negate a predicate
pub fn not<A, P>(predicate: P) -> impl Fn(&A) -> bool
where
    A: ?Sized,
    P: Fn(&A) -> bool,
{
    move |value: &A| !predicate(value)
}

/// Lift a predicate into a refinement that narrows `A` to itself.
pub(crate) fn from_predicate<A, P>(predicate: P) -> impl Fn(A) -> Result<A, A>
where
    P: Fn(&A) -> bool,
{
    move |value: A| {
        if predicate(&value) {
            Ok(value)
        } else {
            Err(value)
        }
    }
}

/// Types that carry a "no value" sentinel.
///
/// `from_nullable` maps the sentinel to absence and everything else to a
/// present value.
pub trait Nullable {
    /// The payload of a non-sentinel value
    type Value;

    /// `None` iff `self` is the sentinel
    fn into_option(self) -> Option<Self::Value>;
}

impl<T> Nullable for Option<T> {
    type Value = T;

    fn into_option(self) -> Option<T> {
        self
    }
}

impl Nullable for serde_json::Value {
    type Value = serde_json::Value;

    fn into_option(self) -> Option<serde_json::Value> {
        match self {
            serde_json::Value::Null => None,
            value => Some(value),
        }
    }
}

impl<'a> Nullable for &'a serde_json::Value {
    type Value = &'a serde_json::Value;

    fn into_option(self) -> Option<&'a serde_json::Value> {
        match self {
            serde_json::Value::Null => None,
            value => Some(value),
        }
    }
}
