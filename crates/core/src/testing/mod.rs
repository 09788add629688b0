//! Property-based checks of the container laws
//!
//! The functor and monad laws, short-circuiting and `pipe!`/`flow!`
//! equivalence are exercised here against generated containers.

use crate::either::{self, Either};
use crate::functional::prelude::*;
use crate::option;
use proptest::prelude::*;

/// Property-based test generators
pub mod generators {
    use super::*;

    /// Generate optional values
    pub fn maybe<T: 'static + std::fmt::Debug>(
        element: impl Strategy<Value = T>,
    ) -> impl Strategy<Value = Option<T>> {
        proptest::option::of(element)
    }

    /// Generate `Left` and `Right` values in roughly equal measure
    pub fn either_of<E, A>(
        left: impl Strategy<Value = E> + 'static,
        right: impl Strategy<Value = A> + 'static,
    ) -> impl Strategy<Value = Either<E, A>>
    where
        E: 'static + std::fmt::Debug + Clone,
        A: 'static + std::fmt::Debug + Clone,
    {
        prop_oneof![left.prop_map(Either::Left), right.prop_map(Either::Right)]
    }

    /// Error labels used as `Left` payloads
    pub fn reason() -> impl Strategy<Value = String> {
        "[a-z]{1,12}"
    }
}

fn half(n: i64) -> Option<i64> {
    if n % 2 == 0 {
        Some(n / 2)
    } else {
        None
    }
}

fn positive(n: i64) -> Either<String, i64> {
    if n > 0 {
        Either::Right(n)
    } else {
        Either::Left(format!("{n} is not positive"))
    }
}

mod option_laws {
    use super::generators::*;
    use super::*;

    proptest! {
        #[test]
        fn functor_identity(fa in maybe(any::<i64>())) {
            prop_assert_eq!(pipe!(fa, option::map(identity)), fa);
        }

        #[test]
        fn functor_composition(fa in maybe(-1_000i64..1_000)) {
            let f = |n: i64| n * 3;
            let g = |n: i64| n - 7;

            prop_assert_eq!(
                pipe!(fa, option::map(f), option::map(g)),
                pipe!(fa, option::map(flow!(f, g)))
            );
        }

        #[test]
        fn monad_left_identity(a in any::<i64>()) {
            prop_assert_eq!(option::some(a).chain(half), half(a));
        }

        #[test]
        fn monad_right_identity(fa in maybe(any::<i64>())) {
            prop_assert_eq!(fa.chain(option::some), fa);
        }

        #[test]
        fn monad_associativity(fa in maybe(any::<i64>())) {
            let quarter = |n: i64| half(n).chain(half);

            prop_assert_eq!(fa.chain(half).chain(half), fa.chain(quarter));
        }

        #[test]
        fn none_short_circuits(label in reason()) {
            let touched = std::cell::Cell::new(false);
            let result = option::none::<String>()
                .map(|_| touched.set(true))
                .chain(|_| {
                    touched.set(true);
                    Some(label.clone())
                });

            prop_assert_eq!(result, None);
            prop_assert!(!touched.get());
        }

        #[test]
        fn flatten_equals_chain_identity(ffa in maybe(maybe(any::<i64>()))) {
            prop_assert_eq!(option::flatten(ffa), ffa.chain(identity));
        }

        #[test]
        fn get_or_else_keeps_present_values(fa in maybe(any::<i64>()), fallback in any::<i64>()) {
            let resolved = fa.get_or_else(|| fallback);
            prop_assert_eq!(resolved, fa.unwrap_or(fallback));
        }
    }
}

mod either_laws {
    use super::generators::*;
    use super::*;

    proptest! {
        #[test]
        fn functor_identity(fa in either_of(reason(), any::<i64>())) {
            prop_assert_eq!(pipe!(fa.clone(), either::map(identity)), fa);
        }

        #[test]
        fn functor_composition(fa in either_of(reason(), -1_000i64..1_000)) {
            let f = |n: i64| n + 11;
            let g = |n: i64| n * 2;

            prop_assert_eq!(
                fa.clone().map(f).map(g),
                fa.map(flow!(f, g))
            );
        }

        #[test]
        fn monad_left_identity(a in any::<i64>()) {
            prop_assert_eq!(either::right::<String, _>(a).chain(positive), positive(a));
        }

        #[test]
        fn monad_right_identity(fa in either_of(reason(), any::<i64>())) {
            prop_assert_eq!(fa.clone().chain(either::right), fa);
        }

        #[test]
        fn monad_associativity(fa in either_of(reason(), any::<i64>())) {
            let halve = |n: i64| {
                if n % 2 == 0 {
                    Either::Right(n / 2)
                } else {
                    Either::Left(format!("{n} is odd"))
                }
            };

            prop_assert_eq!(
                fa.clone().chain(positive).chain(halve),
                fa.chain(|n| positive(n).chain(halve))
            );
        }

        #[test]
        fn left_short_circuits(label in reason()) {
            let touched = std::cell::Cell::new(false);
            let result = either::left::<String, i64>(label.clone())
                .map(|n| {
                    touched.set(true);
                    n + 1
                })
                .chain(positive);

            prop_assert_eq!(result, Either::Left(label));
            prop_assert!(!touched.get());
        }

        #[test]
        fn result_round_trip(fa in either_of(reason(), any::<i64>())) {
            prop_assert_eq!(Either::from(fa.clone().into_result()), fa);
        }
    }
}

mod composition_laws {
    use super::*;

    proptest! {
        #[test]
        fn pipe_equals_flow(x in -10_000i64..10_000) {
            let inc = |n: i64| n + 1;
            let sq = |n: i64| n * n;

            prop_assert_eq!(pipe!(x, inc, sq, half), flow!(inc, sq, half)(x));
        }

        #[test]
        fn composition_is_associative(x in 0i32..100) {
            let f = |n: i32| n + 1;
            let g = |n: i32| n * 2;
            let h = |n: i32| n - 5;

            prop_assert_eq!(
                forward_compose(forward_compose(f, g), h)(x),
                forward_compose(f, forward_compose(g, h))(x)
            );
        }

        #[test]
        fn identity_is_composition_identity(x in 0i32..1000) {
            let f = |n: i32| n * 3 + 7;

            prop_assert_eq!(forward_compose(identity, f)(x), f(x));
            prop_assert_eq!(forward_compose(f, identity)(x), f(x));
        }
    }
}
