//! Property-based tests for type class laws on `Option`, `Either`, and
//! `Identity`.
//!
//! These instances are the single-value models of the hierarchy; the laws
//! verified here are the same ones the sequence suite checks for `Seq`.

use lazyseq::control::Either;
use lazyseq::typeclass::{Alternative, Applicative, Foldable, Functor, Identity, Monad, tail_rec};
use proptest::prelude::*;

fn arb_either() -> impl Strategy<Value = Either<String, i32>> {
    prop_oneof![
        any::<i32>().prop_map(Either::Right),
        "[a-z]{1,10}".prop_map(Either::Left),
    ]
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_option_functor_identity(value in any::<Option<i32>>()) {
        prop_assert_eq!(value.fmap(|x| x), value);
    }

    #[test]
    fn prop_option_functor_composition(value in any::<Option<i32>>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = value.fmap(function1).fmap(function2);
        let right = value.fmap(move |x| function2(function1(x)));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_either_functor_identity(value in arb_either()) {
        prop_assert_eq!(value.clone().fmap(|x| x), value);
    }

    #[test]
    fn prop_either_functor_composition(value in arb_either()) {
        let function1 = |n: i32| n.wrapping_sub(3);
        let function2 = |n: i32| n.wrapping_mul(5);

        let left = value.clone().fmap(function1).fmap(function2);
        let right = value.fmap(move |x| function2(function1(x)));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_identity_functor_identity(value in any::<i32>()) {
        prop_assert_eq!(Identity(value).fmap(|x| x), Identity(value));
    }
}

// =============================================================================
// Monad Laws
// =============================================================================

fn half(n: i32) -> Option<i32> {
    if n % 2 == 0 { Some(n / 2) } else { None }
}

fn offset(n: i32) -> Option<i32> {
    Some(n.wrapping_add(7))
}

proptest! {
    #[test]
    fn prop_option_monad_left_identity(value in any::<i32>()) {
        prop_assert_eq!(<Option<()>>::pure(value).flat_map(half), half(value));
    }

    #[test]
    fn prop_option_monad_right_identity(value in any::<Option<i32>>()) {
        prop_assert_eq!(value.flat_map(<Option<()>>::pure), value);
    }

    #[test]
    fn prop_option_monad_associativity(value in any::<Option<i32>>()) {
        let left = value.flat_map(half).flat_map(offset);
        let right = value.flat_map(|x| half(x).flat_map(offset));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_either_monad_left_identity(value in any::<i32>()) {
        let arrow = |n: i32| -> Either<String, i32> {
            if n > 0 { Either::Right(n) } else { Either::Left("negative".to_string()) }
        };
        prop_assert_eq!(<Either<String, ()>>::pure(value).flat_map(arrow), arrow(value));
    }

    #[test]
    fn prop_either_monad_right_identity(value in arb_either()) {
        prop_assert_eq!(value.clone().flat_map(<Either<String, ()>>::pure), value);
    }
}

// =============================================================================
// Alternative Laws (Option)
// =============================================================================

proptest! {
    #[test]
    fn prop_option_alternative_left_identity(value in any::<Option<i32>>()) {
        let result = <Option<()>>::empty::<i32>().alt(move || value);
        prop_assert_eq!(result, value);
    }

    #[test]
    fn prop_option_alternative_right_identity(value in any::<Option<i32>>()) {
        prop_assert_eq!(value.alt(<Option<()>>::empty::<i32>), value);
    }

    #[test]
    fn prop_option_alternative_associativity(
        first in any::<Option<i32>>(),
        second in any::<Option<i32>>(),
        third in any::<Option<i32>>(),
    ) {
        let left = first.alt(move || second).alt(move || third);
        let right = first.alt(move || second.alt(move || third));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Applicative consistency
// =============================================================================

proptest! {
    #[test]
    fn prop_option_apply_matches_map2(value in any::<Option<i32>>()) {
        let double = (|n: i32| n.wrapping_mul(2)) as fn(i32) -> i32;
        let via_apply = value.apply(Some(double));
        let via_map2 = value.map2(Some(double), |n, f| f(n));
        prop_assert_eq!(via_apply, via_map2);
    }

    #[test]
    fn prop_either_map2_is_left_biased_on_failure(value in any::<i32>()) {
        let failure: Either<String, i32> = Either::Left("first".to_string());
        let success: Either<String, i32> = Either::Right(value);
        let combined = failure.map2(success, |a, b| a + b);
        prop_assert_eq!(combined, Either::Left("first".to_string()));
    }
}

// =============================================================================
// Foldable consistency
// =============================================================================

proptest! {
    #[test]
    fn prop_option_foldable_matches_iteration(value in any::<Option<i32>>()) {
        prop_assert_eq!(value.to_list(), value.into_iter().collect::<Vec<_>>());
        prop_assert_eq!(value.length(), usize::from(value.is_some()));
    }

    #[test]
    fn prop_either_foldable_counts_rights(value in arb_either()) {
        let expected = usize::from(value.is_right());
        prop_assert_eq!(value.length(), expected);
    }
}

// =============================================================================
// tail_rec equivalence
// =============================================================================

proptest! {
    /// `tail_rec` computes the same fixpoint as the direct loop.
    #[test]
    fn prop_tail_rec_matches_direct_loop(start in 0_u32..1000) {
        let via_tail_rec = tail_rec(start, |n| {
            if n >= 1000 { Either::Right(n) } else { Either::Left(n + 1) }
        });
        prop_assert_eq!(via_tail_rec, 1000);
    }
}
