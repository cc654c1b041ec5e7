//! Type class instances for [`Seq`].
//!
//! These implementations expose the sequence operators through the crate's
//! capability traits so generic code can treat `Seq` uniformly with
//! `Option` and `Either`. They carry no logic of their own - each method
//! delegates to the corresponding sequence operator.
//!
//! Law obligations are documented on the traits and enforced by the
//! property-based test suite, not at runtime. Of note for `Seq`:
//!
//! - `alt` is concatenation with `Seq::empty()` as its identity
//! - `apply` preserves the outer-functions / inner-arguments ordering
//! - `chain_rec` is the depth-first work-list expansion

use std::rc::Rc;

use super::sequence::Seq;
use crate::control::Either;
use crate::typeclass::{
    Alternative, Applicative, ChainRec, Foldable, Functor, Monad, TypeConstructor,
};

impl<A> TypeConstructor for Seq<A> {
    type Inner = A;
    type WithType<B> = Seq<B>;
}

impl<A: Clone + 'static> Functor for Seq<A> {
    fn fmap<B, F>(self, function: F) -> Seq<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        self.map(function)
    }
}

impl<A: Clone + 'static> Applicative for Seq<A> {
    fn pure<B>(value: B) -> Seq<B>
    where
        B: 'static,
    {
        Seq::from_vec(vec![value])
    }

    fn map2<B, C, F>(self, other: Seq<B>, function: F) -> Seq<C>
    where
        B: Clone + 'static,
        C: Clone + 'static,
        F: Fn(A, B) -> C + 'static,
    {
        let function = Rc::new(function);
        self.chain(move |first| {
            let function = Rc::clone(&function);
            other.map(move |second| function(first.clone(), second))
        })
    }

    fn map3<B, C, D, F>(self, second: Seq<B>, third: Seq<C>, function: F) -> Seq<D>
    where
        B: Clone + 'static,
        C: Clone + 'static,
        D: Clone + 'static,
        F: Fn(A, B, C) -> D + 'static,
    {
        self.map2(second, |first, second| (first, second))
            .map2(third, move |(first, second), third| {
                function(first, second, third)
            })
    }

    fn apply<B, F>(self, functions: Seq<F>) -> Seq<B>
    where
        B: Clone + 'static,
        F: Fn(A) -> B + Clone + 'static,
    {
        self.ap(&functions)
    }
}

impl<A: Clone + 'static> Monad for Seq<A> {
    fn flat_map<B, F>(self, function: F) -> Seq<B>
    where
        B: Clone + 'static,
        F: Fn(A) -> Seq<B> + 'static,
    {
        self.chain(function)
    }
}

impl<A: Clone + 'static> Alternative for Seq<A> {
    fn empty<B>() -> Seq<B>
    where
        B: 'static,
    {
        Seq::empty()
    }

    fn alt<F>(self, alternative: F) -> Self
    where
        F: Fn() -> Self + 'static,
    {
        Seq::alt(&self, alternative)
    }
}

impl<A: Clone + 'static> ChainRec for Seq<A> {
    fn chain_rec<S, B, F>(seed: S, step: F) -> Seq<B>
    where
        S: Clone + 'static,
        B: Clone + 'static,
        F: Fn(S) -> Seq<Either<S, B>> + 'static,
    {
        Seq::<B>::chain_rec(seed, step)
    }
}

impl<A: Clone + 'static> Foldable for Seq<A> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        self.fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        self.collect()
            .into_iter()
            .rev()
            .fold(init, |accumulator, item| function(item, accumulator))
    }

    fn length(&self) -> usize {
        self.count()
    }

    fn is_empty(&self) -> bool {
        Seq::is_empty(self)
    }

    fn to_list(self) -> Vec<A> {
        self.collect()
    }

    fn find<P>(self, predicate: P) -> Option<A>
    where
        P: FnMut(&A) -> bool,
    {
        self.iter().find(predicate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pure_yields_a_single_element() {
        let lifted: Seq<i32> = <Seq<()>>::pure(42);
        assert_eq!(lifted.collect(), vec![42]);
    }

    #[rstest]
    fn fmap_delegates_to_map() {
        let doubled = Seq::of([1, 2, 3]).fmap(|n| n * 2);
        assert_eq!(doubled.collect(), vec![2, 4, 6]);
    }

    #[rstest]
    fn map2_pairs_every_combination_in_order() {
        let products = Seq::of([1, 2]).map2(Seq::of([10, 20]), |a, b| a * b);
        assert_eq!(products.collect(), vec![10, 20, 20, 40]);
    }

    #[rstest]
    fn apply_enumerates_functions_in_the_outer_loop() {
        let functions = Seq::of([(|n| n + 1) as fn(i32) -> i32, |n| n * 10]);
        let applied = Seq::of([1, 2]).apply(functions);
        assert_eq!(applied.collect(), vec![2, 3, 10, 20]);
    }

    #[rstest]
    fn alt_concatenates() {
        let combined = Alternative::alt(Seq::of([1, 2]), || Seq::of([3]));
        assert_eq!(combined.collect(), vec![1, 2, 3]);
    }

    #[rstest]
    fn chain_rec_matches_the_inherent_operator() {
        let via_trait: Seq<i32> = <Seq<()> as ChainRec>::chain_rec(1, |n| {
            if n < 4 {
                Seq::of([Either::Right(n), Either::Left(n + 1)])
            } else {
                Seq::of([Either::Right(n)])
            }
        });
        assert_eq!(via_trait.collect(), vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn foldable_surface_matches_terminals() {
        let values = Seq::of([1, 2, 3]);
        assert_eq!(values.clone().fold_left(0, |acc, n| acc + n), 6);
        assert_eq!(values.clone().fold_right(0, |n, acc| acc * 10 + n), 321);
        assert_eq!(values.length(), 3);
        assert_eq!(values.find(|&n| n > 1), Some(2));
    }
}
