//! Behavioral tests for the lazy sequence type.
//!
//! These tests cover the construction, transformation, and terminal
//! operations of `Seq`, with particular attention to the contracts that
//! are easy to get wrong: laziness, re-iterability, the known-size
//! short-circuit, and ordering guarantees.

use lazyseq::seq;
use lazyseq::seq::Seq;
use rstest::rstest;
use std::cell::Cell;
use std::rc::Rc;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn of_yields_values_in_order() {
    assert_eq!(Seq::of([1, 2, 3]).collect(), vec![1, 2, 3]);
}

#[rstest]
fn seq_macro_matches_of() {
    assert_eq!(seq![1, 2, 3].collect(), vec![1, 2, 3]);
    let empty: Seq<i32> = seq![];
    assert!(empty.is_empty());
}

#[rstest]
#[case(3, 1, vec![0, 1, 2])]
#[case(3, 0, vec![0, 1, 2])]
#[case(6, 2, vec![0, 2, 4])]
#[case(6, -2, vec![0, 2, 4])]
#[case(0, 1, vec![])]
#[case(-3, 1, vec![])]
fn to_counts_up_from_zero(#[case] end: i64, #[case] step: i64, #[case] expected: Vec<i64>) {
    assert_eq!(Seq::to(end, step).collect(), expected);
}

#[rstest]
#[case(1, 3, 1, vec![1, 2])]
#[case(1, 6, 2, vec![1, 3, 5])]
#[case(3, 1, 1, vec![3, 2])]
#[case(1, 3, -1, vec![1, 2])]
#[case(5, 5, 1, vec![])]
fn range_counts_towards_end(
    #[case] from: i64,
    #[case] end: i64,
    #[case] step: i64,
    #[case] expected: Vec<i64>,
) {
    assert_eq!(Seq::range(from, end, step).collect(), expected);
}

#[rstest]
fn make_by_applies_the_function_to_each_index() {
    assert_eq!(Seq::make_by(3, |n| n * 2).collect(), vec![0, 2, 4]);
    assert!(Seq::make_by(0, |n| n).is_empty());
}

#[rstest]
fn replicate_repeats_the_value() {
    assert_eq!(Seq::replicate('a', 2).collect(), vec!['a', 'a']);
    assert!(Seq::replicate('a', 0).is_empty());
}

#[rstest]
fn from_fn_wraps_a_producer_without_copying() {
    let naturals = Seq::from_fn(|| 1..=4);
    assert_eq!(naturals.collect(), vec![1, 2, 3, 4]);
}

#[rstest]
fn from_iterator_collects_into_a_sequence() {
    let collected: Seq<i32> = (1..=3).collect();
    assert_eq!(collected.collect(), vec![1, 2, 3]);
}

// =============================================================================
// Laziness and re-iterability
// =============================================================================

#[rstest]
fn map_does_not_run_until_a_terminal_operation() {
    let calls = Rc::new(Cell::new(0_usize));
    let spy = Rc::clone(&calls);

    let mapped = Seq::of([1, 2, 3]).map(move |n| {
        spy.set(spy.get() + 1);
        n * 2
    });

    assert_eq!(calls.get(), 0, "map must not evaluate eagerly");
    assert_eq!(mapped.collect(), vec![2, 4, 6]);
    assert_eq!(calls.get(), 3);
}

#[rstest]
fn filter_does_not_run_until_a_terminal_operation() {
    let calls = Rc::new(Cell::new(0_usize));
    let spy = Rc::clone(&calls);

    let filtered = Seq::of([1, 2, 3, 4]).filter(move |n| {
        spy.set(spy.get() + 1);
        n % 2 == 0
    });

    assert_eq!(calls.get(), 0);
    assert_eq!(filtered.collect(), vec![2, 4]);
    assert_eq!(calls.get(), 4);
}

#[rstest]
fn collect_twice_returns_equal_arrays() {
    let squares = Seq::to(5, 1).map(|n| n * n);
    assert_eq!(squares.collect(), squares.collect());
}

#[rstest]
fn results_are_not_cached_between_traversals() {
    let calls = Rc::new(Cell::new(0_usize));
    let spy = Rc::clone(&calls);

    let mapped = Seq::of([1, 2]).map(move |n| {
        spy.set(spy.get() + 1);
        n
    });

    let _ = mapped.collect();
    let _ = mapped.collect();
    assert_eq!(calls.get(), 4, "each traversal re-applies the function");
}

#[rstest]
fn a_sequence_can_be_iterated_with_a_for_loop() {
    let values = Seq::of([1, 2, 3]);
    let mut total = 0;
    for value in &values {
        total += value;
    }
    assert_eq!(total, 6);
    // Still usable afterwards.
    assert_eq!(values.count(), 3);
}

// =============================================================================
// Transformations
// =============================================================================

#[rstest]
fn concat_appends_the_other_sequence() {
    let joined = Seq::of([1, 2]).concat(&Seq::of([3, 4]));
    assert_eq!(joined.collect(), vec![1, 2, 3, 4]);
}

#[rstest]
fn push_and_unshift_add_batches_at_either_end() {
    assert_eq!(Seq::of([1]).push(vec![2, 3]).collect(), vec![1, 2, 3]);
    assert_eq!(Seq::of([1]).unshift(vec![2, 3]).collect(), vec![2, 3, 1]);
}

#[rstest]
fn alt_is_lazy_in_its_alternative() {
    let calls = Rc::new(Cell::new(0_usize));
    let spy = Rc::clone(&calls);

    let combined = Seq::of([1, 2]).alt(move || {
        spy.set(spy.get() + 1);
        Seq::of([3])
    });

    assert_eq!(calls.get(), 0, "the thunk only runs during traversal");
    assert_eq!(combined.collect(), vec![1, 2, 3]);
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn ap_loops_functions_outside_and_arguments_inside() {
    let functions = Seq::of([(|n| n + 1) as fn(i32) -> i32, |n| n * 10]);
    let applied = Seq::of([1, 2]).ap(&functions);
    assert_eq!(applied.collect(), vec![2, 3, 10, 20]);
}

#[rstest]
fn chain_expands_each_element_depth_first() {
    let expanded = Seq::of([1, 2, 3]).chain(|n| Seq::replicate(n.to_string(), n as usize));
    assert_eq!(expanded.collect(), vec!["1", "2", "2", "3", "3", "3"]);
}

#[rstest]
fn chain_with_index_passes_positions() {
    let indexed = Seq::of(["a", "b"])
        .chain_with_index(|index, value| Seq::of([index.to_string(), value.to_string()]));
    assert_eq!(indexed.collect(), vec!["0", "a", "1", "b"]);
}

#[rstest]
fn flatten_concatenates_inner_sequences() {
    let nested = Seq::of([Seq::of([1]), Seq::of([2, 3]), Seq::empty()]);
    assert_eq!(nested.flatten().collect(), vec![1, 2, 3]);
}

#[rstest]
fn map_then_flatten_equals_chain() {
    let doubled_nested = Seq::of([1, 2]).map(|n| Seq::of([n, n * 10])).flatten();
    let chained = Seq::of([1, 2]).chain(|n| Seq::of([n, n * 10]));
    assert_eq!(doubled_nested.collect(), chained.collect());
}

#[rstest]
fn zip_stops_at_the_shorter_sequence() {
    let pairs = Seq::of([1, 2, 3]).zip(&Seq::of([10, 20]));
    assert_eq!(pairs.collect(), vec![(1, 10), (2, 20)]);

    let pairs = Seq::of([1, 2]).zip(&Seq::of([10, 20, 30]));
    assert_eq!(pairs.collect(), vec![(1, 10), (2, 20)]);
}

#[rstest]
fn zip_works_across_different_source_kinds() {
    let items = Seq::of([1, 2, 3]);
    let generated = Seq::from_fn(|| (0..2).map(|n| n * 100));
    assert_eq!(items.zip(&generated).collect(), vec![(1, 0), (2, 100)]);
}

#[rstest]
fn zip_with_combines_pairs() {
    let sums = Seq::of([1, 2, 3]).zip_with(&Seq::of([0, 1]), |a, b| a + b);
    assert_eq!(sums.collect(), vec![1, 3]);
}

#[rstest]
fn unzip_splits_pairs_into_parallel_vectors() {
    let pairs = Seq::of([(1, 'a'), (2, 'b')]);
    assert_eq!(pairs.unzip(), (vec![1, 2], vec!['a', 'b']));
}

#[rstest]
fn zip_then_unzip_round_trips() {
    let left = Seq::of([1, 2]);
    let right = Seq::of(['x', 'y']);
    let (first, second) = left.zip(&right).unzip();
    assert_eq!(first, vec![1, 2]);
    assert_eq!(second, vec!['x', 'y']);
}

#[rstest]
fn group_chunks_with_a_short_final_chunk() {
    let chunks = Seq::of([1, 2, 3, 4, 5, 6, 7]).group(3);
    assert_eq!(chunks.collect(), vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]);
}

#[rstest]
fn group_of_empty_or_zero_size_is_empty() {
    assert!(Seq::<i32>::empty().group(3).is_empty());
    assert!(Seq::of([1, 2, 3]).group(0).is_empty());
}

// =============================================================================
// Terminal operations
// =============================================================================

#[rstest]
fn count_short_circuits_for_array_backed_sources() {
    #[derive(Debug)]
    struct CloneSpy(Rc<Cell<usize>>);

    impl Clone for CloneSpy {
        fn clone(&self) -> Self {
            self.0.set(self.0.get() + 1);
            Self(Rc::clone(&self.0))
        }
    }

    let clones = Rc::new(Cell::new(0_usize));
    let values = Seq::from_vec(vec![
        CloneSpy(Rc::clone(&clones)),
        CloneSpy(Rc::clone(&clones)),
        CloneSpy(Rc::clone(&clones)),
    ]);

    assert_eq!(values.count(), 3);
    assert!(!values.is_empty());
    assert_eq!(clones.get(), 0, "sized sources must not be traversed");
}

#[rstest]
fn count_traverses_producer_backed_sources() {
    let produced = Rc::new(Cell::new(0_usize));
    let spy = Rc::clone(&produced);
    let generated = Seq::from_fn(move || {
        spy.set(spy.get() + 1);
        0..10
    });

    assert_eq!(generated.count(), 10);
    assert_eq!(produced.get(), 1);
}

#[rstest]
fn to_array_shares_the_buffer_of_array_backed_sources() {
    let values = Seq::from_vec(vec![1, 2, 3]);
    assert!(Rc::ptr_eq(&values.to_array(), &values.to_array()));
}

#[rstest]
fn to_array_materializes_producer_backed_sources() {
    let generated = Seq::from_fn(|| 1..=3);
    assert_eq!(*generated.to_array(), vec![1, 2, 3]);
}

#[rstest]
fn fold_uses_the_explicit_seed() {
    assert_eq!(Seq::of([2, 3, 4]).fold(1, |acc, n| acc + n), 10);
    assert_eq!(Seq::<i32>::empty().fold(7, |acc, n| acc + n), 7);
}

#[rstest]
fn reduce_seeds_with_the_first_element() {
    assert_eq!(Seq::of([1, 2, 3, 4]).reduce(|acc, n| acc + n), 10);
    assert_eq!(Seq::of([5]).reduce(|acc, n| acc + n), 5);
}

#[rstest]
#[should_panic(expected = "reduce of empty sequence with no initial value")]
fn reduce_of_empty_sequence_panics() {
    let _ = Seq::<i32>::empty().reduce(|acc, n| acc + n);
}

#[rstest]
fn join_uses_the_separator() {
    assert_eq!(Seq::of(["a", "b", "c"]).join("-"), "a-b-c");
    assert_eq!(Seq::of([1, 2, 3]).join(","), "1,2,3");
    assert_eq!(Seq::<i32>::empty().join(","), "");
}

#[rstest]
fn head_and_last_return_optional_ends() {
    let values = Seq::of([1, 2, 3]);
    assert_eq!(values.head(), Some(1));
    assert_eq!(values.last(), Some(3));

    let empty = Seq::<i32>::empty();
    assert_eq!(empty.head(), None);
    assert_eq!(empty.last(), None);
}

#[rstest]
fn last_walks_producer_backed_sources_to_the_end() {
    let generated = Seq::from_fn(|| 1..=100);
    assert_eq!(generated.last(), Some(100));
}

#[rstest]
#[case(0, Some(1))]
#[case(2, Some(3))]
#[case(3, None)]
#[case(-1, Some(3))]
#[case(-3, Some(1))]
#[case(-4, None)]
fn nth_supports_negative_indices(#[case] index: i64, #[case] expected: Option<i32>) {
    assert_eq!(Seq::of([1, 2, 3]).nth(index), expected);
    assert_eq!(Seq::from_fn(|| 1..=3).nth(index), expected);
}

#[rstest]
fn head_only_evaluates_the_first_element() {
    let calls = Rc::new(Cell::new(0_usize));
    let spy = Rc::clone(&calls);
    let mapped = Seq::of([1, 2, 3]).map(move |n| {
        spy.set(spy.get() + 1);
        n
    });

    assert_eq!(mapped.head(), Some(1));
    assert_eq!(calls.get(), 1, "head must not force the rest");
}

// =============================================================================
// Equality, debug, ordering of composed pipelines
// =============================================================================

#[rstest]
fn sequences_compare_by_traversal() {
    assert_eq!(Seq::of([1, 2, 3]), Seq::from_fn(|| 1..=3));
    assert_ne!(Seq::of([1, 2]), Seq::of([1, 2, 3]));
}

#[rstest]
fn debug_lists_array_backed_elements() {
    assert_eq!(format!("{:?}", Seq::of([1, 2])), "[1, 2]");
    assert_eq!(format!("{:?}", Seq::from_fn(|| 0..2)), "Seq(\"<lazy>\")");
}

#[rstest]
fn composed_pipeline_preserves_cartesian_order() {
    // Cross product via map + flatten, mirroring nested loops.
    let product = Seq::to(2, 1)
        .map(|a| Seq::to(2, 1).map(move |b| (a, b)))
        .flatten();
    assert_eq!(product.collect(), vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
}
