//! Standalone functions over raw iterables.
//!
//! These functions accept anything implementing `IntoIterator` and cover
//! the operations the standard iterator adapters do not provide directly:
//! optional first/last elements, negative-index lookup, seedless folding,
//! chunking, `Display`-joining, and the depth-first recursive expansion
//! [`chain_rec`]. Each call builds a fresh traversal and holds no state
//! between calls.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::seq::iterable;
//!
//! assert_eq!(iterable::head([1, 2, 3]), Some(1));
//! assert_eq!(iterable::nth([1, 2, 3], -1), Some(3));
//! assert_eq!(
//!     iterable::group([1, 2, 3, 4, 5], 2).collect::<Vec<_>>(),
//!     vec![vec![1, 2], vec![3, 4], vec![5]],
//! );
//! ```

use std::collections::VecDeque;
use std::fmt::Display;

use crate::control::Either;

/// Returns the first element of an iterable, if any.
///
/// # Examples
///
/// ```rust
/// use lazyseq::seq::iterable::head;
///
/// assert_eq!(head([1, 2, 3]), Some(1));
/// assert_eq!(head(Vec::<i32>::new()), None);
/// ```
pub fn head<I: IntoIterator>(iterable: I) -> Option<I::Item> {
    iterable.into_iter().next()
}

/// Returns the last element of an iterable, if any, by walking to the end.
///
/// # Examples
///
/// ```rust
/// use lazyseq::seq::iterable::last;
///
/// assert_eq!(last([1, 2, 3]), Some(3));
/// assert_eq!(last(Vec::<i32>::new()), None);
/// ```
pub fn last<I: IntoIterator>(iterable: I) -> Option<I::Item> {
    iterable.into_iter().last()
}

/// Returns the element at the given index, if any.
///
/// Non-negative indices resolve with a single forward walk. Negative
/// indices count from the end (`-1` is the last element) and are resolved
/// with a trailing window of `|index|` elements, so the input is walked
/// once and never fully materialized.
///
/// # Examples
///
/// ```rust
/// use lazyseq::seq::iterable::nth;
///
/// assert_eq!(nth([1, 2, 3], 0), Some(1));
/// assert_eq!(nth([1, 2, 3], -1), Some(3));
/// assert_eq!(nth([1, 2, 3], 3), None);
/// assert_eq!(nth([1, 2, 3], -4), None);
/// ```
pub fn nth<I: IntoIterator>(iterable: I, index: i64) -> Option<I::Item> {
    let mut iterator = iterable.into_iter();
    if index >= 0 {
        return iterator.nth(usize::try_from(index).ok()?);
    }

    let window = usize::try_from(index.unsigned_abs()).ok()?;
    let mut trailing: VecDeque<I::Item> = VecDeque::with_capacity(window);
    for item in iterator {
        if trailing.len() == window {
            trailing.pop_front();
        }
        trailing.push_back(item);
    }

    // A full window means the input had at least |index| elements; its
    // front is then exactly the |index|-th element from the end.
    if trailing.len() == window {
        trailing.pop_front()
    } else {
        None
    }
}

/// Counts the elements of an iterable by traversing it.
///
/// Sized sources should prefer their own length accessor; `Seq` does this
/// automatically for array-backed sequences.
///
/// # Examples
///
/// ```rust
/// use lazyseq::seq::iterable::count;
///
/// assert_eq!(count([1, 2, 3]), 3);
/// ```
pub fn count<I: IntoIterator>(iterable: I) -> usize {
    iterable.into_iter().count()
}

/// Returns whether an iterable yields no elements, stopping at the first.
///
/// # Examples
///
/// ```rust
/// use lazyseq::seq::iterable::is_empty;
///
/// assert!(is_empty(Vec::<i32>::new()));
/// assert!(!is_empty([1]));
/// ```
pub fn is_empty<I: IntoIterator>(iterable: I) -> bool {
    iterable.into_iter().next().is_none()
}

/// Folds an iterable left-to-right, seeding with its first element.
///
/// # Panics
///
/// Panics with "reduce of empty sequence with no initial value" when the
/// iterable is empty. Use a seeded fold when emptiness is a legal input.
///
/// # Examples
///
/// ```rust
/// use lazyseq::seq::iterable::reduce;
///
/// assert_eq!(reduce([1, 2, 3, 4], |acc, n| acc + n), 10);
/// ```
pub fn reduce<I, F>(iterable: I, function: F) -> I::Item
where
    I: IntoIterator,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    let mut iterator = iterable.into_iter();
    let Some(seed) = iterator.next() else {
        panic!("reduce of empty sequence with no initial value")
    };
    iterator.fold(seed, function)
}

/// Joins the elements of an iterable into a string with a separator.
///
/// # Examples
///
/// ```rust
/// use lazyseq::seq::iterable::join;
///
/// assert_eq!(join(["a", "b", "c"], "-"), "a-b-c");
/// assert_eq!(join([1, 2, 3], ","), "1,2,3");
/// ```
pub fn join<I>(iterable: I, separator: &str) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    iterable
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Splits an iterable into chunks of `size` elements.
///
/// Chunks preserve order; the final chunk may be shorter when the element
/// count is not a multiple of `size`. A `size` of zero yields nothing.
///
/// # Examples
///
/// ```rust
/// use lazyseq::seq::iterable::group;
///
/// let chunks: Vec<Vec<i32>> = group([1, 2, 3, 4, 5, 6, 7], 3).collect();
/// assert_eq!(chunks, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]);
///
/// assert_eq!(group(Vec::<i32>::new(), 3).count(), 0);
/// ```
pub fn group<I: IntoIterator>(iterable: I, size: usize) -> Chunks<I::IntoIter> {
    Chunks {
        inner: iterable.into_iter(),
        size,
    }
}

/// Iterator over fixed-size chunks of an underlying iterator.
///
/// Created by [`group`].
#[derive(Debug, Clone)]
pub struct Chunks<I> {
    inner: I,
    size: usize,
}

impl<I: Iterator> Iterator for Chunks<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Vec<I::Item>> {
        if self.size == 0 {
            return None;
        }

        let mut chunk = Vec::with_capacity(self.size);
        for _ in 0..self.size {
            match self.inner.next() {
                Some(item) => chunk.push(item),
                None => break,
            }
        }

        if chunk.is_empty() { None } else { Some(chunk) }
    }
}

/// Lazily expands a seed into a stream of results, depth-first.
///
/// The step function maps a state to a batch of markers: `Right(b)` emits
/// `b` as output, `Left(a)` queues state `a` for further expansion. The
/// traversal maintains an explicit work list instead of recursing:
///
/// 1. The list starts with `step(seed)`'s markers, in order.
/// 2. The *front* marker is removed; a `Right` is yielded immediately, a
///    `Left` is expanded and its markers are put back **at the front**,
///    preserving their relative order.
///
/// Front-insertion is what makes the expansion depth-first: the newest
/// branch is exhausted before its older siblings resume. The two possible
/// marker orders are therefore observably different:
///
/// ```rust
/// use lazyseq::control::Either::{Left, Right};
/// use lazyseq::seq::iterable::chain_rec;
///
/// // Finish before continuing: ascending output.
/// let ascending: Vec<i32> = chain_rec(1, |n| {
///     if n < 5 { vec![Right(n), Left(n + 1)] } else { vec![Right(n)] }
/// })
/// .collect();
/// assert_eq!(ascending, vec![1, 2, 3, 4, 5]);
///
/// // Continue before finishing: the deepest state emits first.
/// let descending: Vec<i32> = chain_rec(1, |n| {
///     if n < 5 { vec![Left(n + 1), Right(n)] } else { vec![Right(n)] }
/// })
/// .collect();
/// assert_eq!(descending, vec![5, 4, 3, 2, 1]);
/// ```
///
/// The iterator does no work until polled, and each `next()` call runs
/// only until the next `Right` surfaces. Stack usage is constant in the
/// expansion depth; the work list lives on the heap.
///
/// There is no cycle detection and no depth limit: a step function that
/// always continues produces an iterator that never ends.
pub fn chain_rec<A, B, I, F>(seed: A, step: F) -> ChainRecIter<A, B, F>
where
    F: FnMut(A) -> I,
    I: IntoIterator<Item = Either<A, B>>,
{
    ChainRecIter {
        queue: VecDeque::new(),
        seed: Some(seed),
        step,
    }
}

/// Iterator driving the depth-first expansion of [`chain_rec`].
///
/// The work list is a `VecDeque`, so putting an expansion back at the
/// front costs time proportional to that expansion alone, never to the
/// whole queue.
pub struct ChainRecIter<A, B, F> {
    queue: VecDeque<Either<A, B>>,
    seed: Option<A>,
    step: F,
}

impl<A, B, I, F> Iterator for ChainRecIter<A, B, F>
where
    F: FnMut(A) -> I,
    I: IntoIterator<Item = Either<A, B>>,
{
    type Item = B;

    fn next(&mut self) -> Option<B> {
        if let Some(seed) = self.seed.take() {
            self.queue = (self.step)(seed).into_iter().collect();
        }

        while let Some(marker) = self.queue.pop_front() {
            match marker {
                Either::Right(done) => return Some(done),
                Either::Left(state) => {
                    let expansion: Vec<Either<A, B>> = (self.step)(state).into_iter().collect();
                    for marker in expansion.into_iter().rev() {
                        self.queue.push_front(marker);
                    }
                }
            }
        }

        None
    }
}
