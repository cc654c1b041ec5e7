//! The lazy, re-iterable sequence type.
//!
//! A [`Seq`] is a recipe for producing a stream of values. It stores either
//! an owned element buffer or a zero-argument producer closure - never a
//! half-consumed cursor - so every traversal starts from the beginning and
//! the same `Seq` can be walked any number of times. Transformations are
//! pure: each one returns a new `Seq` whose producer closes over its
//! parent's, and no user callback runs until a terminal operation forces
//! the traversal.

use std::fmt;
use std::rc::Rc;

use static_assertions::{assert_impl_all, assert_not_impl_any};

use super::iterable;
use crate::control::Either;

/// The two supported source representations of a sequence.
///
/// `Items` carries the known-size capability: operations such as `count`,
/// `is_empty`, `last`, and `nth` resolve against the buffer without
/// traversing. `Thunk` is the general producer-backed form, traversed
/// afresh on every walk.
enum Source<A> {
    Items(Rc<Vec<A>>),
    Thunk(Rc<dyn Fn() -> Box<dyn Iterator<Item = A>>>),
}

impl<A> Clone for Source<A> {
    fn clone(&self) -> Self {
        match self {
            Self::Items(items) => Self::Items(Rc::clone(items)),
            Self::Thunk(producer) => Self::Thunk(Rc::clone(producer)),
        }
    }
}

/// A lazy, re-iterable sequence of values.
///
/// `Seq<A>` represents a stream that can be produced on demand, not a
/// collection held in memory. Calling a transformation builds a new
/// sequence; calling a terminal operation (`collect`, `count`, `reduce`,
/// `head`, iteration, ...) produces a fresh traversal. Traversing twice
/// yields the same logical stream as long as the underlying definition is
/// pure.
///
/// Cloning a `Seq` is cheap: sequences share their sources through
/// reference counting and contain no mutable state, which is exactly what
/// makes re-iteration safe. The type is deliberately single-threaded
/// (`Rc`-based, not `Send`).
///
/// # Examples
///
/// ```rust
/// use lazyseq::seq::Seq;
///
/// let pipeline = Seq::to(10, 1)
///     .filter(|n| n % 2 == 1)
///     .map(|n| n * 10);
///
/// // Nothing has been evaluated yet.
/// assert_eq!(pipeline.collect(), vec![10, 30, 50, 70, 90]);
///
/// // A `Seq` is a recipe: it can be consumed again.
/// assert_eq!(pipeline.count(), 5);
/// ```
pub struct Seq<A> {
    source: Source<A>,
}

impl<A> Clone for Seq<A> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
        }
    }
}

assert_impl_all!(Seq<i32>: Clone, Default);
assert_not_impl_any!(Seq<i32>: Send, Sync);

// =============================================================================
// Construction
// =============================================================================

impl<A> Seq<A> {
    /// Creates a sequence owning the given values.
    ///
    /// The resulting sequence is array-backed: its size is known without
    /// traversal and `to_array` shares the buffer instead of copying.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::seq::Seq;
    ///
    /// let values = Seq::from_vec(vec![1, 2, 3]);
    /// assert_eq!(values.count(), 3);
    /// ```
    #[inline]
    pub fn from_vec(values: Vec<A>) -> Self {
        Self {
            source: Source::Items(Rc::new(values)),
        }
    }

    /// Creates a sequence yielding exactly the given values, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::seq::Seq;
    ///
    /// let values = Seq::of([1, 2, 3]);
    /// assert_eq!(values.collect(), vec![1, 2, 3]);
    /// ```
    pub fn of<I: IntoIterator<Item = A>>(values: I) -> Self {
        Self::from_vec(values.into_iter().collect())
    }

    /// Creates the empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::seq::Seq;
    ///
    /// assert!(Seq::<i32>::empty().is_empty());
    /// ```
    #[inline]
    pub fn empty() -> Self {
        Self::from_vec(Vec::new())
    }
}

impl<A: 'static> Seq<A> {
    /// Wraps a producer function into a sequence without copying anything.
    ///
    /// The producer is invoked once per traversal and must return a fresh
    /// iterable each time; the sequence stores the producer itself, never
    /// an iteration cursor. Re-iterability therefore holds exactly when
    /// the producer is pure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::seq::Seq;
    ///
    /// let naturals = Seq::from_fn(|| (0..4).map(|n| n + 1));
    /// assert_eq!(naturals.collect(), vec![1, 2, 3, 4]);
    /// assert_eq!(naturals.collect(), vec![1, 2, 3, 4]);
    /// ```
    pub fn from_fn<I, F>(producer: F) -> Self
    where
        F: Fn() -> I + 'static,
        I: IntoIterator<Item = A>,
        I::IntoIter: 'static,
    {
        Self {
            source: Source::Thunk(Rc::new(move || {
                Box::new(producer().into_iter()) as Box<dyn Iterator<Item = A>>
            })),
        }
    }

    /// Creates a sequence of length `n` whose elements are `f(0)` through
    /// `f(n - 1)`.
    ///
    /// The function runs during traversal, not at construction, and runs
    /// again on every traversal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::seq::Seq;
    ///
    /// let doubled = Seq::make_by(3, |n| n * 2);
    /// assert_eq!(doubled.collect(), vec![0, 2, 4]);
    /// assert!(Seq::make_by(0, |n| n).is_empty());
    /// ```
    pub fn make_by<F>(n: usize, function: F) -> Self
    where
        F: Fn(usize) -> A + 'static,
    {
        let function = Rc::new(function);
        Self::from_fn(move || {
            let function = Rc::clone(&function);
            (0..n).map(move |index| function(index))
        })
    }
}

impl Seq<i64> {
    /// Creates the sequence `0, step, 2 * step, ..` of integers strictly
    /// below `end`.
    ///
    /// The step is absolute-valued and clamped to a minimum of 1 before
    /// use. An `end` of zero or less gives the empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::seq::Seq;
    ///
    /// assert_eq!(Seq::to(3, 1).collect(), vec![0, 1, 2]);
    /// assert_eq!(Seq::to(3, 0).collect(), vec![0, 1, 2]);
    /// assert_eq!(Seq::to(6, 2).collect(), vec![0, 2, 4]);
    /// assert!(Seq::to(0, 1).is_empty());
    /// ```
    pub fn to(end: i64, step: i64) -> Self {
        let step = normalize_step(step);
        Self::from_fn(move || {
            std::iter::successors(Some(0i64), move |current| current.checked_add(step))
                .take_while(move |&current| current < end)
        })
    }

    /// Creates an integer sequence from `from` towards `end`.
    ///
    /// Counts upward while strictly below `end`, or - when `from > end` -
    /// downward while strictly above `end`. The step is absolute-valued
    /// and clamped to a minimum of 1, so the sign of `step` never changes
    /// the direction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::seq::Seq;
    ///
    /// assert_eq!(Seq::range(1, 3, 1).collect(), vec![1, 2]);
    /// assert_eq!(Seq::range(1, 6, 2).collect(), vec![1, 3, 5]);
    /// assert_eq!(Seq::range(3, 1, 1).collect(), vec![3, 2]);
    /// assert_eq!(Seq::range(1, 3, -1).collect(), vec![1, 2]);
    /// ```
    pub fn range(from: i64, end: i64, step: i64) -> Self {
        let step = normalize_step(step);
        Self::from_fn(move || -> Box<dyn Iterator<Item = i64>> {
            if from > end {
                Box::new(
                    std::iter::successors(Some(from), move |current| current.checked_sub(step))
                        .take_while(move |&current| current > end),
                )
            } else {
                Box::new(
                    std::iter::successors(Some(from), move |current| current.checked_add(step))
                        .take_while(move |&current| current < end),
                )
            }
        })
    }
}

/// Absolute value of a range step, floored to 1.
const fn normalize_step(step: i64) -> i64 {
    let magnitude = step.saturating_abs();
    if magnitude < 1 { 1 } else { magnitude }
}

impl<A: Clone + 'static> Seq<A> {
    /// Creates a sequence repeating `value` exactly `n` times.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::seq::Seq;
    ///
    /// assert_eq!(Seq::replicate('a', 2).collect(), vec!['a', 'a']);
    /// assert!(Seq::replicate('a', 0).is_empty());
    /// ```
    pub fn replicate(value: A, n: usize) -> Self {
        Self::make_by(n, move |_| value.clone())
    }
}

// =============================================================================
// Traversal
// =============================================================================

impl<A: Clone + 'static> Seq<A> {
    /// Starts a fresh traversal of this sequence.
    pub(crate) fn produce(&self) -> Box<dyn Iterator<Item = A>> {
        match &self.source {
            Source::Items(items) => {
                let items = Rc::clone(items);
                let length = items.len();
                Box::new((0..length).map(move |index| items[index].clone()))
            }
            Source::Thunk(producer) => producer(),
        }
    }

    /// Returns an iterator over a fresh traversal of this sequence.
    ///
    /// Each call starts from the beginning; the sequence itself is not
    /// consumed or advanced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::seq::Seq;
    ///
    /// let values = Seq::of([1, 2, 3]);
    /// assert_eq!(values.iter().max(), Some(3));
    /// assert_eq!(values.iter().min(), Some(1));
    /// ```
    pub fn iter(&self) -> SeqIter<A> {
        SeqIter {
            inner: self.produce(),
        }
    }
}

// =============================================================================
// Transformations
// =============================================================================

impl<A: Clone + 'static> Seq<A> {
    /// Returns a sequence applying `function` to every element.
    ///
    /// The function is not invoked until a terminal operation runs, and it
    /// runs again on every traversal - results are never cached.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::seq::Seq;
    ///
    /// let doubled = Seq::of([1, 2, 3]).map(|n| n * 2);
    /// assert_eq!(doubled.collect(), vec![2, 4, 6]);
    /// ```
    pub fn map<B, F>(&self, function: F) -> Seq<B>
    where
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        let source = self.clone();
        let function = Rc::new(function);
        Seq::from_fn(move || {
            let function = Rc::clone(&function);
            source.produce().map(move |value| function(value))
        })
    }

    /// Returns a sequence keeping only the elements matching the
    /// predicate, in their original order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::seq::Seq;
    ///
    /// let even = Seq::of([1, 2, 3, 4]).filter(|n| n % 2 == 0);
    /// assert_eq!(even.collect(), vec![2, 4]);
    /// ```
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&A) -> bool + 'static,
    {
        let source = self.clone();
        let predicate = Rc::new(predicate);
        Self::from_fn(move || {
            let predicate = Rc::clone(&predicate);
            source.produce().filter(move |value| predicate(value))
        })
    }

    /// Returns a sequence yielding this sequence's elements followed by
    /// the other's.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::seq::Seq;
    ///
    /// let joined = Seq::of([1, 2]).concat(&Seq::of([3, 4]));
    /// assert_eq!(joined.collect(), vec![1, 2, 3, 4]);
    /// ```
    pub fn concat(&self, other: &Self) -> Self {
        let first = self.clone();
        let second = other.clone();
        Self::from_fn(move || first.produce().chain(second.produce()))
    }

    /// Returns a sequence with the given values appended at the end.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::seq::Seq;
    ///
    /// assert_eq!(Seq::of([1]).push(vec![2, 3]).collect(), vec![1, 2, 3]);
    /// ```
    pub fn push(&self, values: Vec<A>) -> Self {
        self.concat(&Self::from_vec(values))
    }

    /// Returns a sequence with the given values prepended at the start.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::seq::Seq;
    ///
    /// assert_eq!(Seq::of([1]).unshift(vec![2, 3]).collect(), vec![2, 3, 1]);
    /// ```
    pub fn unshift(&self, values: Vec<A>) -> Self {
        Self::from_vec(values).concat(self)
    }

    /// Concat-style disjunction with a lazily produced alternative.
    ///
    /// Yields this sequence's elements followed by the elements of
    /// `alternative()`. The thunk is invoked only when a traversal reaches
    /// the end of this sequence's elements - once per traversal, never at
    /// construction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::seq::Seq;
    ///
    /// let combined = Seq::of([1, 2]).alt(|| Seq::of([3]));
    /// assert_eq!(combined.collect(), vec![1, 2, 3]);
    /// ```
    pub fn alt<F>(&self, alternative: F) -> Self
    where
        F: Fn() -> Self + 'static,
    {
        let first = self.clone();
        let alternative = Rc::new(alternative);
        Self::from_fn(move || {
            let alternative = Rc::clone(&alternative);
            first
                .produce()
                .chain(std::iter::once(()).flat_map(move |()| alternative().produce()))
        })
    }

    /// Applicative apply: applies every function to every element.
    ///
    /// The outer loop runs over the functions and the inner loop over this
    /// sequence's elements, so for functions `[f, g]` and elements
    /// `[x, y]` the result is `[f(x), f(y), g(x), g(y)]`. This ordering is
    /// part of the contract.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::seq::Seq;
    ///
    /// let arguments = Seq::of([1, 2]);
    /// let functions = Seq::of([(|n| n + 10) as fn(i32) -> i32, |n| n * 100]);
    /// assert_eq!(arguments.ap(&functions).collect(), vec![11, 12, 100, 200]);
    /// ```
    pub fn ap<B, F>(&self, functions: &Seq<F>) -> Seq<B>
    where
        B: Clone + 'static,
        F: Fn(A) -> B + Clone + 'static,
    {
        let arguments = self.clone();
        let functions = functions.clone();
        Seq::from_fn(move || {
            let arguments = arguments.clone();
            functions
                .produce()
                .flat_map(move |function| arguments.produce().map(move |value| function(value)))
        })
    }

    /// Monadic bind: yields every element of `function(a)`, in order,
    /// before moving to the next element.
    ///
    /// The expansion is depth-first and left-to-right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::seq::Seq;
    ///
    /// let repeated = Seq::of([1, 2, 3])
    ///     .chain(|n| Seq::replicate(n.to_string(), n as usize));
    /// assert_eq!(repeated.collect(), vec!["1", "2", "2", "3", "3", "3"]);
    /// ```
    pub fn chain<B, F>(&self, function: F) -> Seq<B>
    where
        B: Clone + 'static,
        F: Fn(A) -> Seq<B> + 'static,
    {
        let source = self.clone();
        let function = Rc::new(function);
        Seq::from_fn(move || {
            let function = Rc::clone(&function);
            source
                .produce()
                .flat_map(move |value| function(value).produce())
        })
    }

    /// Like [`chain`](Self::chain), additionally passing the zero-based
    /// element index to the function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::seq::Seq;
    ///
    /// let indexed = Seq::of(["a", "b"])
    ///     .chain_with_index(|index, value| Seq::of([index.to_string(), value.to_string()]));
    /// assert_eq!(indexed.collect(), vec!["0", "a", "1", "b"]);
    /// ```
    pub fn chain_with_index<B, F>(&self, function: F) -> Seq<B>
    where
        B: Clone + 'static,
        F: Fn(usize, A) -> Seq<B> + 'static,
    {
        let source = self.clone();
        let function = Rc::new(function);
        Seq::from_fn(move || {
            let function = Rc::clone(&function);
            source
                .produce()
                .enumerate()
                .flat_map(move |(index, value)| function(index, value).produce())
        })
    }

    /// Pairwise-combines two sequences with a function, stopping as soon
    /// as either side is exhausted.
    ///
    /// Each traversal opens an independent cursor over each source, so the
    /// sources need not share a representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::seq::Seq;
    ///
    /// let sums = Seq::of([1, 2, 3]).zip_with(&Seq::of([10, 20]), |a, b| a + b);
    /// assert_eq!(sums.collect(), vec![11, 22]);
    /// ```
    pub fn zip_with<B, C, F>(&self, other: &Seq<B>, function: F) -> Seq<C>
    where
        B: Clone + 'static,
        C: 'static,
        F: Fn(A, B) -> C + 'static,
    {
        let left = self.clone();
        let right = other.clone();
        let function = Rc::new(function);
        Seq::from_fn(move || {
            let function = Rc::clone(&function);
            left.produce()
                .zip(right.produce())
                .map(move |(first, second)| function(first, second))
        })
    }

    /// Pairwise-combines two sequences into tuples; the shorter side wins
    /// and excess elements of the longer side are discarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::seq::Seq;
    ///
    /// let pairs = Seq::of([1, 2, 3]).zip(&Seq::of(["a", "b"]));
    /// assert_eq!(pairs.collect(), vec![(1, "a"), (2, "b")]);
    /// ```
    pub fn zip<B>(&self, other: &Seq<B>) -> Seq<(A, B)>
    where
        B: Clone + 'static,
    {
        self.zip_with(other, |first, second| (first, second))
    }

    /// Splits the sequence into chunks of `size` elements.
    ///
    /// The final chunk may be shorter; a `size` of zero gives the empty
    /// sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::seq::Seq;
    ///
    /// let chunks = Seq::of([1, 2, 3, 4, 5, 6, 7]).group(3);
    /// assert_eq!(
    ///     chunks.collect(),
    ///     vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]],
    /// );
    /// assert!(Seq::<i32>::empty().group(3).is_empty());
    /// ```
    pub fn group(&self, size: usize) -> Seq<Vec<A>> {
        let source = self.clone();
        Seq::from_fn(move || iterable::group(source.produce(), size))
    }

    /// Lazily expands `seed` into a sequence of results, depth-first.
    ///
    /// The step function maps a state to a sequence of markers:
    /// `Right(b)` emits `b`, `Left(a)` continues the expansion with state
    /// `a`. Markers are processed front-first and an expansion is put back
    /// at the front of the work list, so the newest branch is exhausted
    /// before its siblings resume - see [`iterable::chain_rec`] for the
    /// exact algorithm and ordering guarantees.
    ///
    /// The resulting sequence is re-iterable: every traversal restarts the
    /// expansion from `seed` with a fresh work list. Stack usage stays
    /// constant regardless of depth. A step function with no finishing
    /// case produces a sequence whose traversal never ends; the operator
    /// performs no cycle detection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::control::Either::{Left, Right};
    /// use lazyseq::seq::Seq;
    ///
    /// let ascending = Seq::chain_rec(1, |n| {
    ///     if n < 5 {
    ///         Seq::of([Right(n), Left(n + 1)])
    ///     } else {
    ///         Seq::of([Right(n)])
    ///     }
    /// });
    /// assert_eq!(ascending.collect(), vec![1, 2, 3, 4, 5]);
    /// ```
    pub fn chain_rec<S, F>(seed: S, step: F) -> Self
    where
        S: Clone + 'static,
        F: Fn(S) -> Seq<Either<S, A>> + 'static,
    {
        let step = Rc::new(step);
        Self::from_fn(move || {
            let step = Rc::clone(&step);
            iterable::chain_rec(seed.clone(), move |state| step(state).produce())
        })
    }
}

impl<A: Clone + 'static> Seq<Seq<A>> {
    /// Flattens a sequence of sequences, preserving order.
    ///
    /// Equivalent to `chain` with the identity function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::seq::Seq;
    ///
    /// let nested = Seq::of([Seq::of([1]), Seq::of([2, 3])]);
    /// assert_eq!(nested.flatten().collect(), vec![1, 2, 3]);
    /// ```
    pub fn flatten(&self) -> Seq<A> {
        self.chain(|inner| inner)
    }
}

// =============================================================================
// Terminal operations
// =============================================================================

impl<A: Clone + 'static> Seq<A> {
    /// Materializes the full traversal into a fresh vector.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::seq::Seq;
    ///
    /// assert_eq!(Seq::to(3, 1).collect(), vec![0, 1, 2]);
    /// ```
    pub fn collect(&self) -> Vec<A> {
        self.produce().collect()
    }

    /// Materializes the sequence into a shared vector.
    ///
    /// For an array-backed sequence this shares the existing buffer by
    /// reference count - no elements are copied, and the returned vector
    /// is identically the sequence's own storage. Producer-backed
    /// sequences are collected first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::seq::Seq;
    /// use std::rc::Rc;
    ///
    /// let values = Seq::from_vec(vec![1, 2, 3]);
    /// let first = values.to_array();
    /// let second = values.to_array();
    /// assert!(Rc::ptr_eq(&first, &second));
    /// ```
    pub fn to_array(&self) -> Rc<Vec<A>> {
        match &self.source {
            Source::Items(items) => Rc::clone(items),
            Source::Thunk(_) => Rc::new(self.collect()),
        }
    }

    /// Returns the number of elements.
    ///
    /// Array-backed sequences answer in O(1) without traversing; any
    /// source with a known size must take this path. Producer-backed
    /// sequences are fully traversed and counted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::seq::Seq;
    ///
    /// assert_eq!(Seq::of([1, 2, 3]).count(), 3);
    /// assert_eq!(Seq::to(100, 1).count(), 100);
    /// ```
    pub fn count(&self) -> usize {
        match &self.source {
            Source::Items(items) => items.len(),
            Source::Thunk(_) => self.produce().count(),
        }
    }

    /// Returns whether the sequence yields no elements.
    ///
    /// Array-backed sequences answer in O(1); producer-backed sequences
    /// stop at the first element found.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::seq::Seq;
    ///
    /// assert!(Seq::<i32>::empty().is_empty());
    /// assert!(!Seq::of([1]).is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        match &self.source {
            Source::Items(items) => items.is_empty(),
            Source::Thunk(_) => self.produce().next().is_none(),
        }
    }

    /// Folds the sequence left-to-right from an explicit seed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::seq::Seq;
    ///
    /// assert_eq!(Seq::of([2, 3, 4]).fold(1, |acc, n| acc + n), 10);
    /// ```
    pub fn fold<B, F>(&self, init: B, function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        self.produce().fold(init, function)
    }

    /// Folds the sequence left-to-right, seeding with the first element.
    ///
    /// # Panics
    ///
    /// Panics with "reduce of empty sequence with no initial value" when
    /// the sequence is empty. Use [`fold`](Self::fold) when emptiness is a
    /// legal input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::seq::Seq;
    ///
    /// assert_eq!(Seq::of([1, 2, 3, 4]).reduce(|acc, n| acc + n), 10);
    /// ```
    pub fn reduce<F>(&self, function: F) -> A
    where
        F: FnMut(A, A) -> A,
    {
        iterable::reduce(self.produce(), function)
    }

    /// Joins the elements into a string with the given separator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::seq::Seq;
    ///
    /// assert_eq!(Seq::of(["a", "b", "c"]).join("-"), "a-b-c");
    /// assert_eq!(Seq::of([1, 2, 3]).join(","), "1,2,3");
    /// ```
    pub fn join(&self, separator: &str) -> String
    where
        A: fmt::Display,
    {
        iterable::join(self.produce(), separator)
    }

    /// Returns the first element, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::seq::Seq;
    ///
    /// assert_eq!(Seq::of([1, 2, 3]).head(), Some(1));
    /// assert_eq!(Seq::<i32>::empty().head(), None);
    /// ```
    pub fn head(&self) -> Option<A> {
        self.produce().next()
    }

    /// Returns the last element, if any.
    ///
    /// Producer-backed sequences are walked to the end - there is no
    /// reverse iteration. Array-backed sequences answer in O(1).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::seq::Seq;
    ///
    /// assert_eq!(Seq::of([1, 2, 3]).last(), Some(3));
    /// assert_eq!(Seq::<i32>::empty().last(), None);
    /// ```
    pub fn last(&self) -> Option<A> {
        match &self.source {
            Source::Items(items) => items.last().cloned(),
            Source::Thunk(_) => self.produce().last(),
        }
    }

    /// Returns the element at the given index, if any.
    ///
    /// Negative indices count from the end: `-1` is the last element.
    /// Indices past either end yield `None`. Array-backed sequences
    /// resolve in O(1); producer-backed sequences use a single forward
    /// walk (with a bounded trailing window for negative indices).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::seq::Seq;
    ///
    /// let values = Seq::of([1, 2, 3]);
    /// assert_eq!(values.nth(0), Some(1));
    /// assert_eq!(values.nth(-1), Some(3));
    /// assert_eq!(values.nth(3), None);
    /// assert_eq!(values.nth(-4), None);
    /// ```
    pub fn nth(&self, index: i64) -> Option<A> {
        match &self.source {
            Source::Items(items) => {
                let length = i64::try_from(items.len()).ok()?;
                let resolved = if index < 0 { length + index } else { index };
                if (0..length).contains(&resolved) {
                    items.get(usize::try_from(resolved).ok()?).cloned()
                } else {
                    None
                }
            }
            Source::Thunk(_) => iterable::nth(self.produce(), index),
        }
    }
}

impl<A: Clone + 'static, B: Clone + 'static> Seq<(A, B)> {
    /// Splits a sequence of pairs into two parallel vectors.
    ///
    /// The inverse of [`zip`](Seq::zip); both outputs preserve the
    /// original order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::seq::Seq;
    ///
    /// let pairs = Seq::of([(1, 'a'), (2, 'b')]);
    /// assert_eq!(pairs.unzip(), (vec![1, 2], vec!['a', 'b']));
    /// ```
    pub fn unzip(&self) -> (Vec<A>, Vec<B>) {
        self.produce().unzip()
    }
}

// =============================================================================
// Standard trait implementations
// =============================================================================

impl<A> Default for Seq<A> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<A> FromIterator<A> for Seq<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iterable: I) -> Self {
        Self::of(iterable)
    }
}

/// Iterator over one traversal of a [`Seq`].
///
/// Returned by [`Seq::iter`] and the `IntoIterator` implementations.
pub struct SeqIter<A> {
    inner: Box<dyn Iterator<Item = A>>,
}

impl<A> Iterator for SeqIter<A> {
    type Item = A;

    #[inline]
    fn next(&mut self) -> Option<A> {
        self.inner.next()
    }
}

impl<A> fmt::Debug for SeqIter<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("SeqIter").field(&"<cursor>").finish()
    }
}

impl<A: Clone + 'static> IntoIterator for Seq<A> {
    type Item = A;
    type IntoIter = SeqIter<A>;

    fn into_iter(self) -> SeqIter<A> {
        self.iter()
    }
}

impl<A: Clone + 'static> IntoIterator for &Seq<A> {
    type Item = A;
    type IntoIter = SeqIter<A>;

    fn into_iter(self) -> SeqIter<A> {
        self.iter()
    }
}

impl<A: Clone + PartialEq + 'static> PartialEq for Seq<A> {
    /// Two sequences are equal when their traversals yield equal elements
    /// in the same order. Forces a traversal of both sides.
    fn eq(&self, other: &Self) -> bool {
        self.produce().eq(other.produce())
    }
}

impl<A: Clone + fmt::Debug + 'static> fmt::Debug for Seq<A> {
    /// Array-backed sequences list their elements; producer-backed ones
    /// print a placeholder rather than forcing a traversal.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Source::Items(items) => formatter.debug_list().entries(items.iter()).finish(),
            Source::Thunk(_) => formatter.debug_tuple("Seq").field(&"<lazy>").finish(),
        }
    }
}
