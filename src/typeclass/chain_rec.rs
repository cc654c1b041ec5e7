//! ChainRec type class - stack-safe recursive expansion inside a context.
//!
//! Rust does not guarantee tail call optimization, so monadic recursion
//! written naively can overflow the stack. `ChainRec` expresses the
//! recursion as data: a step function returns, inside the context, either
//! `Left(next)` ("continue with `next`") or `Right(done)` ("finish with
//! `done`"). The instance interprets those markers in a loop, keeping stack
//! usage constant no matter how deep the recursion goes.
//!
//! # Laws
//!
//! `chain_rec(a, f)` must be equivalent to the naive recursion
//!
//! ```text
//! step(a) = f(a).flat_map(|r| match r {
//!     Left(next) => step(next),
//!     Right(done) => pure(done),
//! })
//! ```
//!
//! while using at most a constant multiple of the stack consumed by a
//! single call to `f`.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::control::Either;
//! use lazyseq::typeclass::tail_rec;
//!
//! // Count down from one million without stack growth.
//! let result = tail_rec(1_000_000_u64, |n| {
//!     if n == 0 {
//!         Either::Right("done")
//!     } else {
//!         Either::Left(n - 1)
//!     }
//! });
//! assert_eq!(result, "done");
//! ```

use super::monad::Monad;
use crate::control::Either;

/// Loops a step function until it produces a `Right`.
///
/// This is the bare, context-free form of `chain_rec`: `Left` carries the
/// next loop state, `Right` carries the final result. The loop runs in
/// constant stack space.
///
/// # Arguments
///
/// * `init` - The starting state
/// * `function` - Computes the next state or the final result
///
/// # Examples
///
/// ```rust
/// use lazyseq::control::Either;
/// use lazyseq::typeclass::tail_rec;
///
/// let factorial = tail_rec((5_u64, 1_u64), |(n, product)| {
///     if n <= 1 {
///         Either::Right(product)
///     } else {
///         Either::Left((n - 1, n * product))
///     }
/// });
/// assert_eq!(factorial, 120);
/// ```
pub fn tail_rec<A, B, F>(init: A, mut function: F) -> B
where
    F: FnMut(A) -> Either<A, B>,
{
    let mut state = init;
    loop {
        match function(state) {
            Either::Left(next) => state = next,
            Either::Right(done) => return done,
        }
    }
}

/// A type class for monads that support stack-safe recursion.
///
/// `chain_rec` starts from a seed and repeatedly applies the step
/// function, continuing on `Left` and finishing on `Right`, without
/// consuming call stack proportional to the recursion depth.
///
/// For single-value contexts (`Option`, `Either`) this is a plain loop.
/// For sequences the step function returns *many* markers per state and
/// the instance expands them depth-first; see `seq::Seq::chain_rec`.
///
/// # Examples
///
/// ```rust
/// use lazyseq::control::Either;
/// use lazyseq::typeclass::ChainRec;
///
/// let result: Option<u64> = <Option<()>>::chain_rec(0_u64, |n| {
///     Some(if n < 100_000 {
///         Either::Left(n + 1)
///     } else {
///         Either::Right(n)
///     })
/// });
/// assert_eq!(result, Some(100_000));
/// ```
pub trait ChainRec: Monad {
    /// Recursively expands `seed` until the step function finishes.
    ///
    /// The seed type `S` is independent of the instance's current inner
    /// type: the instance only supplies the context the markers live in.
    ///
    /// # Arguments
    ///
    /// * `seed` - The initial state
    /// * `step` - Produces, in the context, continue/finish markers
    fn chain_rec<S, B, F>(seed: S, step: F) -> Self::WithType<B>
    where
        S: Clone + 'static,
        B: Clone + 'static,
        F: Fn(S) -> Self::WithType<Either<S, B>> + 'static;
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> ChainRec for Option<A> {
    fn chain_rec<S, B, F>(seed: S, step: F) -> Option<B>
    where
        S: Clone + 'static,
        B: Clone + 'static,
        F: Fn(S) -> Option<Either<S, B>> + 'static,
    {
        let mut state = seed;
        loop {
            match step(state)? {
                Either::Left(next) => state = next,
                Either::Right(done) => return Some(done),
            }
        }
    }
}
