//! Lazy, re-iterable sequences.
//!
//! The centerpiece of this module is [`Seq`], a *recipe* for producing a
//! stream of values rather than a materialized collection. A `Seq` stores
//! a producer - something that can start a fresh traversal on demand -
//! so the same sequence can be walked any number of times, and every
//! transformation (`map`, `filter`, `chain`, ...) builds a new recipe
//! without running anything.
//!
//! Two layers are provided:
//!
//! - [`Seq`] itself, with chainable methods and type class instances
//! - [`iterable`], standalone functions over anything that implements
//!   `IntoIterator`, for the operations the standard iterator adapters do
//!   not already cover (`head`, `last`, negative-index `nth`, `reduce`,
//!   `group`, and the depth-first [`iterable::chain_rec`])
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::seq::Seq;
//!
//! let squares = Seq::range(1, 6, 1).map(|n| n * n);
//!
//! assert_eq!(squares.collect(), vec![1, 4, 9, 16, 25]);
//! assert_eq!(squares.head(), Some(1));
//!
//! // The recipe is still intact: traverse it again.
//! assert_eq!(squares.join(", "), "1, 4, 9, 16, 25");
//! ```

pub mod iterable;

mod instances;
mod sequence;

pub use sequence::{Seq, SeqIter};

/// Creates a [`Seq`] from a list of values, like `vec!` for vectors.
///
/// # Examples
///
/// ```rust
/// use lazyseq::seq;
///
/// let values = seq![1, 2, 3];
/// assert_eq!(values.collect(), vec![1, 2, 3]);
///
/// let nothing: lazyseq::seq::Seq<i32> = seq![];
/// assert!(nothing.is_empty());
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        $crate::seq::Seq::empty()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::seq::Seq::from_vec(::std::vec![$($value),+])
    };
}
