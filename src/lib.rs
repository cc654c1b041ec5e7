//! # lazyseq
//!
//! A functional programming library for Rust built around a lazy,
//! re-iterable sequence abstraction.
//!
//! ## Overview
//!
//! - **Type Classes**: Functor, Applicative, Monad, Alternative, ChainRec,
//!   Foldable, emulated over higher-kinded types via GATs
//! - **Control Structures**: the `Either` disjoint union that drives
//!   recursive sequence expansion
//! - **Sequences**: [`seq::Seq`], a recipe for producing a stream of values
//!   that can be traversed any number of times, with lazy composable
//!   operators and a stack-safe depth-first `chain_rec`
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `control`: Control structures (Either)
//! - `seq`: The lazy sequence type and raw-iterable function library
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lazyseq::seq::Seq;
//!
//! let evens = Seq::to(10, 1).filter(|n| n % 2 == 0).map(|n| n * n);
//!
//! // Nothing has run yet; `collect` forces the traversal.
//! assert_eq!(evens.collect(), vec![0, 4, 16, 36, 64]);
//!
//! // The same sequence can be traversed again.
//! assert_eq!(evens.count(), 5);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use lazyseq::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "seq")]
    pub use crate::seq::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "seq")]
pub mod seq;
