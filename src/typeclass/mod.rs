//! Type class traits for functional programming abstractions.
//!
//! This module provides the fundamental type classes (traits) used
//! throughout the crate:
//!
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Lifting values and combining containers
//! - [`Monad`]: Sequencing computations with dependency
//! - [`Alternative`]: Choice between containers with an identity element
//! - [`ChainRec`]: Stack-safe recursive expansion inside a container
//! - [`Foldable`]: Folding over structures to produce summary values
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! This library uses Generic Associated Types (GAT) to emulate HKT
//! behavior, allowing traits like Functor and Monad to abstract over
//! type constructors such as `Option<_>` or `Seq<_>`.
//!
//! ## Multi-shot callbacks
//!
//! Unlike single-value containers, a lazy sequence re-applies its
//! callbacks on every traversal. The traits here therefore take `Fn`
//! callbacks (not `FnOnce`), so that one trait hierarchy covers both
//! single-shot containers (`Option`, `Either`) and multi-traversal
//! containers (`Seq`).
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::typeclass::{Applicative, Functor, Monad};
//!
//! let doubled: Option<i32> = Some(21).fmap(|n| n * 2);
//! assert_eq!(doubled, Some(42));
//!
//! let sum = Some(40).map2(Some(2), |a, b| a + b);
//! assert_eq!(sum, Some(42));
//!
//! let chained = Some(6).flat_map(|n| if n > 0 { Some(n * 7) } else { None });
//! assert_eq!(chained, Some(42));
//! ```

mod alternative;
mod applicative;
#[cfg(feature = "control")]
mod chain_rec;
mod foldable;
mod functor;
mod higher;
mod identity;
mod monad;

pub use alternative::Alternative;
pub use applicative::Applicative;
#[cfg(feature = "control")]
pub use chain_rec::{ChainRec, tail_rec};
pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monad::Monad;
