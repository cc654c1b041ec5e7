//! Control structures for functional programming.
//!
//! This module provides [`Either`], the two-variant disjoint union used
//! both as a standalone result-like value and as the control-flow
//! vocabulary of recursive sequence expansion: `Left` means "continue
//! with this state", `Right` means "finish with this value".
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::control::Either;
//!
//! let parsed: Either<String, i32> = Either::Right(42);
//! let described = parsed.fold(
//!     |error| format!("failed: {error}"),
//!     |value| format!("got {value}"),
//! );
//! assert_eq!(described, "got 42");
//! ```

mod either;

pub use either::{Either, EitherIntoIter};
