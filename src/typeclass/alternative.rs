//! Alternative type class - choice with an identity element.
//!
//! `Alternative` extends [`Applicative`] with an identity value (`empty`)
//! and an associative choice operation (`alt`). The alternative branch is
//! supplied as a thunk and is only evaluated when (and each time) it is
//! actually needed.
//!
//! # Laws
//!
//! All `Alternative` implementations must satisfy:
//!
//! - **Left identity**: `empty.alt(|| x) == x`
//! - **Right identity**: `x.alt(|| empty) == x`
//! - **Associativity**: `x.alt(|| y).alt(|| z) == x.alt(|| y.alt(|| z))`
//! - **Annihilation**: `x.apply(empty) == empty`
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::typeclass::Alternative;
//!
//! let first: Option<i32> = None;
//! assert_eq!(first.alt(|| Some(42)), Some(42));
//!
//! let first = Some(1);
//! assert_eq!(first.alt(|| Some(2)), Some(1));
//! ```

use super::applicative::Applicative;

/// A type class for applicative functors with a monoid structure.
///
/// For `Option`, `alt` is "first success wins"; for sequences it is
/// concatenation. In both cases the fallback thunk runs lazily.
///
/// # Examples
///
/// ```rust
/// use lazyseq::typeclass::Alternative;
///
/// let empty: Option<i32> = <Option<()>>::empty();
/// assert_eq!(empty, None);
/// ```
pub trait Alternative: Applicative {
    /// Returns the identity element for `alt`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::typeclass::Alternative;
    ///
    /// let nothing: Option<i32> = <Option<()>>::empty();
    /// assert_eq!(nothing, None);
    /// ```
    fn empty<B>() -> Self::WithType<B>
    where
        B: 'static;

    /// Combines two alternatives; the fallback is produced lazily.
    ///
    /// The thunk is invoked only during evaluation of the result - never
    /// when `alt` itself is called. For multi-traversal containers it may
    /// run once per traversal.
    ///
    /// # Arguments
    ///
    /// * `alternative` - A thunk producing the fallback value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::typeclass::Alternative;
    ///
    /// let found = Some(1).alt(|| unreachable!("not needed"));
    /// assert_eq!(found, Some(1));
    /// ```
    #[must_use]
    fn alt<F>(self, alternative: F) -> Self
    where
        Self: Sized,
        F: Fn() -> Self + 'static;

    /// Conditionally succeeds with `()` or fails.
    ///
    /// Useful for filtering inside applicative or monadic pipelines.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::typeclass::{Alternative, Functor};
    ///
    /// fn keep_positive(n: i32) -> Option<i32> {
    ///     <Option<()>>::guard(n > 0).fmap(move |()| n)
    /// }
    ///
    /// assert_eq!(keep_positive(5), Some(5));
    /// assert_eq!(keep_positive(-3), None);
    /// ```
    #[inline]
    fn guard(condition: bool) -> Self::WithType<()> {
        if condition {
            Self::pure(())
        } else {
            Self::empty()
        }
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Alternative for Option<A> {
    #[inline]
    fn empty<B>() -> Option<B>
    where
        B: 'static,
    {
        None
    }

    fn alt<F>(self, alternative: F) -> Self
    where
        F: Fn() -> Self + 'static,
    {
        if self.is_some() { self } else { alternative() }
    }
}
