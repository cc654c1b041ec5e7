//! Monad type class - sequencing computations within a context.
//!
//! `Monad` extends [`Applicative`] with `flat_map`, which lets the result
//! of one computation decide what computation runs next.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy:
//!
//! - **Left identity**: `pure(a).flat_map(f) == f(a)`
//! - **Right identity**: `m.flat_map(pure) == m`
//! - **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::typeclass::Monad;
//!
//! fn parse_positive(text: &str) -> Option<i32> {
//!     text.parse::<i32>().ok().filter(|&n| n > 0)
//! }
//!
//! let result = Some("42").flat_map(parse_positive).flat_map(|n| Some(n * 2));
//! assert_eq!(result, Some(84));
//! ```

use super::applicative::Applicative;

/// A type class for contexts that support dependent sequencing.
///
/// # Laws
///
/// - **Left identity**: `pure(a).flat_map(f) == f(a)`
/// - **Right identity**: `m.flat_map(pure) == m`
/// - **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
///
/// # Examples
///
/// ```rust
/// use lazyseq::typeclass::Monad;
///
/// let halved = Some(10).flat_map(|n| if n % 2 == 0 { Some(n / 2) } else { None });
/// assert_eq!(halved, Some(5));
/// ```
pub trait Monad: Applicative {
    /// Applies a context-returning function and flattens the result.
    ///
    /// This is the bind (`>>=`) operation, the analogue of
    /// `Option::and_then`.
    ///
    /// # Arguments
    ///
    /// * `function` - Takes the inner value and returns a new context
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::typeclass::Monad;
    ///
    /// assert_eq!(Some(5).flat_map(|n| Some(n * 2)), Some(10));
    /// assert_eq!(Some(5).flat_map(|n| if n > 10 { Some(n) } else { None }), None);
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        B: Clone + 'static,
        F: Fn(Self::Inner) -> Self::WithType<B> + 'static;

    /// Alias for `flat_map`, matching Rust's naming conventions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::typeclass::Monad;
    ///
    /// assert_eq!(Some(5).and_then(|n| Some(n * 2)), Some(10));
    /// ```
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone + 'static,
        F: Fn(Self::Inner) -> Self::WithType<B> + 'static,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::typeclass::Monad;
    ///
    /// assert_eq!(Some("ignored").then(Some(42)), Some(42));
    /// assert_eq!(None::<i32>.then(Some(42)), None);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone + 'static,
        Self::WithType<B>: Clone + 'static,
    {
        self.flat_map(move |_| next.clone())
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        B: Clone + 'static,
        F: Fn(A) -> Option<B> + 'static,
    {
        Self::and_then(self, function)
    }
}
