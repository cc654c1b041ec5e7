//! Functor type class - mapping over container values.
//!
//! A `Functor` applies a function to the value(s) inside a container while
//! preserving the container's structure.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy:
//!
//! - **Identity**: `fa.fmap(|x| x) == fa`
//! - **Composition**: `fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))`
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::typeclass::Functor;
//!
//! let present: Option<i32> = Some(5);
//! assert_eq!(present.fmap(|n| n.to_string()), Some("5".to_string()));
//!
//! let absent: Option<i32> = None;
//! assert_eq!(absent.fmap(|n| n.to_string()), None);
//! ```

use super::higher::TypeConstructor;

/// A type class for types that can have a function mapped over their contents.
///
/// The callback is a shared `Fn` rather than a `FnOnce`: containers such as
/// `Seq` hold many elements and re-apply the function on every traversal,
/// so a single-shot closure cannot implement the operation.
///
/// # Laws
///
/// - **Identity**: `fa.fmap(|x| x) == fa`
/// - **Composition**: `fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))`
///
/// # Examples
///
/// ```rust
/// use lazyseq::typeclass::Functor;
///
/// let x: Option<i32> = Some(5);
/// let y: Option<i32> = x.fmap(|n| n * 2);
/// assert_eq!(y, Some(10));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value(s) inside the functor.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that transforms the inner value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::typeclass::Functor;
    ///
    /// assert_eq!(Some(5).fmap(|n| n + 1), Some(6));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: Fn(Self::Inner) -> B + 'static,
        B: 'static;

    /// Replaces every value inside the functor with a constant.
    ///
    /// Equivalent to `fmap(|_| value.clone())`. The value must be `Clone`
    /// because multi-element containers place it at every position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::typeclass::Functor;
    ///
    /// assert_eq!(Some(5).replace("replaced"), Some("replaced"));
    ///
    /// let absent: Option<i32> = None;
    /// assert_eq!(absent.replace("replaced"), None);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone + 'static,
    {
        self.fmap(move |_| value.clone())
    }

    /// Discards the value(s) inside the functor, keeping only the shape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::typeclass::Functor;
    ///
    /// assert_eq!(Some(5).void(), Some(()));
    /// ```
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        self.map(function)
    }
}
