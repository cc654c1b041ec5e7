//! Applicative type class - lifting values and combining containers.
//!
//! `Applicative` extends [`Functor`] with the ability to lift a pure value
//! into the context (`pure`) and to combine several independent values in
//! the same context (`map2`, `map3`, `apply`).
//!
//! # Laws
//!
//! All `Applicative` implementations must satisfy:
//!
//! - **Identity**: `v.apply(pure(|x| x)) == v`
//! - **Homomorphism**: `pure(x).apply(pure(f)) == pure(f(x))`
//! - **Composition**: applying composed functions equals applying them in
//!   sequence
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::typeclass::Applicative;
//!
//! let lifted: Option<i32> = <Option<()>>::pure(42);
//! assert_eq!(lifted, Some(42));
//!
//! let sum = Some(1).map2(Some(2), |a, b| a + b);
//! assert_eq!(sum, Some(3));
//! ```

use super::functor::Functor;

/// A type class for contexts that support lifting and combining values.
///
/// The `Clone` bounds on combined results exist because multi-traversal
/// containers (`Seq`) re-yield elements out of shared buffers.
///
/// # Examples
///
/// ```rust
/// use lazyseq::typeclass::Applicative;
///
/// let a = Some(3);
/// let b = Some(4);
/// assert_eq!(a.map2(b, |x, y| x * y), Some(12));
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::typeclass::Applicative;
    ///
    /// let x: Option<i32> = <Option<()>>::pure(42);
    /// assert_eq!(x, Some(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>
    where
        B: 'static;

    /// Combines two values in the context using a binary function.
    ///
    /// # Arguments
    ///
    /// * `other` - The second applicative value
    /// * `function` - Combines both inner values
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).map2(Some(2), |a, b| a + b), Some(3));
    /// assert_eq!(Some(1).map2(None::<i32>, |a, b| a + b), None);
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        B: Clone + 'static,
        C: Clone + 'static,
        F: Fn(Self::Inner, B) -> C + 'static;

    /// Combines three values in the context using a ternary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::typeclass::Applicative;
    ///
    /// let total = Some(1).map3(Some(2), Some(3), |a, b, c| a + b + c);
    /// assert_eq!(total, Some(6));
    /// ```
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        B: Clone + 'static,
        C: Clone + 'static,
        D: Clone + 'static,
        F: Fn(Self::Inner, B, C) -> D + 'static;

    /// Applies functions held in the context to the values in `self`.
    ///
    /// The ordering contract matters for multi-element containers: the
    /// result enumerates function-by-function, and within one function
    /// argument-by-argument (outer loop over functions, inner loop over
    /// arguments).
    ///
    /// # Arguments
    ///
    /// * `functions` - A container of functions to apply
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::typeclass::Applicative;
    ///
    /// let value = Some(21);
    /// let function = Some(|n: i32| n * 2);
    /// assert_eq!(value.apply(function), Some(42));
    /// ```
    fn apply<B, F>(self, functions: Self::WithType<F>) -> Self::WithType<B>
    where
        B: Clone + 'static,
        F: Fn(Self::Inner) -> B + Clone + 'static;

    /// Combines two values in the context into a tuple.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).product(Some("hi")), Some((1, "hi")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
        Self::Inner: Clone + 'static,
        B: Clone + 'static,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Evaluates both values, keeping the left one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).product_left(Some(2)), Some(1));
    /// assert_eq!(Some(1).product_left(None::<i32>), None);
    /// ```
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
        Self::Inner: Clone + 'static,
        B: Clone + 'static,
    {
        self.map2(other, |a, _| a)
    }

    /// Evaluates both values, keeping the right one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).product_right(Some(2)), Some(2));
    /// assert_eq!(None::<i32>.product_right(Some(2)), None);
    /// ```
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone + 'static,
    {
        self.map2(other, |_, b| b)
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B>
    where
        B: 'static,
    {
        Some(value)
    }

    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        B: Clone + 'static,
        C: Clone + 'static,
        F: Fn(A, B) -> C + 'static,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }

    fn map3<B, C, D, F>(self, second: Option<B>, third: Option<C>, function: F) -> Option<D>
    where
        B: Clone + 'static,
        C: Clone + 'static,
        D: Clone + 'static,
        F: Fn(A, B, C) -> D + 'static,
    {
        match (self, second, third) {
            (Some(a), Some(b), Some(c)) => Some(function(a, b, c)),
            _ => None,
        }
    }

    fn apply<B, F>(self, functions: Option<F>) -> Option<B>
    where
        B: Clone + 'static,
        F: Fn(A) -> B + Clone + 'static,
    {
        match (self, functions) {
            (Some(value), Some(function)) => Some(function(value)),
            _ => None,
        }
    }
}
