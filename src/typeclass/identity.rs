//! Identity wrapper type - the identity functor.
//!
//! `Identity` wraps a value and adds no behavior. It is the simplest
//! possible instance of the type class hierarchy, which makes it the
//! reference model for law tests.

use super::applicative::Applicative;
use super::foldable::Foldable;
use super::functor::Functor;
use super::higher::TypeConstructor;
use super::monad::Monad;

/// The identity functor - a value with no surrounding effect.
///
/// # Examples
///
/// ```rust
/// use lazyseq::typeclass::{Functor, Identity};
///
/// let wrapped = Identity::new(21);
/// assert_eq!(wrapped.fmap(|n| n * 2), Identity(42));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::typeclass::Identity;
    ///
    /// assert_eq!(Identity::new(42).into_inner(), 42);
    /// ```
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

impl<A> Functor for Identity<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Identity<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        Identity(function(self.0))
    }
}

impl<A> Applicative for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B>
    where
        B: 'static,
    {
        Identity(value)
    }

    fn map2<B, C, F>(self, other: Identity<B>, function: F) -> Identity<C>
    where
        B: Clone + 'static,
        C: Clone + 'static,
        F: Fn(A, B) -> C + 'static,
    {
        Identity(function(self.0, other.0))
    }

    fn map3<B, C, D, F>(self, second: Identity<B>, third: Identity<C>, function: F) -> Identity<D>
    where
        B: Clone + 'static,
        C: Clone + 'static,
        D: Clone + 'static,
        F: Fn(A, B, C) -> D + 'static,
    {
        Identity(function(self.0, second.0, third.0))
    }

    fn apply<B, F>(self, functions: Identity<F>) -> Identity<B>
    where
        B: Clone + 'static,
        F: Fn(A) -> B + Clone + 'static,
    {
        Identity(functions.0(self.0))
    }
}

impl<A> Monad for Identity<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        B: Clone + 'static,
        F: Fn(A) -> Identity<B> + 'static,
    {
        function(self.0)
    }
}

impl<A> Foldable for Identity<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        function(init, self.0)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        function(self.0, init)
    }

    #[inline]
    fn length(&self) -> usize {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identity_round_trips_value() {
        assert_eq!(Identity::new(42).into_inner(), 42);
    }

    #[rstest]
    fn identity_flat_map_is_function_application() {
        let result = Identity(21).flat_map(|n| Identity(n * 2));
        assert_eq!(result, Identity(42));
    }

    #[rstest]
    fn identity_is_never_empty() {
        assert_eq!(Identity(0).length(), 1);
        assert!(!Identity(0).is_empty());
    }
}
