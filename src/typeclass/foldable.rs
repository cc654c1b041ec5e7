//! Foldable type class - collapsing a structure to a summary value.
//!
//! `Foldable` abstracts over containers whose elements can be combined
//! into a single result by a left or right fold.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::typeclass::Foldable;
//!
//! let total = Some(41).fold_left(1, |acc, n| acc + n);
//! assert_eq!(total, 42);
//! ```

use super::higher::TypeConstructor;

/// A type class for structures that can be folded to a summary value.
///
/// Only `fold_left`, `fold_right`, and `length` are required; the
/// remaining operations have default implementations in terms of them.
pub trait Foldable: TypeConstructor {
    /// Folds the structure from the left.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::typeclass::Foldable;
    ///
    /// assert_eq!(Some(2).fold_left(40, |acc, n| acc + n), 42);
    /// assert_eq!(None::<i32>.fold_left(40, |acc, n| acc + n), 40);
    /// ```
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the structure from the right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::typeclass::Foldable;
    ///
    /// assert_eq!(Some("a").fold_right(String::from("!"), |s, acc| s.to_owned() + &acc), "a!");
    /// ```
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Returns the number of elements in the structure.
    fn length(&self) -> usize;

    /// Returns whether the structure holds no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.length() == 0
    }

    /// Collects the elements into a `Vec`, preserving order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::typeclass::Foldable;
    ///
    /// assert_eq!(Some(1).to_list(), vec![1]);
    /// assert_eq!(None::<i32>.to_list(), Vec::<i32>::new());
    /// ```
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut list, item| {
            list.push(item);
            list
        })
    }

    /// Returns the first element satisfying the predicate.
    fn find<P>(self, predicate: P) -> Option<Self::Inner>
    where
        Self: Sized,
        P: FnMut(&Self::Inner) -> bool,
    {
        self.to_list().into_iter().find(predicate)
    }

    /// Returns whether any element satisfies the predicate.
    fn exists<P>(self, predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(&Self::Inner) -> bool,
    {
        self.find(predicate).is_some()
    }

    /// Returns whether every element satisfies the predicate.
    fn for_all<P>(self, mut predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(&Self::Inner) -> bool,
    {
        !self.exists(move |item| !predicate(item))
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Foldable for Option<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Some(value) => function(init, value),
            None => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Some(value) => function(value, init),
            None => init,
        }
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_some())
    }
}
