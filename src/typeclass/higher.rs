//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor like `Option<_>` directly.
//! [`TypeConstructor`] works around this by carrying two pieces of
//! information on the concrete type: the parameter it is currently applied
//! to (`Inner`) and how to re-apply the constructor to a different
//! parameter (`WithType<B>`). Every type class in this crate builds on it.

/// A trait representing a type constructor.
///
/// Implemented by a type constructor applied to some parameter `A` (for
/// example `Option<A>` or `Seq<A>`), this trait lets generic code name
/// "the same constructor applied to `B`" as `Self::WithType<B>`.
///
/// # Laws
///
/// For any `F: TypeConstructor`, `F::WithType<F::Inner>` must be the same
/// type as `F` itself (re-applying the constructor to the current parameter
/// changes nothing).
///
/// # Examples
///
/// ```rust
/// use lazyseq::typeclass::TypeConstructor;
///
/// fn rewrap<T: TypeConstructor>(_value: T) -> T::WithType<String>
/// where
///     T::WithType<String>: Default,
/// {
///     Default::default()
/// }
///
/// let relabeled: Option<String> = rewrap(Some(42));
/// assert_eq!(relabeled, None);
/// ```
pub trait TypeConstructor {
    /// The parameter this type constructor is currently applied to.
    ///
    /// For `Option<i32>` this is `i32`.
    type Inner;

    /// The same type constructor applied to `B`.
    ///
    /// For `Option<i32>`, `WithType<String>` is `Option<String>`. The
    /// recursive bound keeps the result usable as a type constructor, so
    /// transformations can be chained.
    type WithType<B>: TypeConstructor<Inner = B>;
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}
