//! Core specification trait and logical combinators
//!
//! This module provides the foundational `Specification` trait and the
//! logical combinators for composing specifications.

use super::boxed::BoxedSpecification;

/// A composable boolean test over values of type T.
///
/// Concrete specifications implement only [`is_satisfied_by`]; the logical
/// combinators come for free through [`SpecificationExt`]:
/// - `and`: both specifications must be satisfied
/// - `or`: either specification must be satisfied
/// - `not`: inverts the specification
///
/// Evaluation must be pure: no side effects, and deterministic for a
/// deterministic candidate. Specifications are immutable after construction
/// and `Send + Sync`, so they can be shared and evaluated from multiple
/// threads without locking.
///
/// [`is_satisfied_by`]: Specification::is_satisfied_by
///
/// # Example
///
/// ```rust
/// use criteria::specification::*;
///
/// struct Even;
///
/// impl Specification<i32> for Even {
///     fn is_satisfied_by(&self, candidate: &i32) -> bool {
///         candidate % 2 == 0
///     }
/// }
///
/// let small_even = Even.and(below(100));
/// assert!(small_even.is_satisfied_by(&42));
/// assert!(!small_even.is_satisfied_by(&43));
/// assert!(!small_even.is_satisfied_by(&200));
/// ```
pub trait Specification<T: ?Sized>: Send + Sync {
    /// Check whether the candidate satisfies this specification.
    fn is_satisfied_by(&self, candidate: &T) -> bool;
}

// Blanket impl for closures
impl<T: ?Sized, F> Specification<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self(candidate)
    }
}

/// Extension trait for specification combinators.
///
/// Provides method chaining for combining specifications with logical
/// operators. All methods return concrete types for zero-cost abstraction;
/// use [`boxed`](SpecificationExt::boxed) when type erasure is needed.
///
/// `and` and `or` evaluate the left specification first and short-circuit:
/// the right specification is skipped when the left alone decides the
/// result. Since specifications are pure, short-circuiting is unobservable
/// for well-behaved leaves.
///
/// # Example
///
/// ```rust
/// use criteria::specification::*;
///
/// let spec = above(0).and(below(100)).not();
/// assert!(spec.is_satisfied_by(&-5));  // outside (0, 100)
/// assert!(!spec.is_satisfied_by(&50)); // inside, so not() inverts to false
/// ```
pub trait SpecificationExt<T: ?Sized>: Specification<T> + Sized {
    /// Combine with AND logic.
    ///
    /// Returns a specification satisfied only when both specifications are.
    ///
    /// # Example
    ///
    /// ```rust
    /// use criteria::specification::*;
    ///
    /// let spec = above(0).and(below(100));
    /// assert!(spec.is_satisfied_by(&50));
    /// assert!(!spec.is_satisfied_by(&0));
    /// assert!(!spec.is_satisfied_by(&100));
    /// ```
    fn and<S: Specification<T>>(self, other: S) -> And<Self, S> {
        And(self, other)
    }

    /// Combine with OR logic.
    ///
    /// Returns a specification satisfied when either specification is.
    ///
    /// # Example
    ///
    /// ```rust
    /// use criteria::specification::*;
    ///
    /// let spec = below(0).or(above(100));
    /// assert!(spec.is_satisfied_by(&-5));
    /// assert!(spec.is_satisfied_by(&150));
    /// assert!(!spec.is_satisfied_by(&50));
    /// ```
    fn or<S: Specification<T>>(self, other: S) -> Or<Self, S> {
        Or(self, other)
    }

    /// Invert the specification.
    ///
    /// Returns a specification satisfied exactly when the original is not.
    ///
    /// # Example
    ///
    /// ```rust
    /// use criteria::specification::*;
    ///
    /// let spec = at_least(7).not();
    /// assert!(spec.is_satisfied_by(&5));
    /// assert!(!spec.is_satisfied_by(&7));
    /// ```
    fn not(self) -> Not<Self> {
        Not(self)
    }

    /// Erase the concrete type behind a [`BoxedSpecification`].
    ///
    /// Use this to store differently-typed specifications in a collection
    /// or return them from match arms.
    ///
    /// # Example
    ///
    /// ```rust
    /// use criteria::specification::*;
    ///
    /// let rules: Vec<BoxedSpecification<i32>> = vec![
    ///     at_least(3).boxed(),
    ///     below(10).and(not_equal_to(7)).boxed(),
    /// ];
    /// assert!(rules.iter().all(|r| r.is_satisfied_by(&5)));
    /// ```
    fn boxed(self) -> BoxedSpecification<T>
    where
        Self: 'static,
    {
        BoxedSpecification::new(self)
    }
}

impl<T: ?Sized, S: Specification<T>> SpecificationExt<T> for S {}

/// AND combinator - both children must be satisfied.
#[derive(Clone, Copy, Debug)]
pub struct And<S1, S2>(pub S1, pub S2);

impl<T: ?Sized, S1: Specification<T>, S2: Specification<T>> Specification<T> for And<S1, S2> {
    #[inline]
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.0.is_satisfied_by(candidate) && self.1.is_satisfied_by(candidate)
    }
}

// Send + Sync are auto-derived when S1 and S2 are Send + Sync

/// OR combinator - either child must be satisfied.
#[derive(Clone, Copy, Debug)]
pub struct Or<S1, S2>(pub S1, pub S2);

impl<T: ?Sized, S1: Specification<T>, S2: Specification<T>> Specification<T> for Or<S1, S2> {
    #[inline]
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.0.is_satisfied_by(candidate) || self.1.is_satisfied_by(candidate)
    }
}

/// NOT combinator - inverts its child.
#[derive(Clone, Copy, Debug)]
pub struct Not<S>(pub S);

impl<T: ?Sized, S: Specification<T>> Specification<T> for Not<S> {
    #[inline]
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        !self.0.is_satisfied_by(candidate)
    }
}

/// Check that every specification in a fixed-size array is satisfied.
///
/// Const generic, zero allocation. Requires homogeneous specification
/// types; for mixed types use `.and()` chaining instead.
#[derive(Clone, Copy, Debug)]
pub struct AllOf<S, const N: usize>(pub [S; N]);

impl<T: ?Sized, S: Specification<T>, const N: usize> Specification<T> for AllOf<S, N> {
    #[inline]
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.0.iter().all(|s| s.is_satisfied_by(candidate))
    }
}

/// Create a specification satisfied when all given specifications are.
///
/// # Example
///
/// ```rust
/// use criteria::specification::*;
///
/// let spec = all_of([at_least(0), at_least(-10), at_least(-100)]);
/// assert!(spec.is_satisfied_by(&50));
/// assert!(!spec.is_satisfied_by(&-50));
/// ```
pub fn all_of<S, const N: usize>(specifications: [S; N]) -> AllOf<S, N> {
    AllOf(specifications)
}

/// Check that at least one specification in a fixed-size array is satisfied.
#[derive(Clone, Copy, Debug)]
pub struct AnyOf<S, const N: usize>(pub [S; N]);

impl<T: ?Sized, S: Specification<T>, const N: usize> Specification<T> for AnyOf<S, N> {
    #[inline]
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.0.iter().any(|s| s.is_satisfied_by(candidate))
    }
}

/// Create a specification satisfied when any given specification is.
///
/// # Example
///
/// ```rust
/// use criteria::specification::*;
///
/// let spec = any_of([equal_to(1), equal_to(5), equal_to(10)]);
/// assert!(spec.is_satisfied_by(&5));
/// assert!(!spec.is_satisfied_by(&7));
/// ```
pub fn any_of<S, const N: usize>(specifications: [S; N]) -> AnyOf<S, N> {
    AnyOf(specifications)
}

/// Check that no specification in a fixed-size array is satisfied.
///
/// Equivalent to `any_of(...).not()` but more direct.
#[derive(Clone, Copy, Debug)]
pub struct NoneOf<S, const N: usize>(pub [S; N]);

impl<T: ?Sized, S: Specification<T>, const N: usize> Specification<T> for NoneOf<S, N> {
    #[inline]
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        !self.0.iter().any(|s| s.is_satisfied_by(candidate))
    }
}

/// Create a specification satisfied when none of the given ones are.
///
/// # Example
///
/// ```rust
/// use criteria::specification::*;
///
/// let spec = none_of([equal_to(1), equal_to(5), equal_to(10)]);
/// assert!(spec.is_satisfied_by(&7));
/// assert!(!spec.is_satisfied_by(&5));
/// ```
pub fn none_of<S, const N: usize>(specifications: [S; N]) -> NoneOf<S, N> {
    NoneOf(specifications)
}
