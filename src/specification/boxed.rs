//! BoxedSpecification - type-erased specification for opt-in boxing.
//!
//! Combinators return concrete nested types, which is zero-cost but means
//! two differently-built rules have different types. Use
//! `BoxedSpecification` when you need to:
//! - Store different specification types in a collection
//! - Return different specifications from match arms
//! - Build specifications recursively
//!
//! A newtype rather than a bare `Box<dyn ...>` so it composes like any
//! other specification without colliding with the closure blanket impl.

use super::combinators::Specification;

/// A type-erased specification.
///
/// Created with [`SpecificationExt::boxed`](super::SpecificationExt::boxed)
/// or [`BoxedSpecification::new`]. Composes like any other specification.
///
/// # Example
///
/// ```rust
/// use criteria::specification::*;
///
/// fn stock_rule(strict: bool) -> BoxedSpecification<u32> {
///     if strict {
///         at_least(3u32).and(at_least(7u32).not()).boxed()
///     } else {
///         at_least(1u32).boxed()
///     }
/// }
///
/// assert!(stock_rule(true).is_satisfied_by(&5));
/// assert!(!stock_rule(true).is_satisfied_by(&9));
/// assert!(stock_rule(false).is_satisfied_by(&9));
/// ```
pub struct BoxedSpecification<T: ?Sized>(Box<dyn Specification<T>>);

impl<T: ?Sized> BoxedSpecification<T> {
    /// Box a concrete specification, erasing its type.
    pub fn new<S: Specification<T> + 'static>(specification: S) -> Self {
        BoxedSpecification(Box::new(specification))
    }
}

impl<T: ?Sized> Specification<T> for BoxedSpecification<T> {
    #[inline]
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.0.is_satisfied_by(candidate)
    }
}

impl<T: ?Sized> std::fmt::Debug for BoxedSpecification<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoxedSpecification").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specification::{at_least, below, SpecificationExt};

    #[test]
    fn test_boxed_preserves_behavior() {
        let plain = at_least(3).and(below(10));
        let boxed = at_least(3).and(below(10)).boxed();
        for v in [-1, 3, 5, 9, 10, 42] {
            assert_eq!(boxed.is_satisfied_by(&v), plain.is_satisfied_by(&v));
        }
    }

    #[test]
    fn test_boxed_in_collection() {
        let rules: Vec<BoxedSpecification<i32>> = vec![
            at_least(3).boxed(),
            below(10).boxed(),
            (|n: &i32| n % 2 != 0).boxed(),
        ];
        assert!(rules.iter().all(|r| r.is_satisfied_by(&5)));
        assert!(!rules.iter().all(|r| r.is_satisfied_by(&4)));
    }

    #[test]
    fn test_boxed_composes_further() {
        let spec = at_least(3).boxed().and(below(10).boxed()).not();
        assert!(!spec.is_satisfied_by(&5));
        assert!(spec.is_satisfied_by(&42));
    }
}
