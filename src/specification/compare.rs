//! Ordering and equality leaf specifications
//!
//! Threshold-style checks over any `PartialOrd`/`PartialEq` type. These are
//! the most common leaf specifications: "at least N units in stock", "price
//! below the cap", and so on.
//!
//! With the `serde` feature enabled the leaf structs serialize as plain
//! data, so applications can persist their thresholds.

use super::combinators::Specification;
use std::cmp::PartialOrd;

/// Specification satisfied when the candidate is at least the threshold.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AtLeast<T>(pub T);

impl<T: PartialOrd + Send + Sync> Specification<T> for AtLeast<T> {
    #[inline]
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        *candidate >= self.0
    }
}

/// Create a specification for "candidate >= threshold".
///
/// # Example
///
/// ```rust
/// use criteria::specification::*;
///
/// assert!(at_least(3).is_satisfied_by(&5));
/// assert!(at_least(3).is_satisfied_by(&3));
/// assert!(!at_least(3).is_satisfied_by(&2));
/// ```
pub fn at_least<T: PartialOrd + Send + Sync>(threshold: T) -> AtLeast<T> {
    AtLeast(threshold)
}

/// Specification satisfied when the candidate is strictly above the threshold.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Above<T>(pub T);

impl<T: PartialOrd + Send + Sync> Specification<T> for Above<T> {
    #[inline]
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        *candidate > self.0
    }
}

/// Create a specification for "candidate > threshold".
///
/// # Example
///
/// ```rust
/// use criteria::specification::*;
///
/// assert!(above(5).is_satisfied_by(&6));
/// assert!(!above(5).is_satisfied_by(&5));
/// ```
pub fn above<T: PartialOrd + Send + Sync>(threshold: T) -> Above<T> {
    Above(threshold)
}

/// Specification satisfied when the candidate is at most the threshold.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AtMost<T>(pub T);

impl<T: PartialOrd + Send + Sync> Specification<T> for AtMost<T> {
    #[inline]
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        *candidate <= self.0
    }
}

/// Create a specification for "candidate <= threshold".
///
/// # Example
///
/// ```rust
/// use criteria::specification::*;
///
/// assert!(at_most(5).is_satisfied_by(&5));
/// assert!(!at_most(5).is_satisfied_by(&6));
/// ```
pub fn at_most<T: PartialOrd + Send + Sync>(threshold: T) -> AtMost<T> {
    AtMost(threshold)
}

/// Specification satisfied when the candidate is strictly below the threshold.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Below<T>(pub T);

impl<T: PartialOrd + Send + Sync> Specification<T> for Below<T> {
    #[inline]
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        *candidate < self.0
    }
}

/// Create a specification for "candidate < threshold".
///
/// # Example
///
/// ```rust
/// use criteria::specification::*;
///
/// assert!(below(5).is_satisfied_by(&4));
/// assert!(!below(5).is_satisfied_by(&5));
/// ```
pub fn below<T: PartialOrd + Send + Sync>(threshold: T) -> Below<T> {
    Below(threshold)
}

/// Specification satisfied when the candidate equals the expected value.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EqualTo<T>(pub T);

impl<T: PartialEq + Send + Sync> Specification<T> for EqualTo<T> {
    #[inline]
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        *candidate == self.0
    }
}

/// Create a specification for "candidate == expected".
///
/// # Example
///
/// ```rust
/// use criteria::specification::*;
///
/// assert!(equal_to(5).is_satisfied_by(&5));
/// assert!(!equal_to(5).is_satisfied_by(&4));
/// ```
pub fn equal_to<T: PartialEq + Send + Sync>(expected: T) -> EqualTo<T> {
    EqualTo(expected)
}

/// Specification satisfied when the candidate differs from the given value.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NotEqualTo<T>(pub T);

impl<T: PartialEq + Send + Sync> Specification<T> for NotEqualTo<T> {
    #[inline]
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        *candidate != self.0
    }
}

/// Create a specification for "candidate != value".
///
/// # Example
///
/// ```rust
/// use criteria::specification::*;
///
/// assert!(not_equal_to(5).is_satisfied_by(&4));
/// assert!(!not_equal_to(5).is_satisfied_by(&5));
/// ```
pub fn not_equal_to<T: PartialEq + Send + Sync>(value: T) -> NotEqualTo<T> {
    NotEqualTo(value)
}

/// Specification satisfied when the candidate lies in an inclusive range.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Within<T> {
    min: T,
    max: T,
}

impl<T: PartialOrd + Send + Sync> Specification<T> for Within<T> {
    #[inline]
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        *candidate >= self.min && *candidate <= self.max
    }
}

/// Create a specification for "min <= candidate <= max".
///
/// # Example
///
/// ```rust
/// use criteria::specification::*;
///
/// let spec = within(0, 100);
/// assert!(spec.is_satisfied_by(&0));
/// assert!(spec.is_satisfied_by(&100));
/// assert!(!spec.is_satisfied_by(&101));
/// ```
pub fn within<T: PartialOrd + Send + Sync>(min: T, max: T) -> Within<T> {
    Within { min, max }
}
