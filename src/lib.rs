//! # Criteria
//!
//! Composable specification predicates for Rust.
//!
//! A specification is a pure boolean test over a value of some type. This
//! crate provides the [`Specification`] trait plus logical combinators
//! (`and`, `or`, `not`) so complex rules can be assembled from simple,
//! reusable checks instead of ad-hoc boolean expressions.
//!
//! ## Quick Example
//!
//! ```rust
//! use criteria::specification::*;
//!
//! // A product is sellable when at least 3 units are on hand
//! // but the shelf is not overstocked.
//! let sellable = at_least(3u32).and(at_least(7u32).not());
//!
//! assert!(sellable.is_satisfied_by(&5));
//! assert!(!sellable.is_satisfied_by(&2)); // too few
//! assert!(!sellable.is_satisfied_by(&9)); // overstocked
//! ```
//!
//! Any type implementing only [`Specification::is_satisfied_by`] gains the
//! full combinator surface through [`SpecificationExt`]; closures of the
//! shape `Fn(&T) -> bool` work out of the box:
//!
//! ```rust
//! use criteria::specification::*;
//!
//! let even = |n: &i32| n % 2 == 0;
//! let small_even = even.and(below(100));
//!
//! assert!(small_even.is_satisfied_by(&42));
//! assert!(!small_even.is_satisfied_by(&43));
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod specification;

// Re-exports
pub use specification::{BoxedSpecification, Specification, SpecificationExt};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::specification::prelude::*;
}
