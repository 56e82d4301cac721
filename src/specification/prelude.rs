//! Specification prelude for convenient imports
//!
//! Re-exports the most commonly used specification types and functions.
//!
//! # Example
//!
//! ```rust
//! use criteria::specification::prelude::*;
//!
//! let sellable = at_least(3u32).and(at_least(7u32).not());
//! assert!(sellable.is_satisfied_by(&5));
//! ```

// Core traits
pub use super::combinators::{Specification, SpecificationExt};

// Logical combinators
pub use super::combinators::{all_of, any_of, none_of, And, Not, Or};

// Comparison leaves
pub use super::compare::{above, at_least, at_most, below, equal_to, not_equal_to, within};

// Type erasure
pub use super::boxed::BoxedSpecification;
