//! Specification predicates and their logical combinators
//!
//! A specification is a pure boolean test over a value: "does this candidate
//! satisfy the rule?" Specifications compose with logical operators (`and`,
//! `or`, `not`) to build complex rules from simple, reusable pieces.
//!
//! # Philosophy
//!
//! Instead of scattering boolean expressions through application code,
//! specification combinators let you:
//!
//! - Name each business rule once and reuse it
//! - Combine rules with familiar logical operators
//! - Keep evaluation pure: no side effects, no mutation, deterministic
//!
//! # Example
//!
//! ```rust
//! use criteria::specification::*;
//!
//! let in_stock = at_least(3u32);
//! let overstocked = at_least(7u32);
//! let sellable = in_stock.and(overstocked.not());
//!
//! assert!(sellable.is_satisfied_by(&5));
//! assert!(!sellable.is_satisfied_by(&9));
//! ```
//!
//! # Evaluation order
//!
//! Composite specifications evaluate their left child first, then the right
//! child. `and` and `or` use Rust's native short-circuit operators, so the
//! right child is skipped when the left child alone decides the result. This
//! is observable only for leaves with side effects, which the contract
//! disallows.

mod boxed;
mod combinators;
mod compare;

pub mod prelude;

// Re-export core traits
pub use combinators::{Specification, SpecificationExt};

// Re-export combinator types
pub use combinators::{all_of, any_of, none_of, AllOf, And, AnyOf, NoneOf, Not, Or};

// Re-export comparison leaves
pub use compare::{
    above, at_least, at_most, below, equal_to, not_equal_to, within, Above, AtLeast, AtMost,
    Below, EqualTo, NotEqualTo, Within,
};

// Re-export type erasure
pub use boxed::BoxedSpecification;
