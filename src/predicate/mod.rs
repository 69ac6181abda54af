//! Predicate combinators for composable boolean tests
//!
//! This module provides the `Predicate` capability, a single-argument
//! boolean test, along with logical combinators (`and`, `or`, `not`) and a
//! toolbox of ready-made comparison and membership predicates.
//!
//! # Philosophy
//!
//! Instead of writing ad-hoc boolean expressions at each call site,
//! predicate combinators let you:
//!
//! - Build complex tests from simple, reusable pieces
//! - Compose tests using familiar logical operators
//! - Gate generators on a predicate without the source knowing when to stop
//!
//! # Example
//!
//! ```rust
//! use eddy::predicate::*;
//!
//! let single_digit = ge(0).and(lt(10));
//! assert!(single_digit.check(&7));
//! assert!(!single_digit.check(&42));
//! ```
//!
//! Every named predicate in this module is a plain data struct, so two
//! predicates built from equal arguments compare equal and hash identically.
//! That value equality is what the generator decorators in
//! [`crate::generator`] recurse into for their own structural equality.
//!
//! ```rust
//! use eddy::predicate::*;
//!
//! assert_eq!(lt(5), lt(5));
//! assert_ne!(lt(5), lt(6));
//! ```

mod collection;
mod combinators;
mod number;

// Re-export core trait
pub use combinators::{Predicate, PredicateExt};

// Re-export combinator types
pub use combinators::{And, Constant, Not, Or};

// Re-export value predicates
pub use number::{between, eq, ge, gt, le, lt, ne, Between, Eq, Ge, Gt, Le, Lt, Ne};

// Re-export membership predicates
pub use collection::{is_element_of, IsElementOf};

/// Create a predicate that ignores its argument and always answers `value`.
///
/// Useful as a loop guard or as the degenerate gate of a generator
/// decorator.
///
/// # Example
///
/// ```rust
/// use eddy::predicate::*;
///
/// assert!(constant(true).check(&"anything"));
/// assert!(!Predicate::<i32>::check(&constant(false), &42));
/// ```
pub fn constant(value: bool) -> Constant {
    Constant(value)
}
