//! # Eddy
//!
//! > *An eddy is where the water turns back on itself.*
//!
//! A Rust library for push-style lazy generators and composable functional
//! combinators.
//!
//! ## Philosophy
//!
//! Consumers build pipelines out of small, reusable behavior units
//! (predicates, procedures, generators) instead of writing explicit control
//! flow. A generator *drives* a consumer, pushing one element at a time;
//! predicate gates turn possibly-long sequences into finite prefixes without
//! the source ever knowing when to stop.
//!
//! ## Quick Example
//!
//! ```rust
//! use eddy::generator::{from_iterator, GeneratorExt};
//! use eddy::predicate::lt;
//!
//! // Emit the longest prefix of 1..=10 that stays below 5.
//! let prefix = from_iterator(1..=10).generate_while(lt(5)).to_vec();
//! assert_eq!(prefix, vec![1, 2, 3, 4]);
//! ```
//!
//! Generators, predicates, and their decorators compare structurally, so two
//! independently built pipelines over equal sources are themselves equal:
//!
//! ```rust
//! use eddy::generator::{from_iterator, GenerateWhile};
//! use eddy::predicate::lt;
//!
//! let a = GenerateWhile::new(from_iterator(1..10), lt(5));
//! let b = GenerateWhile::new(from_iterator(1..10), lt(5));
//! assert_eq!(a, b);
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod composite;
pub mod error;
pub mod generator;
pub mod predicate;
pub mod procedure;
pub mod range;
pub mod testing;

// Re-exports
pub use error::InvalidArgument;
pub use generator::{Generator, GeneratorExt};
pub use procedure::{BinaryProcedure, Procedure};
pub use range::IntegerRange;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::composite::{do_while, while_do};
    pub use crate::error::InvalidArgument;
    pub use crate::generator::{
        from_iterator, GenerateUntil, GenerateWhile, Generator, GeneratorExt,
        IteratorToGenerator, UntilGenerate, WhileGenerate,
    };
    pub use crate::predicate::{Predicate, PredicateExt};
    pub use crate::procedure::{BinaryProcedure, NoOp, Procedure};
    pub use crate::range::IntegerRange;
}
