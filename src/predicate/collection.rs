//! Membership predicates
//!
//! Tests a value against a collection it may belong to. This is the mirror
//! image of checking whether a collection contains an element: here the
//! collection is fixed at construction time and the candidate value flows
//! through the pipeline.

use super::combinators::Predicate;

/// Predicate that checks if the tested value is a member of a fixed
/// collection.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IsElementOf<C>(pub C);

impl<T: PartialEq + Send + Sync, C: AsRef<[T]> + Send + Sync> Predicate<T> for IsElementOf<C> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.as_ref().contains(value)
    }
}

/// Create a predicate that checks membership in a fixed collection.
///
/// Accepts anything viewable as a slice: a `Vec`, an array, or a borrowed
/// slice. The collection is held by value; share a slice to avoid cloning.
///
/// # Example
///
/// ```rust
/// use eddy::predicate::*;
///
/// let small_prime = is_element_of(vec![2, 3, 5, 7]);
/// assert!(small_prime.check(&5));
/// assert!(!small_prime.check(&9));
/// ```
pub fn is_element_of<C>(collection: C) -> IsElementOf<C> {
    IsElementOf(collection)
}
