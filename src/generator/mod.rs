//! Push-style lazy generators
//!
//! A [`Generator`] produces a sequence by *driving* a consumer: the caller
//! hands over a sink and the generator invokes it once per element, in
//! order, on the caller's thread. Nothing is buffered; elements exist only
//! for the duration of the sink call.
//!
//! Early termination is an explicit status, not an unwind: every sink call
//! answers with a [`ControlFlow`], and each layer of a pipeline checks it
//! before producing the next element. A decorator that decides to stop on
//! its own (a predicate gate tripping) absorbs the break and completes
//! normally from its caller's point of view; a break requested by the
//! caller's own sink propagates out so outer layers stop too.
//!
//! # Example
//!
//! ```rust
//! use eddy::generator::{from_iterator, GeneratorExt};
//! use eddy::predicate::lt;
//!
//! let gen = from_iterator(1..=10).generate_while(lt(5));
//!
//! let mut collected = Vec::new();
//! gen.run(&mut |value| collected.push(value));
//! assert_eq!(collected, vec![1, 2, 3, 4]);
//!
//! // Generators are reusable; each run re-walks the source.
//! assert_eq!(gen.to_vec(), vec![1, 2, 3, 4]);
//! ```

use std::ops::ControlFlow;

use crate::procedure::Procedure;

mod loops;

pub use loops::{GenerateUntil, GenerateWhile, UntilGenerate, WhileGenerate};

/// A push-style producer of a lazy sequence of values.
///
/// Implementations stream one element at a time into `sink` and retain no
/// state across elements beyond what is needed to find the next one.
/// Whether a generator can be walked more than once depends entirely on the
/// wrapped source; the adapters in this module clone their source per walk,
/// so they are as re-iterable as the source's `Clone`.
pub trait Generator<T> {
    /// Feed each produced element to `sink`, in sequence order, until the
    /// source is exhausted or `sink` answers [`ControlFlow::Break`].
    ///
    /// Returns `Break` only when the *sink* requested the stop. A generator
    /// that cuts its own traversal short (a gating decorator, say) reports
    /// `Continue` because, from the caller's point of view, it completed.
    fn generate(&self, sink: &mut dyn FnMut(T) -> ControlFlow<()>) -> ControlFlow<()>;
}

impl<T, G: Generator<T> + ?Sized> Generator<T> for &G {
    fn generate(&self, sink: &mut dyn FnMut(T) -> ControlFlow<()>) -> ControlFlow<()> {
        (**self).generate(sink)
    }
}

/// Extension trait with the consumer-facing surface of a generator.
///
/// Blanket-implemented for every [`Generator`]; these methods never expose
/// the internal stop status.
pub trait GeneratorExt<T>: Generator<T> + Sized {
    /// Drive `consumer` once per element. Always returns normally, whether
    /// the sequence ran out or a gate upstream stopped it.
    fn run<P: Procedure<T>>(&self, consumer: &mut P) {
        let _ = self.generate(&mut |value| {
            consumer.run(value);
            ControlFlow::Continue(())
        });
    }

    /// Collect every emitted element into a `Vec`.
    fn to_vec(&self) -> Vec<T> {
        let mut values = Vec::new();
        self.run(&mut |value| values.push(value));
        values
    }

    /// Gate this generator on `predicate`: emit the longest prefix for
    /// which it holds, stopping on the first failing element without
    /// emitting it.
    fn generate_while<P>(self, predicate: P) -> GenerateWhile<Self, P> {
        GenerateWhile::new(self, predicate)
    }

    /// Emit elements up to and including the first one for which
    /// `predicate` holds.
    fn generate_until<P>(self, predicate: P) -> GenerateUntil<Self, P> {
        GenerateUntil::new(self, predicate)
    }
}

impl<T, G: Generator<T>> GeneratorExt<T> for G {}

/// Adapts any cloneable iterator into a [`Generator`].
///
/// Each [`generate`](Generator::generate) call walks a fresh clone of the
/// iterator captured at construction time, so the adapter is re-iterable
/// whenever cloning the source reproduces it. Two adapters compare equal
/// iff their sources do; sources without value equality (bare closures,
/// `std::iter` chains over them) simply cannot be compared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IteratorToGenerator<I>(I);

impl<I: Iterator + Clone> IteratorToGenerator<I> {
    /// Wrap an iterator. The iterator is stored as-is and cloned per walk.
    pub fn new(iter: I) -> Self {
        Self(iter)
    }
}

impl<T, I> Generator<T> for IteratorToGenerator<I>
where
    I: Iterator<Item = T> + Clone,
{
    fn generate(&self, sink: &mut dyn FnMut(T) -> ControlFlow<()>) -> ControlFlow<()> {
        for value in self.0.clone() {
            sink(value)?;
        }
        ControlFlow::Continue(())
    }
}

/// Wrap anything iterable into a [`Generator`].
///
/// # Example
///
/// ```rust
/// use eddy::generator::{from_iterator, GeneratorExt};
///
/// let gen = from_iterator(vec!["a", "b"]);
/// assert_eq!(gen.to_vec(), vec!["a", "b"]);
/// ```
pub fn from_iterator<I>(source: I) -> IteratorToGenerator<I::IntoIter>
where
    I: IntoIterator,
    I::IntoIter: Clone,
{
    IteratorToGenerator::new(source.into_iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::IntegerRange;

    #[test]
    fn test_adapter_visits_every_element_in_order() {
        let gen = from_iterator(IntegerRange::of(1, 5));
        assert_eq!(gen.to_vec(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_adapter_empty_source() {
        let gen = from_iterator(IntegerRange::of(3, 3));
        assert!(gen.to_vec().is_empty());
    }

    #[test]
    fn test_adapter_reiterable() {
        let gen = from_iterator(1..4);
        assert_eq!(gen.to_vec(), vec![1, 2, 3]);
        assert_eq!(gen.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_sink_break_stops_traversal() {
        let mut seen = Vec::new();
        let flow = from_iterator(1..100).generate(&mut |value| {
            seen.push(value);
            if value == 3 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert_eq!(seen, vec![1, 2, 3]);
        assert_eq!(flow, ControlFlow::Break(()));
    }

    #[test]
    fn test_run_counts_invocations() {
        let mut calls = 0;
        from_iterator(0..7).run(&mut |_| calls += 1);
        assert_eq!(calls, 7);
    }

    #[test]
    fn test_adapter_equality() {
        assert_eq!(from_iterator(1..10), from_iterator(1..10));
        assert_ne!(from_iterator(1..10), from_iterator(1..11));
        assert_eq!(
            from_iterator(IntegerRange::of(1, 10)),
            from_iterator(IntegerRange::of(1, 10))
        );
    }

    #[test]
    fn test_generator_by_reference() {
        let gen = from_iterator(1..4);
        let by_ref: &dyn Generator<i32> = &gen;
        let mut seen = Vec::new();
        let _ = by_ref.generate(&mut |value| {
            seen.push(value);
            ControlFlow::Continue(())
        });
        assert_eq!(seen, vec![1, 2, 3]);
    }
}
