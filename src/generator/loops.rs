//! Predicate-gated generator decorators
//!
//! Four decorators bound a wrapped generator with a predicate. They differ
//! on two axes: whether the gate sits before or after the element is
//! forwarded, and which way the constructor reads.
//!
//! | type | arguments | gate | triggering element |
//! |------|-----------|------|--------------------|
//! | [`GenerateWhile`] | generator, predicate | before forwarding | dropped |
//! | [`WhileGenerate`] | predicate, generator | before forwarding | dropped |
//! | [`GenerateUntil`] | generator, predicate | after forwarding | emitted |
//! | [`UntilGenerate`] | predicate, generator | before forwarding | dropped |
//!
//! `GenerateWhile` and `WhileGenerate` emit the same prefix for the same
//! source and predicate. They stay distinct types all the same: one reads
//! source-first ("generate while p holds"), the other guard-first ("while p
//! holds, generate"), and values of different types never compare equal.
//!
//! Each decorator exclusively owns its components and is immutable after
//! construction. Equality and hashing are structural, recursing into the
//! wrapped generator and predicate.

use std::ops::ControlFlow;

use super::Generator;
use crate::predicate::Predicate;

/// Emits the longest prefix of the wrapped sequence for which the predicate
/// holds on every element.
///
/// Each candidate is tested before it is forwarded; the first failing
/// element, and everything after it, is never seen by the consumer.
///
/// # Example
///
/// ```rust
/// use eddy::generator::{from_iterator, GenerateWhile, GeneratorExt};
/// use eddy::predicate::lt;
///
/// let gen = GenerateWhile::new(from_iterator(1..=10), lt(5));
/// assert_eq!(gen.to_vec(), vec![1, 2, 3, 4]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GenerateWhile<G, P> {
    wrapped: G,
    predicate: P,
}

impl<G, P> GenerateWhile<G, P> {
    /// Gate `wrapped` on `predicate`.
    pub fn new(wrapped: G, predicate: P) -> Self {
        Self { wrapped, predicate }
    }
}

impl<T, G, P> Generator<T> for GenerateWhile<G, P>
where
    G: Generator<T>,
    P: Predicate<T>,
{
    fn generate(&self, sink: &mut dyn FnMut(T) -> ControlFlow<()>) -> ControlFlow<()> {
        let mut stopped_by_sink = false;
        let _ = self.wrapped.generate(&mut |value| {
            if self.predicate.check(&value) {
                let flow = sink(value);
                stopped_by_sink = flow.is_break();
                flow
            } else {
                #[cfg(feature = "tracing")]
                tracing::trace!("predicate gate tripped, ending generation");
                ControlFlow::Break(())
            }
        });
        // A break caused by our own gate is absorbed here; only a stop the
        // caller's sink asked for propagates outward.
        if stopped_by_sink {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

/// Guard-first twin of [`GenerateWhile`]: while the predicate holds,
/// generate.
///
/// Tests each candidate before the iteration step advances, emits it only
/// on a pass, and ends the whole generation on the first failure. For a
/// given source and predicate the emitted prefix is identical to
/// `GenerateWhile`'s; the two remain distinct, never-equal types with
/// swapped constructor arguments, so pipelines keep saying which reading
/// they meant.
///
/// # Example
///
/// ```rust
/// use eddy::generator::{from_iterator, GeneratorExt, WhileGenerate};
/// use eddy::predicate::lt;
///
/// let gen = WhileGenerate::new(lt(5), from_iterator(1..=10));
/// assert_eq!(gen.to_vec(), vec![1, 2, 3, 4]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WhileGenerate<P, G> {
    predicate: P,
    wrapped: G,
}

impl<P, G> WhileGenerate<P, G> {
    /// Guard `wrapped` with `predicate`.
    pub fn new(predicate: P, wrapped: G) -> Self {
        Self { predicate, wrapped }
    }
}

impl<T, P, G> Generator<T> for WhileGenerate<P, G>
where
    P: Predicate<T>,
    G: Generator<T>,
{
    fn generate(&self, sink: &mut dyn FnMut(T) -> ControlFlow<()>) -> ControlFlow<()> {
        let mut stopped_by_sink = false;
        let _ = self.wrapped.generate(&mut |value| {
            if !self.predicate.check(&value) {
                #[cfg(feature = "tracing")]
                tracing::trace!("loop guard failed, ending generation");
                ControlFlow::Break(())
            } else {
                let flow = sink(value);
                stopped_by_sink = flow.is_break();
                flow
            }
        });
        if stopped_by_sink {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

/// Emits elements up to and including the first one for which the predicate
/// holds.
///
/// The gate sits after forwarding: every element reaches the consumer
/// before its test result can end the generation, so the triggering element
/// is included in the output.
///
/// # Example
///
/// ```rust
/// use eddy::generator::{from_iterator, GeneratorExt};
/// use eddy::predicate::ge;
///
/// let gen = from_iterator(1..=10).generate_until(ge(5));
/// assert_eq!(gen.to_vec(), vec![1, 2, 3, 4, 5]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GenerateUntil<G, P> {
    wrapped: G,
    predicate: P,
}

impl<G, P> GenerateUntil<G, P> {
    /// Bound `wrapped` by `predicate`, inclusively.
    pub fn new(wrapped: G, predicate: P) -> Self {
        Self { wrapped, predicate }
    }
}

impl<T, G, P> Generator<T> for GenerateUntil<G, P>
where
    G: Generator<T>,
    P: Predicate<T>,
{
    fn generate(&self, sink: &mut dyn FnMut(T) -> ControlFlow<()>) -> ControlFlow<()> {
        let mut stopped_by_sink = false;
        let _ = self.wrapped.generate(&mut |value| {
            let is_last = self.predicate.check(&value);
            match sink(value) {
                ControlFlow::Break(()) => {
                    stopped_by_sink = true;
                    ControlFlow::Break(())
                }
                ControlFlow::Continue(()) if is_last => ControlFlow::Break(()),
                flow => flow,
            }
        });
        if stopped_by_sink {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

/// Guard-first exclusive bound: until the predicate holds, generate.
///
/// Tests each candidate before forwarding and ends the generation, without
/// emitting, on the first element for which the predicate holds. The
/// inverse reading of [`WhileGenerate`].
///
/// # Example
///
/// ```rust
/// use eddy::generator::{from_iterator, GeneratorExt, UntilGenerate};
/// use eddy::predicate::ge;
///
/// let gen = UntilGenerate::new(ge(5), from_iterator(1..=10));
/// assert_eq!(gen.to_vec(), vec![1, 2, 3, 4]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UntilGenerate<P, G> {
    predicate: P,
    wrapped: G,
}

impl<P, G> UntilGenerate<P, G> {
    /// Bound `wrapped` by `predicate`, exclusively.
    pub fn new(predicate: P, wrapped: G) -> Self {
        Self { predicate, wrapped }
    }
}

impl<T, P, G> Generator<T> for UntilGenerate<P, G>
where
    P: Predicate<T>,
    G: Generator<T>,
{
    fn generate(&self, sink: &mut dyn FnMut(T) -> ControlFlow<()>) -> ControlFlow<()> {
        let mut stopped_by_sink = false;
        let _ = self.wrapped.generate(&mut |value| {
            if self.predicate.check(&value) {
                ControlFlow::Break(())
            } else {
                let flow = sink(value);
                stopped_by_sink = flow.is_break();
                flow
            }
        });
        if stopped_by_sink {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{from_iterator, GeneratorExt};
    use crate::predicate::{constant, ge, lt};
    use crate::range::IntegerRange;

    fn one_to_ten() -> crate::generator::IteratorToGenerator<IntegerRange> {
        from_iterator(IntegerRange::of(1, 11))
    }

    #[test]
    fn test_generate_while_emits_passing_prefix() {
        let mut seen = Vec::new();
        let mut calls = 0;
        GenerateWhile::new(one_to_ten(), lt(5)).run(&mut |value| {
            seen.push(value);
            calls += 1;
        });
        assert_eq!(seen, vec![1, 2, 3, 4]);
        assert_eq!(calls, 4);
    }

    #[test]
    fn test_while_generate_emits_passing_prefix() {
        let mut seen = Vec::new();
        WhileGenerate::new(lt(5), one_to_ten()).run(&mut |value| seen.push(value));
        assert_eq!(seen, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_while_and_generate_while_agree() {
        let a = GenerateWhile::new(one_to_ten(), lt(8)).to_vec();
        let b = WhileGenerate::new(lt(8), one_to_ten()).to_vec();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_until_includes_trigger() {
        let gen = GenerateUntil::new(one_to_ten(), ge(5));
        assert_eq!(gen.to_vec(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_until_generate_excludes_trigger() {
        let gen = UntilGenerate::new(ge(5), one_to_ten());
        assert_eq!(gen.to_vec(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_empty_source_emits_nothing() {
        let empty = from_iterator(IntegerRange::of(1, 1));
        assert!(GenerateWhile::new(empty, constant(true)).to_vec().is_empty());
        let empty = from_iterator(IntegerRange::of(1, 1));
        assert!(WhileGenerate::new(constant(true), empty).to_vec().is_empty());
    }

    #[test]
    fn test_never_failing_predicate_emits_everything() {
        let gen = GenerateWhile::new(one_to_ten(), constant(true));
        assert_eq!(gen.to_vec(), vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_always_failing_predicate_emits_nothing() {
        assert!(GenerateWhile::new(one_to_ten(), constant(false))
            .to_vec()
            .is_empty());
        assert!(WhileGenerate::new(constant(false), one_to_ten())
            .to_vec()
            .is_empty());
    }

    #[test]
    fn test_decorator_is_reusable() {
        let gen = GenerateWhile::new(one_to_ten(), lt(5));
        assert_eq!(gen.to_vec(), vec![1, 2, 3, 4]);
        assert_eq!(gen.to_vec(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_wrapped_generator_never_sees_gate_break() {
        // The gate's own stop must be absorbed: from outside, a tripped
        // GenerateWhile completes normally.
        let flow = GenerateWhile::new(one_to_ten(), lt(5))
            .generate(&mut |_| ControlFlow::Continue(()));
        assert_eq!(flow, ControlFlow::Continue(()));
    }

    #[test]
    fn test_sink_break_propagates_through_gate() {
        let mut seen = Vec::new();
        let flow = GenerateWhile::new(one_to_ten(), lt(8)).generate(&mut |value| {
            seen.push(value);
            if value == 2 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert_eq!(seen, vec![1, 2]);
        assert_eq!(flow, ControlFlow::Break(()));
    }

    #[test]
    fn test_nested_gates() {
        let gen = GenerateWhile::new(one_to_ten().generate_while(lt(8)), lt(5));
        assert_eq!(gen.to_vec(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_generate_while_equality() {
        let a = GenerateWhile::new(one_to_ten(), lt(5));
        assert_eq!(a, a);
        assert_eq!(a, GenerateWhile::new(one_to_ten(), lt(5)));
        assert_ne!(a, GenerateWhile::new(one_to_ten(), lt(6)));
        assert_ne!(
            a,
            GenerateWhile::new(from_iterator(IntegerRange::of(1, 12)), lt(5))
        );
    }

    #[test]
    fn test_while_generate_equality() {
        let a = WhileGenerate::new(lt(5), one_to_ten());
        assert_eq!(a, a);
        assert_eq!(a, WhileGenerate::new(lt(5), one_to_ten()));
        assert_ne!(a, WhileGenerate::new(lt(6), one_to_ten()));
        assert_ne!(
            a,
            WhileGenerate::new(lt(5), from_iterator(IntegerRange::of(1, 12)))
        );
    }

    #[test]
    fn test_equal_decorators_hash_equal() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        fn hash_of<H: Hash>(value: &H) -> u64 {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            hasher.finish()
        }

        let a = GenerateWhile::new(one_to_ten(), lt(5));
        let b = GenerateWhile::new(one_to_ten(), lt(5));
        assert_eq!(hash_of(&a), hash_of(&b));

        let c = WhileGenerate::new(lt(5), one_to_ten());
        let d = WhileGenerate::new(lt(5), one_to_ten());
        assert_eq!(hash_of(&c), hash_of(&d));
    }
}
