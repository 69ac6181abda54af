//! Test utilities for generator pipelines
//!
//! Assertion macros for exercising generators in tests, plus a proptest
//! `Arbitrary` impl for [`IntegerRange`](crate::range::IntegerRange) behind
//! the `proptest` feature so downstream crates can feed random ranges into
//! their own properties.

/// Assert that a generator emits exactly the expected elements, in order.
///
/// # Example
///
/// ```rust
/// use eddy::assert_generates;
/// use eddy::generator::from_iterator;
///
/// assert_generates!(from_iterator(1..4), vec![1, 2, 3]);
/// ```
#[macro_export]
macro_rules! assert_generates {
    ($generator:expr, $expected:expr) => {
        assert_eq!($crate::generator::GeneratorExt::to_vec(&$generator), $expected)
    };
}

/// Assert that a generator emits nothing.
#[macro_export]
macro_rules! assert_generates_nothing {
    ($generator:expr) => {
        assert!(
            $crate::generator::GeneratorExt::to_vec(&$generator).is_empty(),
            "expected no emitted elements"
        )
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for crate::range::IntegerRange {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        (-1_000i64..1_000, -1_000i64..1_000)
            .prop_map(|(from, to)| crate::range::IntegerRange::of(from, to))
            .boxed()
    }
}
