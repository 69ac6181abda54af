//! Finite numeric ranges usable as generator sources
//!
//! An [`IntegerRange`] is a half-open interval `[from, to)` walked with a
//! fixed nonzero step. It is a plain value (`Clone`, `PartialEq`, `Hash`)
//! and an [`Iterator`], so it plugs directly into
//! [`from_iterator`](crate::generator::from_iterator) and participates in the
//! structural equality of any generator pipeline built over it.

use crate::error::InvalidArgument;

/// Ordered, finite sequence of integers from a half-open interval with a
/// fixed step.
///
/// # Examples
///
/// ```rust
/// use eddy::IntegerRange;
///
/// let ascending: Vec<i64> = IntegerRange::of(1, 5).collect();
/// assert_eq!(ascending, vec![1, 2, 3, 4]);
///
/// let descending: Vec<i64> = IntegerRange::new(5, 1, -2).unwrap().collect();
/// assert_eq!(descending, vec![5, 3]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IntegerRange {
    current: i64,
    to: i64,
    step: i64,
}

impl IntegerRange {
    /// Create a range over `[from, to)` advancing by `step`.
    ///
    /// Fails with [`InvalidArgument`] when `step` is zero, or when its sign
    /// points away from `to` so the walk could never terminate.
    pub fn new(from: i64, to: i64, step: i64) -> Result<Self, InvalidArgument> {
        if step == 0 {
            return Err(InvalidArgument::new("step", "must be nonzero"));
        }
        if from != to && (to > from) != (step > 0) {
            return Err(InvalidArgument::new(
                "step",
                format!("step {step} cannot move from {from} toward {to}"),
            ));
        }
        Ok(Self {
            current: from,
            to,
            step,
        })
    }

    /// Create a range over `[from, to)` with a unit step in the right
    /// direction.
    pub fn of(from: i64, to: i64) -> Self {
        let step = if to >= from { 1 } else { -1 };
        Self {
            current: from,
            to,
            step,
        }
    }
}

impl Iterator for IntegerRange {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let exhausted = if self.step > 0 {
            self.current >= self.to
        } else {
            self.current <= self.to
        };
        if exhausted {
            return None;
        }
        let value = self.current;
        // A step past the representable end means the walk is over.
        self.current = self.current.checked_add(self.step).unwrap_or(self.to);
        Some(value)
    }
}
