//! Procedure capabilities: side-effecting consumers of values
//!
//! A [`Procedure`] is the consuming end of a pipeline: it receives each
//! value a generator pushes and does something with it, returning nothing.
//! Closures capturing mutable state (a `Vec` being filled, a counter) are the
//! common case, so the trait takes `&mut self` and has a blanket impl for
//! `FnMut(T)`.

/// A side-effecting consumer of values of type T.
///
/// # Example
///
/// ```rust
/// use eddy::Procedure;
///
/// let mut seen = Vec::new();
/// let mut collect = |value: i32| seen.push(value);
/// collect.run(1);
/// collect.run(2);
/// drop(collect);
/// assert_eq!(seen, vec![1, 2]);
/// ```
pub trait Procedure<T> {
    /// Consume one value.
    fn run(&mut self, value: T);
}

// Blanket impl for closures
impl<T, F> Procedure<T> for F
where
    F: FnMut(T),
{
    #[inline]
    fn run(&mut self, value: T) {
        self(value)
    }
}

/// A side-effecting consumer of pairs of values.
pub trait BinaryProcedure<L, R> {
    /// Consume one pair of values.
    fn run(&mut self, left: L, right: R);
}

impl<L, R, F> BinaryProcedure<L, R> for F
where
    F: FnMut(L, R),
{
    #[inline]
    fn run(&mut self, left: L, right: R) {
        self(left, right)
    }
}

/// Procedure that discards its argument and does nothing.
///
/// The identity element for procedure composition; handy as a placeholder
/// consumer when only a generator's side effects matter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NoOp;

impl<T> Procedure<T> for NoOp {
    #[inline]
    fn run(&mut self, _value: T) {}
}

impl<L, R> BinaryProcedure<L, R> for NoOp {
    #[inline]
    fn run(&mut self, _left: L, _right: R) {}
}

/// Adapts a unary procedure to a binary one by discarding the right
/// argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IgnoreRight<P>(pub P);

impl<L, R, P: Procedure<L>> BinaryProcedure<L, R> for IgnoreRight<P> {
    #[inline]
    fn run(&mut self, left: L, _right: R) {
        self.0.run(left)
    }
}

/// Adapts a unary procedure to a binary one by discarding the left argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IgnoreLeft<P>(pub P);

impl<L, R, P: Procedure<R>> BinaryProcedure<L, R> for IgnoreLeft<P> {
    #[inline]
    fn run(&mut self, _left: L, right: R) {
        self.0.run(right)
    }
}
