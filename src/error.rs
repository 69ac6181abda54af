//! Error types for combinator construction.

/// Error returned when a combinator is constructed from an unusable argument.
///
/// Raised synchronously at construction time, never mid-iteration. Once a
/// combinator is built, the only failures a traversal can surface are the
/// ones a caller-supplied predicate or consumer raises itself.
///
/// # Examples
///
/// ```rust
/// use eddy::IntegerRange;
///
/// let err = IntegerRange::new(1, 10, 0).unwrap_err();
/// assert_eq!(err.argument, "step");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidArgument {
    /// Name of the offending constructor argument.
    pub argument: &'static str,
    /// Human-readable description of what made the argument unusable.
    pub reason: String,
}

impl InvalidArgument {
    /// Create a new InvalidArgument error.
    pub fn new(argument: &'static str, reason: impl Into<String>) -> Self {
        Self {
            argument,
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid argument `{}`: {}", self.argument, self.reason)
    }
}

impl std::error::Error for InvalidArgument {}
