//! The kinds of errors raised by operations in this crate.
//!
//! Every kind is wrapped in a [`symcore_error::Error`] whose source is the rendering of the
//! expression (or series) where the problem was detected.

use ariadne::Fmt;
use symcore_attrs::ErrorKind;
use symcore_error::EXPR;

/// The operation is mathematically well-defined, but not implemented for this input.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot {} this expression", self.operation),
    labels = [self.reason.clone()],
)]
pub struct UnsupportedOperation {
    /// The operation that was attempted, such as `"integrate"` or `"evaluate"`.
    pub operation: &'static str,

    /// Why the operation cannot be performed.
    pub reason: String,
}

/// A variable in the expression has no assigned value.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` has no assigned value", self.name),
    labels = ["this expression depends on it"],
    help = if self.suggestions.is_empty() {
        format!("assign a value to {} before evaluating", (&self.name).fg(EXPR))
    } else if self.suggestions.len() == 1 {
        format!("did you mean to assign {}?", (&*self.suggestions[0]).fg(EXPR))
    } else {
        format!(
            "did you mean to assign one of these variables? {}",
            self.suggestions
                .iter()
                .map(|s| format!("`{}`", s.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", ")
        )
    },
)]
pub struct MissingVariable {
    /// The name of the variable without a value.
    pub name: String,

    /// Assigned variables with a name similar to the missing one.
    pub suggestions: Vec<String>,
}

/// Two series expanded around different centers were combined.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "cannot combine power series with different centers",
    labels = [
        format!("this series is centered at {}", self.left),
        format!("this series is centered at {}", self.right),
    ],
    help = "re-expand one of the series around the other's center first",
)]
pub struct IncompatibleCenters {
    /// The center of the left-hand series.
    pub left: String,

    /// The center of the right-hand series.
    pub right: String,
}

/// A value was constructed from malformed input.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid argument: {}", self.reason),
    labels = ["this input"],
)]
pub struct InvalidArgument {
    /// What is wrong with the input.
    pub reason: String,
}

/// Evaluation divided by an element that has no multiplicative inverse.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "division by zero",
    labels = ["this denominator has no inverse"],
)]
pub struct DivisionByZero;
