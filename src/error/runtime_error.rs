use thiserror::Error;

use crate::error::ErrorKind;

/// Represents all errors that can occur during bracket rewriting and
/// evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    /// A bracketed sub-expression produced a value with no operator assigned.
    #[error("Invalid operation: no operator has code {code}.")]
    UnknownOperatorCode {
        /// The value the sub-expression evaluated to.
        code: f64,
    },
    /// A token reached an operator position it has no evaluation rule for.
    #[error("Invalid operation: '{operator}' is not a {position} operator.")]
    UnsupportedOperator {
        /// Source text of the token.
        operator: String,
        /// Which operator slot was being filled (`unary`, `binary`, ...).
        position: &'static str,
    },
    /// A value could not be truncated to a 64-bit integer.
    #[error("Out of range: {value} cannot be converted to a 64-bit integer.")]
    IntegerOutOfRange {
        /// The value that was being converted.
        value: f64,
    },
    /// An integer operation overflowed.
    #[error("Out of range: {left} % {right} overflows a 64-bit integer.")]
    RemainderOverflow {
        /// Left operand after truncation.
        left:  i64,
        /// Right operand after truncation.
        right: i64,
    },
    /// A numeric literal that is not a decimal number.
    #[error("Invalid syntax: '{text}' is not a number.")]
    MalformedLiteral {
        /// The literal text.
        text: String,
    },
    /// A numeric literal is too large to be represented as a double.
    #[error("Out of range: literal {text} is too large.")]
    LiteralOutOfRange {
        /// The literal text.
        text: String,
    },
}

impl RuntimeError {
    /// Maps the error onto the user-facing taxonomy.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedLiteral { .. } => ErrorKind::Syntax,
            Self::UnknownOperatorCode { .. } | Self::UnsupportedOperator { .. } => {
                ErrorKind::InvalidOperation
            },
            Self::IntegerOutOfRange { .. }
            | Self::RemainderOverflow { .. }
            | Self::LiteralOutOfRange { .. } => ErrorKind::Range,
        }
    }
}
