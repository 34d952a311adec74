/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// text: unrecognized characters, tokens that cannot start or continue the
/// current production, and tokens left over after a complete expression.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while rewriting brackets or
/// evaluating an expression tree, such as unknown operator codes or values
/// that do not fit the integer conversion an operator needs.
pub mod runtime_error;

use thiserror::Error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The three kinds of failure a user can see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unrecognized character or a token that does not fit the grammar.
    Syntax,
    /// A bracket code outside the operator table, or an operator without an
    /// evaluation rule.
    InvalidOperation,
    /// A value outside the range of the integer conversion it needs.
    Range,
}

/// Any error produced while evaluating one line of input.
///
/// Assignments performed before the failure stay in the scope; nothing is
/// rolled back.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Raised by the lexer or the parser.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Raised by the bracket rewrite or the evaluator.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Maps the error onto the user-facing taxonomy.
    ///
    /// ## Example
    /// ```
    /// use bracalc::{
    ///     error::{ErrorKind, ParseError},
    ///     Error,
    /// };
    ///
    /// let err = Error::from(ParseError::InvalidCharacter { found:    '$',
    ///                                                      position: 2, });
    /// assert_eq!(err.kind(), ErrorKind::Syntax);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(_) => ErrorKind::Syntax,
            Self::Runtime(e) => e.kind(),
        }
    }
}
