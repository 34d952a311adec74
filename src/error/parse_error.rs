use thiserror::Error;

/// Represents all errors that can occur during lexing or parsing.
///
/// Positions are byte offsets into the whitespace-stripped text the lexer
/// scanned, including any text spliced in by continuation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The lexer met a character that starts no token.
    #[error("Invalid syntax at position {position}: unexpected character '{found}'.")]
    InvalidCharacter {
        /// The offending character.
        found:    char,
        /// Where it was found.
        position: usize,
    },
    /// Found a token that cannot start or continue the current production.
    #[error("Unexpected token '{token}' at position {position}.")]
    UnexpectedToken {
        /// Source text of the token encountered.
        token:    String,
        /// Where the token starts.
        position: usize,
    },
    /// A complete expression was followed by more tokens.
    #[error("Unexpected token '{token}' at position {position} after a complete expression.")]
    UnexpectedTrailingToken {
        /// Source text of the first extra token.
        token:    String,
        /// Where the token starts.
        position: usize,
    },
    /// A `]` appeared without a matching `[`.
    #[error("Unmatched ']' at position {position}.")]
    UnmatchedBracket {
        /// Where the bracket was found.
        position: usize,
    },
}
