use tracing::debug;

use crate::{
    ast::Expr,
    error::{Error, ParseError, RuntimeError},
    interpreter::{
        lexer::{Lexer, Token},
        source::LineSource,
    },
};

/// Why parsing or evaluation stopped before producing a value.
///
/// Running out of input is not an error: it is reported as
/// [`Interrupt::NeedMoreInput`], kept apart from the error taxonomy carried by
/// [`Interrupt::Failed`].
#[derive(Debug, Clone, PartialEq)]
pub enum Interrupt {
    /// The expression is incomplete and the line source had nothing more.
    NeedMoreInput {
        /// Text of the expression consumed so far.
        consumed: String,
    },
    /// A syntax, invalid-operation or range error.
    Failed(Error),
}

impl From<Error> for Interrupt {
    fn from(error: Error) -> Self {
        Self::Failed(error)
    }
}

impl From<ParseError> for Interrupt {
    fn from(error: ParseError) -> Self {
        Self::Failed(error.into())
    }
}

impl From<RuntimeError> for Interrupt {
    fn from(error: RuntimeError) -> Self {
        Self::Failed(error.into())
    }
}

/// Result type used by the parser and by the pipeline around it.
pub type ParseResult<T> = Result<T, Interrupt>;

/// Asks `source` for one more line and splices it into `lexer` at the cursor.
///
/// The prompt is everything the lexer has consumed so far.
///
/// # Errors
/// [`Interrupt::NeedMoreInput`] if the source is exhausted.
pub fn request_more(lexer: &mut Lexer, source: &mut dyn LineSource) -> ParseResult<()> {
    let consumed = lexer.consumed_text().to_string();
    debug!(%consumed, "expression incomplete, requesting more input");

    match source.read_line(&consumed) {
        Some(line) => {
            lexer.insert(&line);
            Ok(())
        },
        None => Err(Interrupt::NeedMoreInput { consumed }),
    }
}

/// A recursive-descent parser with one token of lookahead.
///
/// Whenever a rule needs a token and the input has ended, the parser reads one
/// more line from its [`LineSource`], splices it in, and carries on as if the
/// line had been part of the input from the start.
pub struct Parser<'s> {
    lexer:              Lexer,
    source:             &'s mut dyn LineSource,
    pub(crate) current: Option<Token>,
}

impl<'s> Parser<'s> {
    /// Creates a parser and scans the first token.
    ///
    /// # Errors
    /// `ParseError::InvalidCharacter` if the first token cannot be scanned.
    pub fn new(lexer: Lexer, source: &'s mut dyn LineSource) -> ParseResult<Self> {
        let mut parser = Self { lexer,
                                source,
                                current: None };
        parser.advance()?;
        Ok(parser)
    }

    /// Parses one complete expression.
    ///
    /// Grammar: `expression := comparison`
    ///
    /// # Errors
    /// - `ParseError::UnexpectedTrailingToken` if tokens remain after the
    ///   expression.
    /// - Any error or interrupt raised by the grammar rules.
    pub fn parse(mut self) -> ParseResult<Expr> {
        let expr = self.parse_comparison()?;

        if let Some(token) = &self.current {
            let position = self.lexer.token_start();
            return Err(ParseError::UnexpectedTrailingToken { token: token.text().to_string(),
                                                             position }.into());
        }
        Ok(expr)
    }

    /// Replaces the lookahead with the next token from the lexer.
    pub(crate) fn advance(&mut self) -> ParseResult<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    /// Reads one more line into the lexer and refreshes the lookahead.
    pub(crate) fn continue_input(&mut self) -> ParseResult<()> {
        request_more(&mut self.lexer, &mut *self.source)?;
        self.advance()
    }

    /// Consumes the lookahead if it equals `expected`.
    ///
    /// At end of input this requests continuation and tries again, once per
    /// missing line, until a token arrives.
    ///
    /// # Errors
    /// `ParseError::UnexpectedToken` if a different token is found.
    pub(crate) fn eat(&mut self, expected: &Token) -> ParseResult<()> {
        loop {
            match &self.current {
                Some(token) if token == expected => return self.advance(),
                Some(token) => return Err(self.unexpected(token)),
                None => self.continue_input()?,
            }
        }
    }

    /// Builds the error for a token that does not fit the current rule.
    pub(crate) fn unexpected(&self, token: &Token) -> Interrupt {
        ParseError::UnexpectedToken { token:    token.text().to_string(),
                                      position: self.lexer.token_start(), }.into()
    }
}
