use tracing::debug;

use crate::{
    error::{ParseError, RuntimeError},
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        lexer::{Lexer, Token},
        parser::core::{ParseResult, request_more},
    },
};

/// Maps the value of a bracketed sub-expression to the text spliced in its
/// place.
///
/// Lookup takes the first entry with a matching code, so `%` under `-3` is
/// shadowed by `lg` and cannot be selected.
pub const OPERATOR_CODES: [(f64, &str); 18] = [(-4.0, "ln"),
                                               (-3.0, "lg"),
                                               (-3.0, "%"),
                                               (-2.0, "//"),
                                               (-1.0, "/"),
                                               (1.0, "+"),
                                               (2.0, "-"),
                                               (3.0, "*"),
                                               (4.0, "^"),
                                               (5.0, "<"),
                                               (6.0, "<="),
                                               (7.0, ">"),
                                               (8.0, ">="),
                                               (9.0, "=="),
                                               (10.0, "sin"),
                                               (11.0, "cos"),
                                               (12.0, "tan"),
                                               (13.0, "cot")];

/// Returns the operator text for a bracket value.
///
/// # Errors
/// `RuntimeError::UnknownOperatorCode` unless `code` equals one of the codes
/// in [`OPERATOR_CODES`] exactly.
///
/// ## Example
/// ```
/// use bracalc::interpreter::evaluator::rewrite::operator_for_code;
///
/// assert_eq!(operator_for_code(1.0), Ok("+"));
/// assert_eq!(operator_for_code(-3.0), Ok("lg"));
/// assert!(operator_for_code(1.5).is_err());
/// ```
#[allow(clippy::float_cmp)]
pub fn operator_for_code(code: f64) -> EvalResult<&'static str> {
    OPERATOR_CODES.iter()
                  .find(|(candidate, _)| *candidate == code)
                  .map(|(_, operator)| *operator)
                  .ok_or(RuntimeError::UnknownOperatorCode { code })
}

impl Interpreter<'_> {
    /// Replaces every `[sub-expression]` in `text` with the operator its
    /// value selects.
    ///
    /// Text outside brackets is copied token by token. Brackets nest; the
    /// innermost is rewritten first. Each sub-expression is parsed and
    /// evaluated by this interpreter, so it shares the caller's variables.
    ///
    /// A bracket still open at the end of the input requests more lines, with
    /// the whole text consumed so far as the prompt, until its `]` arrives.
    /// Its contents are evaluated only then.
    ///
    /// # Errors
    /// - `ParseError::UnmatchedBracket` for a `]` without `[`.
    /// - `RuntimeError::UnknownOperatorCode` for a value with no operator.
    /// - Anything raised while parsing or evaluating a sub-expression.
    pub(crate) fn rewrite(&mut self, text: &str) -> ParseResult<String> {
        let mut lexer = Lexer::new(text);
        self.rewrite_run(&mut lexer, false)
    }

    /// Copies tokens until the input ends or, when `nested`, until the `]`
    /// closing the run. A nested run never ends with the input: it asks for
    /// more instead.
    fn rewrite_run(&mut self, lexer: &mut Lexer, nested: bool) -> ParseResult<String> {
        let mut rewritten = String::new();

        loop {
            match lexer.next_token()? {
                None if nested => request_more(lexer, self.source())?,
                None => return Ok(rewritten),
                Some(Token::RBracket) if nested => return Ok(rewritten),
                Some(Token::RBracket) => {
                    return Err(ParseError::UnmatchedBracket { position: lexer.token_start() }.into());
                },
                Some(Token::LBracket) => {
                    let inner = self.rewrite_run(lexer, true)?;
                    rewritten.push_str(self.select_operator(&inner)?);
                },
                Some(token) => rewritten.push_str(token.text()),
            }
        }
    }

    /// Evaluates a bracket's contents and looks up the operator it selects.
    fn select_operator(&mut self, inner: &str) -> ParseResult<&'static str> {
        let expr = self.parse(inner)?;
        let code = self.eval(&expr)?;
        let operator = operator_for_code(code)?;

        debug!(sub_expression = inner, code, operator, "bracket rewritten");
        Ok(operator)
    }
}
