//! # bracalc
//!
//! bracalc is an interactive calculator written in Rust.
//! It evaluates arithmetic, comparisons, trigonometric and logarithmic
//! functions, conditionals and session variables, with two extras:
//! incomplete input asks for more lines instead of failing, and a bracketed
//! sub-expression can compute which operator to apply (`3[1]4` is `3+4`).

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{
    evaluator::core::Interpreter,
    lexer::Lexer,
    parser::core::{Interrupt, Parser},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator enums. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines a closed set of expression variants, including an explicit
///   variant for a missing branch.
/// - Converts operator tokens into typed operators.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// rewriting brackets, or evaluating, and maps each of them onto one of three
/// kinds: syntax, invalid operation, and range.
///
/// # Responsibilities
/// - Defines error enums for all failure modes.
/// - Attaches positions and offending values for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of evaluation.
///
/// This module ties together lexing, parsing, bracket rewriting, evaluation,
/// the session scope and the line source used for continuation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator.
/// - Keeps "need more input" apart from errors.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Result formatting and session diagnostics.
///
/// Renders values the way the interactive session prints them, dumps the
/// scope, and holds the help text.
pub mod report;
/// General utilities for numeric conversion and comparison.
pub mod util;

pub use ast::Expr;
pub use error::Error;
pub use interpreter::{
    evaluator::core::Evaluation,
    scope::Scope,
    source::{LineSource, LinesInput, NoInput, ScriptedInput},
};

/// The result of feeding text to the calculator.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The text formed a complete expression.
    Complete(T),
    /// The text ended where a token was required and the line source had no
    /// more input.
    NeedMoreInput {
        /// Text of the expression consumed so far.
        consumed: String,
    },
}

impl<T> Outcome<T> {
    /// Returns the completed value, if any.
    pub fn complete(self) -> Option<T> {
        match self {
            Self::Complete(value) => Some(value),
            Self::NeedMoreInput { .. } => None,
        }
    }
}

fn settle<T>(result: Result<T, Interrupt>) -> Result<Outcome<T>, Error> {
    match result {
        Ok(value) => Ok(Outcome::Complete(value)),
        Err(Interrupt::NeedMoreInput { consumed }) => Ok(Outcome::NeedMoreInput { consumed }),
        Err(Interrupt::Failed(error)) => Err(error),
    }
}

/// Evaluates one expression in `scope`, without any source of further input.
///
/// Incomplete text yields [`Outcome::NeedMoreInput`].
///
/// # Errors
/// Returns an error if lexing, parsing, bracket rewriting or evaluation fails.
/// Assignments made before the failure remain in `scope`.
///
/// # Examples
/// ```
/// use bracalc::{evaluate, Outcome, Scope};
///
/// let mut scope = Scope::new();
///
/// let result = evaluate("x = 3[1]4", &mut scope).unwrap();
/// let evaluation = result.complete().unwrap();
/// assert_eq!(evaluation.value, 7.0);
/// assert!(evaluation.accurate);
/// assert_eq!(scope.get("x"), Some(7.0));
///
/// let result = evaluate("x +", &mut scope).unwrap();
/// assert_eq!(result, Outcome::NeedMoreInput { consumed: "x+".to_string() });
///
/// // `$` is not part of the language.
/// assert!(evaluate("$", &mut scope).is_err());
/// ```
pub fn evaluate(text: &str, scope: &mut Scope) -> Result<Outcome<Evaluation>, Error> {
    evaluate_with(text, scope, &mut NoInput)
}

/// Evaluates one expression in `scope`, reading continuation lines from
/// `source` whenever the expression is incomplete.
///
/// # Errors
/// Returns an error if lexing, parsing, bracket rewriting or evaluation fails.
pub fn evaluate_with(text: &str,
                     scope: &mut Scope,
                     source: &mut dyn LineSource)
                     -> Result<Outcome<Evaluation>, Error> {
    settle(Interpreter::new(scope, source).interpret(text))
}

/// Parses one expression without rewriting brackets or evaluating it.
///
/// # Errors
/// Returns an error if lexing or parsing fails.
///
/// # Examples
/// ```
/// use bracalc::{parse_expression, ScriptedInput};
///
/// let mut input = ScriptedInput::new(["4"]);
/// let continued = parse_expression("3+", &mut input).unwrap();
/// let one_shot = parse_expression("3+4", &mut ScriptedInput::default()).unwrap();
/// assert_eq!(continued, one_shot);
/// assert_eq!(input.prompts(), ["3+"]);
/// ```
pub fn parse_expression(text: &str, source: &mut dyn LineSource) -> Result<Outcome<Expr>, Error> {
    settle(Parser::new(Lexer::new(text), source).and_then(Parser::parse))
}
