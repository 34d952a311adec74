use crate::{
    ast::{AssignOperator, Expr},
    error::RuntimeError,
    interpreter::{
        lexer::Lexer,
        parser::core::{ParseResult, Parser},
        scope::Scope,
        source::LineSource,
    },
    util::num::{MAX_SAFE_INTEGER, is_integral},
};

/// Result type used by the evaluator.
///
/// Evaluating a finished tree never needs more input, so only
/// [`RuntimeError`]s can occur.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The value of a top-level expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// The computed value.
    pub value:    f64,
    /// `false` if the printed decimal may not be exact: a fractional value or
    /// a result beyond `2^53 - 1` was seen since the last infinite or NaN
    /// result.
    pub accurate: bool,
}

/// Runs the whole pipeline for one top-level expression.
///
/// The interpreter borrows the session [`Scope`] and [`LineSource`] and owns
/// the accurate flag. Bracketed sub-expressions are evaluated by the same
/// interpreter, so they see and modify the same variables and contribute to
/// the same flag.
pub struct Interpreter<'a> {
    scope:    &'a mut Scope,
    source:   &'a mut dyn LineSource,
    accurate: bool,
}

impl<'a> Interpreter<'a> {
    /// Creates an interpreter for one top-level expression.
    pub fn new(scope: &'a mut Scope, source: &'a mut dyn LineSource) -> Self {
        Self { scope,
               source,
               accurate: true }
    }

    /// Rewrites brackets in `text`, parses the result, and evaluates it.
    ///
    /// # Errors
    /// - [`Interrupt::NeedMoreInput`](crate::interpreter::parser::core::Interrupt)
    ///   if the expression is incomplete and the line source is exhausted.
    /// - [`Interrupt::Failed`](crate::interpreter::parser::core::Interrupt) for
    ///   syntax, invalid-operation and range errors. Assignments made before
    ///   the failure are kept.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn interpret(mut self, text: &str) -> ParseResult<Evaluation> {
        let rewritten = self.rewrite(text)?;
        let expr = self.parse(&rewritten)?;
        let value = self.eval(&expr)?;
        Ok(Evaluation { value,
                        accurate: self.accurate })
    }

    /// Parses `text` with continuation through this interpreter's line source.
    pub(crate) fn parse(&mut self, text: &str) -> ParseResult<Expr> {
        Parser::new(Lexer::new(text), &mut *self.source)?.parse()
    }

    /// Gives the lexer of a rewrite pass access to the line source.
    pub(crate) fn source(&mut self) -> &mut dyn LineSource {
        &mut *self.source
    }

    /// The accurate flag as it stands after the evaluations so far.
    #[must_use]
    pub const fn accurate(&self) -> bool {
        self.accurate
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// After every node, an infinite or NaN result sets the accurate flag
    /// again, and a finite result that is fractional or beyond `2^53 - 1`
    /// clears it.
    ///
    /// # Errors
    /// Propagates range and invalid-operation errors from the operators.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<f64> {
        let value = match expr {
            Expr::Number { text } => self.eval_number(text)?,
            Expr::Variable { name } => self.scope.read(name),
            Expr::UnaryOp { op, operand } => self.eval_unary_op(*op, operand)?,
            Expr::BinaryOp { left, op, right } => self.eval_binary_op(left, *op, right)?,
            Expr::Conditional { condition,
                                then_branch,
                                else_branch, } => {
                self.eval_conditional(condition, then_branch, else_branch)?
            },
            Expr::Assignment { name, op, value } => self.eval_assignment(name, *op, value)?,
            Expr::Absent => 0.0,
        };

        self.track_accuracy(value);
        Ok(value)
    }

    fn track_accuracy(&mut self, value: f64) {
        if !value.is_finite() {
            self.accurate = true;
        } else if value.abs() > MAX_SAFE_INTEGER || !is_integral(value) {
            self.accurate = false;
        }
    }

    fn eval_number(&mut self, text: &str) -> EvalResult<f64> {
        let value: f64 =
            text.parse()
                .map_err(|_| RuntimeError::MalformedLiteral { text: text.to_string() })?;

        if value.is_infinite() {
            return Err(RuntimeError::LiteralOutOfRange { text: text.to_string() });
        }
        if !is_integral(value) {
            self.accurate = false;
        }
        Ok(value)
    }

    /// Evaluates the right-hand side and stores it into the named variable.
    ///
    /// `-=` adds, like `+=`.
    fn eval_assignment(&mut self, name: &str, op: AssignOperator, value: &Expr) -> EvalResult<f64> {
        let value = self.eval(value)?;
        let slot = self.scope.slot(name);

        match op {
            AssignOperator::Assign => *slot = value,
            AssignOperator::AddAssign | AssignOperator::SubAssign => *slot += value,
            AssignOperator::MulAssign => *slot *= value,
            AssignOperator::DivAssign => *slot /= value,
        }
        Ok(*slot)
    }

    /// Evaluates a conditional. Any non-zero condition, NaN included, selects
    /// the then-branch; a missing branch yields `0`.
    fn eval_conditional(&mut self,
                        condition: &Expr,
                        then_branch: &Expr,
                        else_branch: &Expr)
                        -> EvalResult<f64> {
        if self.eval(condition)? != 0.0 {
            self.eval(then_branch)
        } else if else_branch.is_absent() {
            Ok(0.0)
        } else {
            self.eval(else_branch)
        }
    }
}
