use std::fmt;

use crate::{error::RuntimeError, interpreter::lexer::Token};

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// The variant set is closed. A syntactically missing `if` branch is the
/// explicit [`Expr::Absent`] variant, so every traversal has to say what a
/// missing branch means.
///
/// Trees are built by one parse and dropped after one evaluation; nodes own
/// their children exclusively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A numeric literal, kept as its source text until evaluation.
    Number {
        /// Decimal text such as `42`, `.5` or `3.14159265358979312`.
        text: String,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
    },
    /// A prefix operator or built-in function applied to one operand.
    UnaryOp {
        /// The operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
    },
    /// A binary operation (addition, comparison, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// Conditional expression: `if (condition) then else otherwise`.
    Conditional {
        /// The condition; any non-zero value selects the then-branch.
        condition:   Box<Self>,
        /// Evaluated when the condition holds. May be [`Expr::Absent`].
        then_branch: Box<Self>,
        /// Evaluated otherwise. May be [`Expr::Absent`].
        else_branch: Box<Self>,
    },
    /// Assignment or compound assignment to a variable.
    Assignment {
        /// The variable being written.
        name:  String,
        /// `=`, `+=`, `-=`, `*=` or `/=`.
        op:    AssignOperator,
        /// The right-hand side.
        value: Box<Self>,
    },
    /// A branch that was left out of the source.
    Absent,
}

impl Expr {
    /// Builds a [`Expr::Number`] node.
    pub fn number(text: impl Into<String>) -> Self {
        Self::Number { text: text.into() }
    }

    /// Builds a [`Expr::Variable`] node.
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable { name: name.into() }
    }

    /// Builds a [`Expr::BinaryOp`] node.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }

    /// Builds a [`Expr::UnaryOp`] node.
    #[must_use]
    pub fn unary(op: UnaryOperator, operand: Self) -> Self {
        Self::UnaryOp { op,
                        operand: Box::new(operand) }
    }

    /// Returns `true` for [`Expr::Absent`].
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic and comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Float division (`/`)
    Div,
    /// Integer division (`//`)
    IntDiv,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`^`)
    Pow,
    /// Equal within relative machine epsilon (`==`)
    Equal,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
}

/// Represents a unary operator.
///
/// Unary operators are the sign prefixes and the built-in functions, which
/// take exactly one operand.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Identity (`+x`).
    Plus,
    /// Arithmetic negation (`-x`).
    Minus,
    /// `sin`
    Sin,
    /// `cos`
    Cos,
    /// `tan`
    Tan,
    /// `cot`
    Cot,
    /// Base-10 logarithm (`lg`).
    Lg,
    /// Natural logarithm (`ln`).
    Ln,
}

/// Represents the operator of an assignment.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AssignOperator {
    /// `=`
    Assign,
    /// `+=`
    AddAssign,
    /// `-=`
    SubAssign,
    /// `*=`
    MulAssign,
    /// `/=`
    DivAssign,
}

fn unsupported(token: &Token, position: &'static str) -> RuntimeError {
    RuntimeError::UnsupportedOperator { operator: token.text().to_string(),
                                        position }
}

impl TryFrom<&Token> for BinaryOperator {
    type Error = RuntimeError;

    fn try_from(token: &Token) -> Result<Self, Self::Error> {
        Ok(match token {
            Token::Plus => Self::Add,
            Token::Minus => Self::Sub,
            Token::Star => Self::Mul,
            Token::Slash => Self::Div,
            Token::SlashSlash => Self::IntDiv,
            Token::Percent => Self::Mod,
            Token::Caret => Self::Pow,
            Token::EqualEqual => Self::Equal,
            Token::Less => Self::Less,
            Token::Greater => Self::Greater,
            Token::LessEqual => Self::LessEqual,
            Token::GreaterEqual => Self::GreaterEqual,
            other => return Err(unsupported(other, "binary")),
        })
    }
}

impl TryFrom<&Token> for UnaryOperator {
    type Error = RuntimeError;

    fn try_from(token: &Token) -> Result<Self, Self::Error> {
        Ok(match token {
            Token::Plus => Self::Plus,
            Token::Minus => Self::Minus,
            Token::Sin => Self::Sin,
            Token::Cos => Self::Cos,
            Token::Tan => Self::Tan,
            Token::Cot => Self::Cot,
            Token::Lg => Self::Lg,
            Token::Ln => Self::Ln,
            other => return Err(unsupported(other, "unary")),
        })
    }
}

impl TryFrom<&Token> for AssignOperator {
    type Error = RuntimeError;

    fn try_from(token: &Token) -> Result<Self, Self::Error> {
        Ok(match token {
            Token::Equals => Self::Assign,
            Token::PlusAssign => Self::AddAssign,
            Token::MinusAssign => Self::SubAssign,
            Token::MulAssign => Self::MulAssign,
            Token::DivAssign => Self::DivAssign,
            other => return Err(unsupported(other, "assignment")),
        })
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::IntDiv => "//",
            Self::Mod => "%",
            Self::Pow => "^",
            Self::Equal => "==",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Cot => "cot",
            Self::Lg => "lg",
            Self::Ln => "ln",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for AssignOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Assign => "=",
            Self::AddAssign => "+=",
            Self::SubAssign => "-=",
            Self::MulAssign => "*=",
            Self::DivAssign => "/=",
        };
        write!(f, "{operator}")
    }
}
