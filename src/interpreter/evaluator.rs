/// Core evaluation logic and the interpreter pipeline.
///
/// Contains the [`Interpreter`](core::Interpreter), which owns the accurate
/// flag and borrows the session scope, the dispatch over expression variants,
/// and the evaluation of literals, variables, assignments and conditionals.
pub mod core;

/// Unary operator evaluation logic.
///
/// Implements the sign prefixes and the built-in functions.
pub mod unary;

/// Binary operator evaluation logic.
///
/// Arithmetic, integer division, modulo, exponentiation and comparisons.
pub mod binary;

/// Bracket rewriting.
///
/// Replaces every `[sub-expression]` in the input with the operator text its
/// value selects, before the rewritten text is parsed.
pub mod rewrite;
