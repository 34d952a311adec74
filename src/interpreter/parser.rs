/// Parser state, the continuation protocol, and the parse entry point.
///
/// Holds the [`Parser`](core::Parser) itself, the [`Interrupt`](core::Interrupt)
/// signal that separates "need more input" from real errors, and the token
/// matching helpers shared by the grammar rules.
pub mod core;

/// Binary operator precedence levels.
///
/// Comparison, additive, multiplicative and exponent rules, from lowest to
/// highest binding.
pub mod binary;

/// Factors.
///
/// Signs, literals, groupings, built-in functions, conditionals, variables
/// and assignments.
pub mod unary;
