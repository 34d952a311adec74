/// The evaluator module rewrites brackets and executes AST nodes.
///
/// The evaluator first replaces every bracketed sub-expression with the
/// operator its value selects, parses the rewritten text, then walks the tree
/// computing a double and tracking whether the printed result is exact.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Reads and writes variables in the session scope.
/// - Reports invalid-operation and range errors.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer strips whitespace, then produces one token at a time. Text can be
/// spliced in at the cursor while scanning, which is how continuation lines
/// join the expression.
///
/// # Responsibilities
/// - Converts the input into number, identifier, keyword and operator tokens.
/// - Resolves the constants `pi` and `exp` to numeric text.
/// - Reports unrecognized characters.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is recursive-descent with one token of lookahead. When a token
/// is required and the input has ended it asks its line source for more text
/// instead of failing.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates the grammar, reporting errors with position info.
/// - Drives the continuation protocol.
pub mod parser;
/// Session variables.
pub mod scope;
/// Where continuation lines come from.
pub mod source;
