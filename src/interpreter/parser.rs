/// Core parsing machinery.
///
/// Holds the parser state (current and lookahead token), the operator
/// precedence ladder, the precedence-climbing expression loop, and the
/// diagnostic plumbing shared by all parsing routines.
pub mod core;

/// Expression parsing.
///
/// Implements the per-token-kind handlers: literals, identifiers, prefix
/// operators, grouping, conditionals, function literals, infix operators,
/// and call argument lists.
pub mod expression;

/// Statement parsing.
///
/// Dispatches between `let`, `return`, and expression statements, and
/// parses brace-delimited blocks.
pub mod statement;
