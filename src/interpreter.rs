/// Nested lexical scopes.
///
/// Provides the shared environment handle that maps names to values, with
/// an outer link per frame so lookups fall through to enclosing scopes.
pub mod environment;
/// Tree-walking evaluation.
///
/// Walks the syntax tree and produces values, threading an environment and
/// implementing `return` unwinding and error propagation.
pub mod evaluator;
/// Tokenization of source text.
///
/// Declares the token patterns and exposes a streaming scanner that turns
/// an input string into one token per call until end of input.
pub mod lexer;
/// Syntax analysis.
///
/// Consumes the token stream and builds a syntax tree with operator
/// precedence handled by precedence climbing, accumulating diagnostics
/// rather than stopping at the first problem.
pub mod parser;
/// Runtime value representations.
///
/// Defines the value model produced by evaluation: integers, booleans,
/// `null`, and function values paired with their defining environment.
pub mod value;
