//! # simia
//!
//! simia is a small, dynamically-typed, expression-oriented scripting
//! language written in Rust. It scans source text into tokens, builds a
//! syntax tree with a Pratt parser, and walks that tree against a
//! lexically-scoped environment, with integers, booleans, `null`, and
//! first-class functions with closure capture as its values.

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
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{
    environment::Environment, evaluator::core::eval_program, lexer::Lexer, parser::core::Parser,
    value::Value,
};

/// Defines the structure of parsed code.
///
/// This module declares the statement and expression enums that represent
/// the syntactic structure of source code as a tree. The tree is built by
/// the parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Attaches source lines to nodes for error reporting.
/// - Renders every node back to a canonical, fully-parenthesized form.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while parsing or
/// evaluating code. It standardizes error reporting and carries detailed
/// information about failures for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Attaches line numbers to parse diagnostics.
/// - Implements the standard error traits for both enums.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, and the scope chain to provide a complete runtime for
/// source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, values.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Interactive read-eval-print loop.
///
/// Reads one line at a time, evaluates it against a session environment
/// that persists between inputs, and prints either the resulting value or
/// the collected diagnostics.
pub mod repl;

/// Parses and evaluates a whole program in the given environment.
///
/// Bindings created by the program stay in `env`, so repeated calls with
/// the same environment accumulate state the way REPL inputs do. The
/// returned value is the result of the last statement; an empty program
/// yields `None`.
///
/// # Errors
/// Returns the first parse diagnostic if the source does not parse, or the
/// runtime error if evaluation fails.
///
/// # Examples
/// ```
/// use simia::{eval_source, interpreter::environment::Environment, interpreter::value::Value};
///
/// let env = Environment::new();
/// let result = eval_source("let a = 5; a * 2;", &env).unwrap();
/// assert_eq!(result, Some(Value::Integer(10)));
///
/// // 'a' is still bound; 'missing' never was.
/// assert_eq!(eval_source("a;", &env).unwrap(), Some(Value::Integer(5)));
/// assert!(eval_source("missing;", &env).is_err());
/// ```
pub fn eval_source(source: &str,
                   env: &Environment)
                   -> Result<Option<Value>, Box<dyn std::error::Error>> {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    if let Some(error) = parser.errors().first() {
        return Err(Box::new(error.clone()));
    }

    Ok(eval_program(&program, env)?)
}
