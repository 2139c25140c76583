/// Parsing errors.
///
/// Defines all error types that can occur while turning source text into a
/// syntax tree. Parse errors include unexpected tokens, missing handlers
/// for a token in expression position, and out-of-range integer literals.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// unresolved identifiers, operator/type mismatches, calling a non-function
/// value, and division by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
