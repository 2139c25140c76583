/// Core evaluation logic.
///
/// Contains the node dispatch, statement and block evaluation, and the
/// unwinding channel that carries `return` values and runtime errors.
pub mod core;

/// Prefix operator evaluation.
///
/// Handles the operations that take a single operand: logical NOT and
/// arithmetic negation.
pub mod unary;

/// Infix operator evaluation.
///
/// Implements integer arithmetic and comparisons, identity equality for
/// the remaining types, and the operator/type diagnostics.
pub mod binary;

/// Function application.
///
/// Evaluates callees and arguments, builds the call frame on top of the
/// captured environment, and unwraps returned values at the call boundary.
pub mod function;
