use crate::ast::{InfixOperator, PrefixOperator};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// A runtime error aborts the evaluation that produced it: any expression
/// consuming an errored operand, argument, or callee propagates the error
/// instead of computing. Operand types are reported by their diagnostic
/// names (`INTEGER`, `BOOLEAN`, `NULL`, `FUNCTION`).
pub enum RuntimeError {
    /// Tried to use a name with no binding in scope.
    IdentifierNotFound {
        /// The name that failed to resolve.
        name: String,
    },
    /// Tried to call a value that is not a function.
    NotAFunction {
        /// The type of the value in call position.
        type_name: &'static str,
    },
    /// An infix operator was applied to operands of different types.
    TypeMismatch {
        /// The type of the left operand.
        left:  &'static str,
        /// The operator.
        op:    InfixOperator,
        /// The type of the right operand.
        right: &'static str,
    },
    /// A prefix operator was applied to an operand it is not defined for.
    UnknownPrefixOperator {
        /// The operator.
        op:    PrefixOperator,
        /// The type of the operand.
        right: &'static str,
    },
    /// An infix operator was applied to same-typed operands it is not
    /// defined for.
    UnknownInfixOperator {
        /// The type of the left operand.
        left:  &'static str,
        /// The operator.
        op:    InfixOperator,
        /// The type of the right operand.
        right: &'static str,
    },
    /// Attempted integer division by zero.
    DivisionByZero,
    /// A function was called with the wrong number of arguments.
    WrongNumberOfArguments {
        /// The function's parameter count.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IdentifierNotFound { name } => write!(f, "identifier not found: {name}"),

            Self::NotAFunction { type_name } => write!(f, "not a function: {type_name}"),

            Self::TypeMismatch { left, op, right } => {
                write!(f, "type mismatch: {left} {op} {right}")
            },

            Self::UnknownPrefixOperator { op, right } => write!(f, "unknown operator: {op}{right}"),

            Self::UnknownInfixOperator { left, op, right } => {
                write!(f, "unknown operator: {left} {op} {right}")
            },

            Self::DivisionByZero => write!(f, "division by zero"),

            Self::WrongNumberOfArguments { expected, found } => {
                write!(f, "wrong number of arguments: expected {expected}, got {found}")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
