use std::{fmt, rc::Rc};

use crate::{ast::Block, interpreter::environment::Environment};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the types a program can produce: integers,
/// booleans, the null value, and user-defined functions.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators (`<`, `==`, `!=`, etc.) and by
    /// logical negation (`!`). Any value may serve as an `if` condition,
    /// but only `false` and `null` are treated as false.
    Boolean(bool),
    /// The absence of a value; produced by an `if` whose condition fails
    /// and which has no `else` branch.
    Null,
    /// A user-defined function. The payload is shared so that passing
    /// functions around copies a handle, not the body.
    Function(Rc<Function>),
}

/// A function value: parameters, body, and the environment the literal was
/// evaluated in. Keeping that environment is what makes closures work; the
/// function can be called long after the defining scope's activation is
/// gone.
#[derive(Debug, Clone)]
pub struct Function {
    /// Parameter names in declaration order.
    pub params: Vec<String>,
    /// The body evaluated on every call.
    pub body:   Block,
    /// The defining environment, used as the outer scope of each call.
    pub env:    Environment,
}

impl PartialEq for Value {
    /// Integers, booleans and `null` compare by value; function values
    /// compare by identity (two functions are equal only if they are the
    /// same object). Values of different types are never equal.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Null, Self::Null) => true,
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl Value {
    /// Returns the diagnostic name of this value's type, as it appears in
    /// runtime error messages.
    ///
    /// # Example
    /// ```
    /// use simia::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Integer(42).type_name(), "INTEGER");
    /// assert_eq!(Value::Null.type_name(), "NULL");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Boolean(_) => "BOOLEAN",
            Self::Null => "NULL",
            Self::Function(_) => "FUNCTION",
        }
    }

    /// Whether this value counts as true in a condition.
    ///
    /// `null` and `false` are falsy; every other value, including `0`, is
    /// truthy.
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Null | Self::Boolean(false))
    }

    /// Returns `true` if the value is [`Integer`].
    ///
    /// [`Integer`]: Value::Integer
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(..))
    }

    /// Returns `true` if the value is [`Function`].
    ///
    /// [`Function`]: Value::Function
    #[must_use]
    pub const fn is_function(&self) -> bool {
        matches!(self, Self::Function(..))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Null => write!(f, "null"),
            Self::Function(function) => {
                write!(f, "fn({}) {{\n{}\n}}", function.params.join(", "), function.body)
            },
        }
    }
}
