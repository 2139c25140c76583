use std::rc::Rc;

use crate::{
    ast::{Block, Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{binary, function, unary},
        value::{Function, Value},
    },
};

/// Result type used by the public evaluation entry points.
///
/// Top-level evaluation either produces a value or a [`RuntimeError`]
/// describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// A non-local exit travelling up the evaluation.
///
/// `Return` unwinds to the nearest function-call boundary, which takes the
/// value out and continues; the program top level does the same. `Error`
/// is never caught and aborts the whole evaluation. Carrying both in the
/// `Err` channel lets `?` implement the short-circuit rules: a statement
/// sequence stops at either, and an operand, argument, or condition that
/// errors poisons the whole expression containing it.
#[derive(Debug)]
pub(in crate::interpreter::evaluator) enum Unwind {
    /// A `return` travelling towards its call boundary.
    Return(Value),
    /// A runtime error travelling all the way out.
    Error(RuntimeError),
}

impl From<RuntimeError> for Unwind {
    fn from(error: RuntimeError) -> Self {
        Self::Error(error)
    }
}

pub(in crate::interpreter::evaluator) type FlowResult<T> = Result<T, Unwind>;

/// Evaluates a program, statement by statement, in `env`.
///
/// The result is the value of the last statement, or `None` for an empty
/// program. A top-level `return` stops execution and yields its value
/// directly.
///
/// # Example
/// ```
/// use simia::interpreter::{
///     environment::Environment, evaluator::core::eval_program, lexer::Lexer, parser::core::Parser,
///     value::Value,
/// };
///
/// let mut parser = Parser::new(Lexer::new("let a = 2; a + 3;"));
/// let program = parser.parse_program();
/// assert!(parser.errors().is_empty());
///
/// let env = Environment::new();
/// assert_eq!(eval_program(&program, &env), Ok(Some(Value::Integer(5))));
/// ```
pub fn eval_program(program: &Program, env: &Environment) -> EvalResult<Option<Value>> {
    let mut result = None;

    for statement in &program.statements {
        match eval_statement(statement, env) {
            Ok(value) => result = Some(value),
            Err(Unwind::Return(value)) => return Ok(Some(value)),
            Err(Unwind::Error(error)) => return Err(error),
        }
    }

    Ok(result)
}

/// Evaluates one statement. Every statement yields a value: a `let` yields
/// the value it bound, an expression statement its expression's value. A
/// `return` starts unwinding instead.
pub(in crate::interpreter::evaluator) fn eval_statement(statement: &Statement,
                                                        env: &Environment)
                                                        -> FlowResult<Value> {
    match statement {
        Statement::Let { name, value, .. } => {
            let value = eval_expression(value, env)?;
            env.set(name.clone(), value.clone());
            Ok(value)
        },
        Statement::Return { value, .. } => {
            let value = eval_expression(value, env)?;
            Err(Unwind::Return(value))
        },
        Statement::Expression { expr, .. } => eval_expression(expr, env),
    }
}

/// Evaluates the statements of a block in order.
///
/// Unlike [`eval_program`], a block does not catch a `return` passing
/// through it; only the enclosing call boundary does, so a `return` nested
/// in inner blocks exits the whole function. An empty block yields `null`.
pub(in crate::interpreter::evaluator) fn eval_block(block: &Block,
                                                    env: &Environment)
                                                    -> FlowResult<Value> {
    let mut result = Value::Null;

    for statement in &block.statements {
        result = eval_statement(statement, env)?;
    }

    Ok(result)
}

/// Evaluates one expression, dispatching on its variant.
pub(in crate::interpreter::evaluator) fn eval_expression(expr: &Expr,
                                                         env: &Environment)
                                                         -> FlowResult<Value> {
    match expr {
        Expr::IntegerLiteral { value, .. } => Ok(Value::Integer(*value)),
        Expr::BooleanLiteral { value, .. } => Ok(Value::Boolean(*value)),
        Expr::Identifier { name, .. } => {
            env.get(name)
               .ok_or_else(|| RuntimeError::IdentifierNotFound { name: name.clone() }.into())
        },
        Expr::Prefix { op, right, .. } => {
            let right = eval_expression(right, env)?;
            Ok(unary::eval_prefix(*op, &right)?)
        },
        Expr::Infix { left, op, right, .. } => {
            let left = eval_expression(left, env)?;
            let right = eval_expression(right, env)?;
            Ok(binary::eval_infix(*op, &left, &right)?)
        },
        Expr::If { condition,
                   consequence,
                   alternative,
                   .. } => {
            let condition = eval_expression(condition, env)?;

            if condition.is_truthy() {
                eval_block(consequence, env)
            } else if let Some(alternative) = alternative {
                eval_block(alternative, env)
            } else {
                Ok(Value::Null)
            }
        },
        Expr::FunctionLiteral { params, body, .. } => {
            Ok(Value::Function(Rc::new(Function { params: params.clone(),
                                                  body:   body.clone(),
                                                  env:    env.clone(), })))
        },
        Expr::Call { callee, arguments, .. } => function::eval_call(callee, arguments, env),
    }
}
