use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{FlowResult, Unwind, eval_block, eval_expression},
        value::Value,
    },
};

/// Evaluates a call expression: the callee first, then each argument left
/// to right. An error anywhere stops the call before the function body
/// runs.
pub(in crate::interpreter::evaluator) fn eval_call(callee: &Expr,
                                                   arguments: &[Expr],
                                                   env: &Environment)
                                                   -> FlowResult<Value> {
    let callee = eval_expression(callee, env)?;

    let mut args = Vec::with_capacity(arguments.len());
    for argument in arguments {
        args.push(eval_expression(argument, env)?);
    }

    apply(&callee, args)
}

/// Applies a function value to its arguments.
///
/// The body runs in a fresh frame chained to the function's captured
/// environment, never to the caller's: resolution follows where the
/// function was written, not where it is called. A `return` unwinding out
/// of the body is caught here and becomes the call's value, exactly once;
/// a body that ends without returning yields its last statement's value.
fn apply(callee: &Value, args: Vec<Value>) -> FlowResult<Value> {
    let Value::Function(function) = callee else {
        return Err(RuntimeError::NotAFunction { type_name: callee.type_name() }.into());
    };

    if function.params.len() != args.len() {
        return Err(RuntimeError::WrongNumberOfArguments { expected: function.params.len(),
                                                          found:    args.len(), }.into());
    }

    let frame = Environment::enclosed(&function.env);
    for (param, arg) in function.params.iter().zip(args) {
        frame.set(param.clone(), arg);
    }

    match eval_block(&function.body, &frame) {
        Err(Unwind::Return(value)) => Ok(value),
        other => other,
    }
}
