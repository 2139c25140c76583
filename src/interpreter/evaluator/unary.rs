use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Evaluates a prefix operation on an already-evaluated operand.
///
/// `!` negates truthiness and is defined for every value: `!true` is
/// `false`, `!null` is `true`, and any other value (any integer included)
/// negates to `false`. `-` is defined for integers only and wraps on
/// overflow, so negating the minimum value yields itself.
pub(in crate::interpreter::evaluator) fn eval_prefix(op: PrefixOperator,
                                                     right: &Value)
                                                     -> EvalResult<Value> {
    match op {
        PrefixOperator::Not => Ok(Value::Boolean(!right.is_truthy())),
        PrefixOperator::Negate => match right {
            Value::Integer(value) => Ok(Value::Integer(value.wrapping_neg())),
            _ => Err(RuntimeError::UnknownPrefixOperator { op,
                                                           right: right.type_name(), }),
        },
    }
}
