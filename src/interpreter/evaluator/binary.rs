use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Evaluates an infix operation on already-evaluated operands.
///
/// Two integers support the full operator set. For every other pairing,
/// `==` and `!=` compare the values themselves (identity for functions)
/// regardless of type, mixed-type operands are a type mismatch, and a
/// same-typed pairing under any remaining operator has no definition.
pub(in crate::interpreter::evaluator) fn eval_infix(op: InfixOperator,
                                                    left: &Value,
                                                    right: &Value)
                                                    -> EvalResult<Value> {
    if let (Value::Integer(l), Value::Integer(r)) = (left, right) {
        return eval_integer_infix(op, *l, *r);
    }

    match op {
        InfixOperator::Equal => Ok(Value::Boolean(left == right)),
        InfixOperator::NotEqual => Ok(Value::Boolean(left != right)),
        _ if left.type_name() != right.type_name() => {
            Err(RuntimeError::TypeMismatch { left: left.type_name(),
                                             op,
                                             right: right.type_name() })
        },
        _ => Err(RuntimeError::UnknownInfixOperator { left: left.type_name(),
                                                      op,
                                                      right: right.type_name() }),
    }
}

/// Integer arithmetic and comparisons.
///
/// Arithmetic wraps in two's-complement 64-bit; division truncates toward
/// zero and reports a zero divisor.
fn eval_integer_infix(op: InfixOperator, left: i64, right: i64) -> EvalResult<Value> {
    use InfixOperator::{
        Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
    };

    match op {
        Add => Ok(Value::Integer(left.wrapping_add(right))),
        Sub => Ok(Value::Integer(left.wrapping_sub(right))),
        Mul => Ok(Value::Integer(left.wrapping_mul(right))),
        Div => {
            if right == 0 {
                Err(RuntimeError::DivisionByZero)
            } else {
                Ok(Value::Integer(left.wrapping_div(right)))
            }
        },
        Less => Ok((left < right).into()),
        Greater => Ok((left > right).into()),
        LessEqual => Ok((left <= right).into()),
        GreaterEqual => Ok((left >= right).into()),
        Equal => Ok((left == right).into()),
        NotEqual => Ok((left != right).into()),
    }
}
