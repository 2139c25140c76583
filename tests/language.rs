use std::io::Cursor;

use simia::{
    eval_source,
    interpreter::{environment::Environment, value::Value},
    repl,
};

fn eval(src: &str) -> Value {
    let env = Environment::new();
    match eval_source(src, &env) {
        Ok(Some(value)) => value,
        Ok(None) => panic!("Script produced no value: {src}"),
        Err(e) => panic!("Script failed: {src}\nError: {e}"),
    }
}

fn assert_value(src: &str, expected: &Value) {
    assert_eq!(&eval(src), expected, "wrong result for: {src}");
}

fn assert_integer(src: &str, expected: i64) {
    assert_value(src, &Value::Integer(expected));
}

fn assert_error(src: &str, expected: &str) {
    let env = Environment::new();
    match eval_source(src, &env) {
        Ok(value) => panic!("Script succeeded with {value:?} but was expected to fail: {src}"),
        Err(e) => assert_eq!(e.to_string(), expected, "wrong diagnostic for: {src}"),
    }
}

#[test]
fn let_bindings_and_arithmetic() {
    assert_integer("let a = 5; let b = a * 2; a + b;", 15);
    assert_integer("let x = 1 + 2;", 3);
    assert_integer("8 - 5;", 3);
    assert_integer("10 / 2;", 5);
    assert_integer("2 * 2 * 2 * 2 * 2;", 32);
    assert_integer("5 + 2 * 10;", 25);
    assert_integer("(5 + 10 * 2 + 15 / 3) * 2 + -10;", 50);
    assert_integer("-50 + 100 + -50;", 0);
}

#[test]
fn a_let_yields_the_value_it_binds() {
    assert_integer("let a = 5;", 5);
}

#[test]
fn division_truncates_toward_zero() {
    assert_integer("7 / 2;", 3);
    assert_integer("-7 / 2;", -3);
}

#[test]
fn arithmetic_wraps_at_the_64_bit_boundary() {
    assert_integer("9223372036854775807 + 1;", i64::MIN);
    assert_integer("-9223372036854775807 - 2;", i64::MAX);
}

#[test]
fn comparisons() {
    assert_value("1 < 2;", &Value::Boolean(true));
    assert_value("1 > 2;", &Value::Boolean(false));
    assert_value("2 <= 2;", &Value::Boolean(true));
    assert_value("3 >= 4;", &Value::Boolean(false));
    assert_value("1 == 1;", &Value::Boolean(true));
    assert_value("1 != 1;", &Value::Boolean(false));
}

#[test]
fn equality_of_booleans_and_null() {
    assert_value("true == true;", &Value::Boolean(true));
    assert_value("false != true;", &Value::Boolean(true));
    assert_value("(1 < 2) == true;", &Value::Boolean(true));
    // Values of different types are never equal, but comparing them for
    // equality is not an error.
    assert_value("5 == true;", &Value::Boolean(false));
    assert_value("5 != true;", &Value::Boolean(true));
    // An if without a matching branch yields null.
    assert_value("if (false) { 1 } == if (false) { 2 };", &Value::Boolean(true));
}

#[test]
fn conditionals() {
    assert_integer("if (1 < 2) { 10 } else { 20 };", 10);
    assert_integer("if (1 > 2) { 10 } else { 20 };", 20);
    assert_value("if (1 > 2) { 10 };", &Value::Null);
    // Zero is truthy; only null and false are not.
    assert_integer("if (0) { 10 } else { 20 };", 10);
    assert_integer("if (true) { let x = 1; x + 1 };", 2);
}

#[test]
fn bang_follows_truthiness() {
    assert_value("!true;", &Value::Boolean(false));
    assert_value("!false;", &Value::Boolean(true));
    assert_value("!5;", &Value::Boolean(false));
    assert_value("!0;", &Value::Boolean(false));
    assert_value("!!5;", &Value::Boolean(true));
    assert_value("!if (false) { 1 };", &Value::Boolean(true));
    assert_value("!fn(x) { x };", &Value::Boolean(false));
}

#[test]
fn return_unwinds_to_the_call_boundary() {
    assert_integer("9; return 2 * 5; 9;", 10);
    assert_integer("let f = fn() { return 7; 9; }; f();", 7);
    assert_integer("let f = fn() { if (true) { if (true) { return 10; } return 1; } }; f();",
                   10);
    // The body's last statement is the value when nothing returns early.
    assert_integer("let f = fn(x) { x; }; f(5);", 5);
}

#[test]
fn functions_and_applications() {
    assert_integer("let identity = fn(x) { x }; identity(5);", 5);
    assert_integer("let double = fn(x) { x * 2 }; double(5);", 10);
    assert_integer("let add = fn(x, y) { x + y }; add(5 + 5, add(5, 5));", 20);
    assert_integer("fn(x) { x }(5);", 5);
}

#[test]
fn closures_capture_their_defining_scope() {
    assert_integer("let adder = fn(x) { fn(y) { x + y } }; let add2 = adder(2); add2(40);",
                   42);
    assert_integer("let f = fn(x) { fn(y) { x + y } }; let g = f(2); g(3);", 5);
    // The captured frame is shared, not copied: both closures see the same x.
    assert_integer("let pair = fn(x) { fn() { x } }; let a = pair(1); let b = pair(2); a() + b();",
                   3);
}

#[test]
fn functions_are_first_class_values() {
    assert_integer("let twice = fn(f, x) { f(f(x)) }; let inc = fn(n) { n + 1 }; twice(inc, 5);",
                   7);
    assert_value("let f = fn(x) { x }; f == f;", &Value::Boolean(true));
    // Two distinct literals are distinct values, however alike they look.
    assert_value("fn(x) { x } == fn(x) { x };", &Value::Boolean(false));
}

#[test]
fn recursion_reaches_its_base_case() {
    assert_integer("let counter = fn(x) { if (x > 100) { return x; } counter(x + 1); }; \
                    counter(0);",
                   101);
    assert_integer("let fact = fn(n) { if (n < 2) { return 1; } n * fact(n - 1); }; fact(5);",
                   120);
}

#[test]
fn inner_bindings_shadow_without_leaking() {
    assert_integer("let x = 1; let f = fn() { let x = 2; x }; f() + x;", 3);
    assert_integer("let x = 1; let x = x + 1; x;", 2);
}

#[test]
fn type_mismatch_is_an_error() {
    assert_error("5 + true;", "type mismatch: INTEGER + BOOLEAN");
    assert_error("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN");
    assert_error("true < 1;", "type mismatch: BOOLEAN < INTEGER");
}

#[test]
fn unknown_operators_are_errors() {
    assert_error("-true;", "unknown operator: -BOOLEAN");
    assert_error("true + false;", "unknown operator: BOOLEAN + BOOLEAN");
    assert_error("5; true + false; 5;", "unknown operator: BOOLEAN + BOOLEAN");
    assert_error("if (10 > 1) { true + false; };", "unknown operator: BOOLEAN + BOOLEAN");
}

#[test]
fn unresolved_identifiers_are_errors() {
    assert_error("foobar;", "identifier not found: foobar");
    assert_error("let a = b;", "identifier not found: b");
}

#[test]
fn errors_poison_everything_around_them() {
    assert_error("let a = 5 + true; a;", "type mismatch: INTEGER + BOOLEAN");
    assert_error("-(5 + true);", "type mismatch: INTEGER + BOOLEAN");
    assert_error("(5 + true) + 1;", "type mismatch: INTEGER + BOOLEAN");
    assert_error("let f = fn(x) { x }; f(missing);", "identifier not found: missing");
    assert_error("return 5 + true;", "type mismatch: INTEGER + BOOLEAN");
}

#[test]
fn division_by_zero_is_an_error() {
    assert_error("1 / 0;", "division by zero");
    assert_error("let x = 5; x / (x - 5);", "division by zero");
}

#[test]
fn calling_a_non_function_is_an_error() {
    assert_error("let x = 5; x(1);", "not a function: INTEGER");
    assert_error("true();", "not a function: BOOLEAN");
}

#[test]
fn wrong_arity_is_an_error() {
    assert_error("let f = fn(x, y) { x + y }; f(1);",
                 "wrong number of arguments: expected 2, got 1");
    assert_error("fn() { 1 }(2);", "wrong number of arguments: expected 0, got 1");
}

#[test]
fn bindings_persist_across_inputs_in_one_environment() {
    let env = Environment::new();

    assert_eq!(eval_source("let a = 5;", &env).unwrap(), Some(Value::Integer(5)));
    assert_eq!(eval_source("let b = a * 2;", &env).unwrap(), Some(Value::Integer(10)));
    assert_eq!(eval_source("a + b;", &env).unwrap(), Some(Value::Integer(15)));

    // A fresh environment knows none of it.
    assert!(eval_source("a;", &Environment::new()).is_err());
}

#[test]
fn an_empty_program_yields_nothing() {
    let env = Environment::new();
    assert_eq!(eval_source("", &env).unwrap(), None);
    assert_eq!(eval_source("   \n  ", &env).unwrap(), None);
}

#[test]
fn function_values_print_their_source_shape() {
    let value = eval("fn(x, y) { x + y };");
    assert_eq!(value.to_string(), "fn(x, y) {\n(x + y)\n}");
    assert_eq!(value.type_name(), "FUNCTION");
    assert!(value.is_function());
    assert!(!value.is_integer());
}

#[test]
fn repl_session_evaluates_prints_and_recovers() {
    let mut input = Cursor::new("let a = 5;\na + 10;\nmissing;\nlet = 1;\na;\n");
    let mut output = Vec::new();

    repl::start(&mut input, &mut output).unwrap();
    let output = String::from_utf8(output).unwrap();

    assert!(output.starts_with(">> "));
    assert!(output.contains("15\n"));
    assert!(output.contains("ERROR: identifier not found: missing\n"));
    assert!(output.contains("parser errors:"));
    assert!(output.contains("expected next token to be IDENT, got = instead"));
    // The session environment survived the two failures.
    assert!(output.ends_with("5\n>> "));
}
