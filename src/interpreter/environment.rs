use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::Value;

/// A shared handle to a lexical scope.
///
/// Cloning the handle aliases the same frame, which is how one session
/// environment persists across REPL inputs and how function values keep
/// their defining scope alive for later calls. Frames chain through an
/// outer link: lookups walk outward, writes always land in the current
/// frame.
///
/// Recursive functions close over the frame they are being bound in, so
/// frames can form reference cycles. Those frames live until the process
/// exits, which is bounded by the session.
#[derive(Clone, Debug, Default)]
pub struct Environment(Rc<RefCell<Frame>>);

#[derive(Debug, Default)]
struct Frame {
    bindings: HashMap<String, Value>,
    outer:    Option<Environment>,
}

impl Environment {
    /// Creates an empty top-level environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty frame whose lookups fall through to `outer`.
    ///
    /// Used for the frame of each function call, with the function's
    /// captured environment as the outer scope.
    #[must_use]
    pub fn enclosed(outer: &Self) -> Self {
        Self(Rc::new(RefCell::new(Frame { bindings: HashMap::new(),
                                          outer:    Some(outer.clone()), })))
    }

    /// Resolves `name`, walking the chain of outer frames.
    ///
    /// # Example
    /// ```
    /// use simia::interpreter::{environment::Environment, value::Value};
    ///
    /// let outer = Environment::new();
    /// outer.set("x", Value::Integer(1));
    ///
    /// let inner = Environment::enclosed(&outer);
    /// inner.set("y", Value::Integer(2));
    ///
    /// // Inner frames see outer bindings, not the other way around.
    /// assert_eq!(inner.get("x"), Some(Value::Integer(1)));
    /// assert_eq!(outer.get("y"), None);
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        let frame = self.0.borrow();

        match frame.bindings.get(name) {
            Some(value) => Some(value.clone()),
            None => frame.outer.as_ref().and_then(|outer| outer.get(name)),
        }
    }

    /// Binds `name` to `value` in this frame.
    ///
    /// Outer frames are never written to: binding a name that exists in an
    /// outer frame shadows it for this scope only, and binding it again in
    /// the same frame overwrites.
    pub fn set(&self, name: impl Into<String>, value: Value) {
        self.0.borrow_mut().bindings.insert(name.into(), value);
    }
}
