// scalargrad-core/src/ops/arithmetic/add.rs

use crate::autograd::backward_op::Op;
use crate::value::Value;
use std::ops::Add;

// --- Forward Operation ---

/// Adds two scalar nodes and returns the new node.
///
/// Backward rule: both operands receive the output gradient unchanged
/// (`d(a+b)/da = d(a+b)/db = 1`).
pub fn add_op(a: &Value, b: &Value) -> Value {
    let label = if a.has_label() || b.has_label() {
        format!("{}+{}", a.label(), b.label())
    } else {
        String::new()
    };
    Value::from_op(
        a.value() + b.value(),
        vec![a.clone(), b.clone()],
        Op::Add,
        label,
    )
}

/// Infix form: `&a + &b`.
impl Add for &Value {
    type Output = Value;

    fn add(self, rhs: &Value) -> Value {
        add_op(self, rhs)
    }
}

impl Add for Value {
    type Output = Value;

    fn add(self, rhs: Value) -> Value {
        add_op(&self, &rhs)
    }
}

#[cfg(test)]
#[path = "add_test.rs"]
mod add_test;
