// scalargrad-core/src/ops/arithmetic/mul.rs

use crate::autograd::backward_op::Op;
use crate::value::Value;
use std::ops::Mul;

// --- Forward Operation ---

/// Multiplies two scalar nodes and returns the new node.
///
/// Backward rule (product rule): `a.grad += b.value * out.grad` and
/// `b.grad += a.value * out.grad`.
///
/// When both operands are the *same* node (`a * a`), the result is
/// recorded as an explicit single-operand square with rule
/// `a.grad += 2 * a.value * out.grad`. Detecting this at construction
/// keeps the backward dispatch free of operand-count inference.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    let data = a.value() * b.value();
    let label = if a.has_label() || b.has_label() {
        format!("{}*{}", a.label(), b.label())
    } else {
        String::new()
    };
    if Value::same_node(a, b) {
        Value::from_op(data, vec![a.clone()], Op::Square, label)
    } else {
        Value::from_op(data, vec![a.clone(), b.clone()], Op::Mul, label)
    }
}

/// Infix form: `&a * &b`.
impl Mul for &Value {
    type Output = Value;

    fn mul(self, rhs: &Value) -> Value {
        mul_op(self, rhs)
    }
}

impl Mul for Value {
    type Output = Value;

    fn mul(self, rhs: Value) -> Value {
        mul_op(&self, &rhs)
    }
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod mul_test;
