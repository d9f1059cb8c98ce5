// scalargrad-core/src/ops/arithmetic/div.rs

use crate::ops::arithmetic::{mul_op, pow_op};
use crate::value::Value;
use std::ops::Div;

// --- Forward Operation ---

/// Divides two scalar nodes, computed as `a * b^(-1)`.
///
/// A derived builder: the backward rules are inherited from the multiply
/// and pow nodes it composes.
pub fn div_op(a: &Value, b: &Value) -> Value {
    let out = mul_op(a, &pow_op(b, -1.0));
    if a.has_label() || b.has_label() {
        out.borrow_data_mut().label = format!("{}/{}", a.label(), b.label());
    }
    out
}

/// Infix form: `&a / &b`.
impl Div for &Value {
    type Output = Value;

    fn div(self, rhs: &Value) -> Value {
        div_op(self, rhs)
    }
}

impl Div for Value {
    type Output = Value;

    fn div(self, rhs: Value) -> Value {
        div_op(&self, &rhs)
    }
}

#[cfg(test)]
#[path = "div_test.rs"]
mod div_test;
