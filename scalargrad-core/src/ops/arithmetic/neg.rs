// scalargrad-core/src/ops/arithmetic/neg.rs

use crate::ops::arithmetic::mul_op;
use crate::value::Value;
use std::ops::Neg;

// --- Forward Operation ---

/// Negates a scalar node, computed as `a * (-1)`.
///
/// A derived builder: the backward rule is inherited from the multiply
/// node, with the constant `-1` leaf absorbing a (discarded) gradient of
/// its own.
pub fn neg_op(a: &Value) -> Value {
    mul_op(a, &Value::new(-1.0))
}

/// Infix form: `-&a`.
impl Neg for &Value {
    type Output = Value;

    fn neg(self) -> Value {
        neg_op(self)
    }
}

impl Neg for Value {
    type Output = Value;

    fn neg(self) -> Value {
        neg_op(&self)
    }
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod neg_test;
