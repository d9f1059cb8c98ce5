// scalargrad-core/src/ops/arithmetic/sub.rs

use crate::ops::arithmetic::{add_op, neg_op};
use crate::value::Value;
use std::ops::Sub;

// --- Forward Operation ---

/// Subtracts two scalar nodes, computed as `a + (-b)`.
///
/// A derived builder: the backward rules are inherited from the add and
/// multiply nodes it composes.
pub fn sub_op(a: &Value, b: &Value) -> Value {
    add_op(a, &neg_op(b))
}

/// Infix form: `&a - &b`.
impl Sub for &Value {
    type Output = Value;

    fn sub(self, rhs: &Value) -> Value {
        sub_op(self, rhs)
    }
}

impl Sub for Value {
    type Output = Value;

    fn sub(self, rhs: Value) -> Value {
        sub_op(&self, &rhs)
    }
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod sub_test;
