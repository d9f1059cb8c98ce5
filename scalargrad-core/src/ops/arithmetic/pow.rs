// scalargrad-core/src/ops/arithmetic/pow.rs

use crate::autograd::backward_op::Op;
use crate::value::Value;

// --- Forward Operation ---

/// Raises a scalar node to a plain real exponent (the exponent is not a
/// graph node) and returns the new node.
///
/// Backward rule: `v.grad += p * v.value^(p-1) * out.grad`.
pub fn pow_op(v: &Value, exponent: f64) -> Value {
    let label = if v.has_label() {
        format!("{}^{}", v.label(), exponent)
    } else {
        String::new()
    };
    Value::from_op(
        v.value().powf(exponent),
        vec![v.clone()],
        Op::Pow { exponent },
        label,
    )
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod pow_test;
