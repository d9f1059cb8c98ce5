// scalargrad-core/src/ops/activation/relu.rs

use crate::autograd::backward_op::Op;
use crate::value::Value;

// --- Forward Operation ---

/// Rectified linear unit: `max(0, v)`, computed as `(v + |v|) / 2`.
///
/// Backward rule: the output gradient passes through unchanged when the
/// *input* is strictly positive, otherwise nothing flows (the subgradient
/// at 0 is taken to be 0).
pub fn relu_op(v: &Value) -> Value {
    let data = v.value();
    let label = if v.has_label() {
        format!("relu({})", v.label())
    } else {
        String::new()
    };
    Value::from_op((data + data.abs()) / 2.0, vec![v.clone()], Op::Relu, label)
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod relu_test;
