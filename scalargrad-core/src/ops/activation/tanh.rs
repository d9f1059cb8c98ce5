// scalargrad-core/src/ops/activation/tanh.rs

use crate::autograd::backward_op::Op;
use crate::value::Value;

// --- Forward Operation ---

/// Hyperbolic tangent of a scalar node.
///
/// Backward rule: `v.grad += (1 - out.value^2) * out.grad`, using the
/// cached forward value.
pub fn tanh_op(v: &Value) -> Value {
    let label = if v.has_label() {
        format!("tanh({})", v.label())
    } else {
        String::new()
    };
    Value::from_op(v.value().tanh(), vec![v.clone()], Op::Tanh, label)
}
