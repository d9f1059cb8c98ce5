// scalargrad-core/src/ops/math_elem/ln.rs

use crate::autograd::backward_op::Op;
use crate::value::Value;

// --- Forward Operation ---

/// Natural logarithm of a scalar node.
///
/// Backward rule: `v.grad += out.grad / v.value`. For `v.value == 0` the
/// forward value is `-inf` (IEEE semantics) and the gradient update is
/// skipped with a `log::warn!` instead of dividing by zero; a single
/// numerically degenerate sample must not halt a training run.
pub fn ln_op(v: &Value) -> Value {
    let label = if v.has_label() {
        format!("log({})", v.label())
    } else {
        String::new()
    };
    Value::from_op(v.value().ln(), vec![v.clone()], Op::Ln, label)
}

#[cfg(test)]
#[path = "ln_test.rs"]
mod ln_test;
