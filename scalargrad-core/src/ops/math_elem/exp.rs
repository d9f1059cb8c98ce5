// scalargrad-core/src/ops/math_elem/exp.rs

use crate::autograd::backward_op::Op;
use crate::value::Value;

// --- Forward Operation ---

/// Exponential `e^v` of a scalar node.
///
/// Backward rule: `v.grad += out.value * out.grad`; the local derivative
/// of `exp` is its own (cached) forward value.
pub fn exp_op(v: &Value) -> Value {
    let label = if v.has_label() {
        format!("exp({})", v.label())
    } else {
        String::new()
    };
    Value::from_op(v.value().exp(), vec![v.clone()], Op::Exp, label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_exp_forward() {
        let v = Value::new(1.0);
        let out = exp_op(&v);
        assert_relative_eq!(out.value(), std::f64::consts::E, epsilon = 1e-12);
    }

    #[test]
    fn test_exp_backward() {
        let v = Value::new(2.0);
        let out = exp_op(&v);
        out.backward();
        assert_relative_eq!(v.grad(), 2.0_f64.exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_exp_at_zero() {
        let v = Value::new(0.0);
        let out = exp_op(&v);
        assert_eq!(out.value(), 1.0);
        out.backward();
        assert_eq!(v.grad(), 1.0);
    }
}
