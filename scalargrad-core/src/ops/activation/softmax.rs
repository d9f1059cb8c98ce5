// scalargrad-core/src/ops/activation/softmax.rs

use crate::ops::arithmetic::div_op;
use crate::ops::math_elem::exp_op;
use crate::ops::reduction::sum_op;
use crate::value::Value;

// --- Forward Operation ---

/// Softmax over a slice of scalar nodes: `exp(xᵢ) / Σ exp(xⱼ)`.
///
/// Built entirely from the exp/sum/div builders, so the backward pass
/// follows from their rules; no dedicated softmax gradient is recorded.
/// Note the exponentials are not shifted by the max input, so very large
/// inputs can overflow; acceptable for the small networks this engine
/// targets.
pub fn softmax_op(xs: &[Value]) -> Vec<Value> {
    let exps: Vec<Value> = xs.iter().map(exp_op).collect();
    let total = sum_op(&exps);
    exps.iter().map(|e| div_op(e, &total)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_softmax_sums_to_one() {
        let xs = vec![Value::new(1.0), Value::new(-0.5), Value::new(2.0)];
        let probs = softmax_op(&xs);
        let total: f64 = probs.iter().map(|p| p.value()).sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-9);
        assert!(probs.iter().all(|p| p.value() > 0.0));
    }

    #[test]
    fn test_softmax_uniform_on_equal_inputs() {
        let xs: Vec<Value> = (0..4).map(|_| Value::new(0.3)).collect();
        let probs = softmax_op(&xs);
        for p in &probs {
            assert_relative_eq!(p.value(), 0.25, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_softmax_backward_zero_sum() {
        // The gradient of one softmax output w.r.t. the inputs sums to 0:
        // raising every logit equally leaves the distribution unchanged.
        let xs = vec![Value::new(0.2), Value::new(-1.0), Value::new(0.7)];
        let probs = softmax_op(&xs);
        probs[0].backward();
        let grad_sum: f64 = xs.iter().map(|x| x.grad()).sum();
        assert_relative_eq!(grad_sum, 0.0, epsilon = 1e-9);
    }
}
