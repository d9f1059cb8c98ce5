// scalargrad-core/src/ops/arithmetic/pow_test.rs

#[cfg(test)]
mod tests {
    use crate::ops::arithmetic::{add_op, pow_op};
    use crate::value::Value;
    use approx::assert_relative_eq;

    #[test]
    fn test_pow_forward() {
        let v = Value::new(2.0);
        let out = pow_op(&v, 3.0);
        assert_relative_eq!(out.value(), 8.0, epsilon = 1e-12);
    }

    #[test]
    fn test_pow_backward() {
        // d(v^3)/dv = 3 v^2 = 12 at v = 2.
        let v = Value::new(2.0);
        let out = pow_op(&v, 3.0);
        out.backward();
        assert_relative_eq!(v.grad(), 12.0, epsilon = 1e-12);
    }

    #[test]
    fn test_pow_negative_exponent() {
        // d(v^-1)/dv = -v^-2 = -0.25 at v = 2.
        let v = Value::new(2.0);
        let out = pow_op(&v, -1.0);
        assert_relative_eq!(out.value(), 0.5, epsilon = 1e-12);
        out.backward();
        assert_relative_eq!(v.grad(), -0.25, epsilon = 1e-12);
    }

    // The operand gradient must accumulate across consumers, not be
    // overwritten by the pow rule.
    #[test]
    fn test_pow_backward_accumulates() {
        let v = Value::new(2.0);
        let p = pow_op(&v, 2.0);
        let out = add_op(&p, &v);
        out.backward();
        // d(v^2 + v)/dv = 2v + 1 = 5.
        assert_relative_eq!(v.grad(), 5.0, epsilon = 1e-12);
    }
}
