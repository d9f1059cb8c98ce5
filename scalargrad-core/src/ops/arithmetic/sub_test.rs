// scalargrad-core/src/ops/arithmetic/sub_test.rs

#[cfg(test)]
mod tests {
    use crate::ops::arithmetic::sub_op;
    use crate::value::Value;
    use approx::assert_relative_eq;

    #[test]
    fn test_sub_forward() {
        let a = Value::new(5.0);
        let b = Value::new(1.5);
        let out = sub_op(&a, &b);
        assert_relative_eq!(out.value(), 3.5, epsilon = 1e-12);
    }

    #[test]
    fn test_sub_backward() {
        let a = Value::new(5.0);
        let b = Value::new(1.5);
        let out = &a - &b;
        out.backward();
        assert_eq!(a.grad(), 1.0);
        assert_eq!(b.grad(), -1.0);
    }

    // a - a must cancel in value and in gradient.
    #[test]
    fn test_sub_self() {
        let a = Value::new(7.0);
        let out = sub_op(&a, &a);
        assert_eq!(out.value(), 0.0);
        out.backward();
        assert_eq!(a.grad(), 0.0);
    }
}
