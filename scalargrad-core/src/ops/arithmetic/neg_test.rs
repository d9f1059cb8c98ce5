// scalargrad-core/src/ops/arithmetic/neg_test.rs

#[cfg(test)]
mod tests {
    use crate::ops::arithmetic::neg_op;
    use crate::value::Value;

    #[test]
    fn test_neg_forward() {
        let a = Value::new(2.0);
        let out = neg_op(&a);
        assert_eq!(out.value(), -2.0);
    }

    #[test]
    fn test_neg_backward() {
        let a = Value::new(2.0);
        let out = -&a;
        out.backward();
        assert_eq!(a.grad(), -1.0);
    }
}
