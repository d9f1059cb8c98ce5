// scalargrad-core/src/ops/arithmetic/add_test.rs

#[cfg(test)]
mod tests {
    use crate::ops::arithmetic::add_op;
    use crate::value::Value;

    #[test]
    fn test_add_forward() {
        let a = Value::new(2.5);
        let b = Value::new(-1.2);
        let out = add_op(&a, &b);
        assert_eq!(out.value(), 1.3);
        assert_eq!(out.grad(), 0.0);
        assert_eq!(out.borrow_data().prev.len(), 2);
    }

    #[test]
    fn test_add_infix() {
        let a = Value::new(1.0);
        let b = Value::new(2.0);
        let out = &a + &b;
        assert_eq!(out.value(), 3.0);
    }

    #[test]
    fn test_add_backward() {
        let a = Value::new(2.5);
        let b = Value::new(-1.2);
        let out = add_op(&a, &b);
        out.backward();
        assert_eq!(a.grad(), 1.0);
        assert_eq!(b.grad(), 1.0);
        assert_eq!(out.grad(), 1.0);
    }

    // Additive identity of gradient: ((a+b)+c) gives 1 everywhere.
    #[test]
    fn test_add_backward_nested() {
        let a = Value::new(0.5);
        let b = Value::new(10.0);
        let c = Value::new(-3.0);
        let out = add_op(&add_op(&a, &b), &c);
        out.backward();
        assert_eq!(a.grad(), 1.0);
        assert_eq!(b.grad(), 1.0);
        assert_eq!(c.grad(), 1.0);
    }

    // The same node used as both operands must accumulate both paths.
    #[test]
    fn test_add_backward_same_operand() {
        let x = Value::new(4.0);
        let out = add_op(&x, &x);
        out.backward();
        assert_eq!(out.value(), 8.0);
        assert_eq!(x.grad(), 2.0);
    }

    #[test]
    fn test_add_label_trace() {
        let a = Value::with_label(1.0, "a");
        let b = Value::with_label(2.0, "b");
        let out = add_op(&a, &b);
        assert_eq!(out.label(), "a+b");
    }

    // Unlabeled operands must produce an unlabeled node: trace strings
    // grow with graph depth, so they are only composed on request.
    #[test]
    fn test_add_unlabeled_operands_stay_unlabeled() {
        let a = Value::new(1.0);
        let b = Value::new(2.0);
        let out = add_op(&add_op(&a, &b), &b);
        assert_eq!(out.label(), "");
    }
}
