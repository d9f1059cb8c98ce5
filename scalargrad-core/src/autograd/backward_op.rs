use crate::value::Value;

/// Local gradient rule recorded on a node at construction time.
///
/// The original formulation of reverse-mode autodiff attaches a closure per
/// node; here each rule is a tag plus the minimal captured scalar state
/// (the exponent for `Pow`), dispatched by [`propagate`]. One enum instead
/// of one heap allocation per node.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Op {
    /// Leaf node (constant, parameter or input): nothing to propagate.
    Leaf,
    /// Addition. Also covers the n-ary sum: every operand receives the
    /// output gradient unchanged.
    Add,
    /// Multiplication of two distinct nodes.
    Mul,
    /// `a * a` where both operands are the same node, recorded explicitly
    /// at construction as a single-operand node with rule `2 a da`.
    Square,
    /// `v^p` for a plain real exponent.
    Pow { exponent: f64 },
    /// `e^v`; the local derivative is the cached forward value.
    Exp,
    /// `ln v`; the gradient update is skipped with a warning when v == 0.
    Ln,
    /// `tanh v`; the local derivative is `1 - out^2`.
    Tanh,
    /// `max(0, v)`; the gradient passes through only for positive input.
    Relu,
}

/// Applies the chain rule for one node: reads the node's (final) gradient
/// and adds each operand's share to that operand's gradient.
///
/// Must only be called in reverse topological order; the rule assumes all
/// of the node's consumers have already contributed to `node.grad`.
pub(crate) fn propagate(node: &Value) {
    // Copy out the tag, gradient, cached forward value and operand handles
    // before touching the operands, so accumulation can re-borrow freely.
    let (op, out_grad, out_data, prev) = {
        let td = node.borrow_data();
        (td.op.clone(), td.grad, td.data, td.prev.clone())
    };

    match op {
        Op::Leaf => {}
        Op::Add => {
            for operand in &prev {
                operand.accumulate_grad(out_grad);
            }
        }
        Op::Mul => {
            let (a, b) = (&prev[0], &prev[1]);
            let (a_data, b_data) = (a.value(), b.value());
            a.accumulate_grad(b_data * out_grad);
            b.accumulate_grad(a_data * out_grad);
        }
        Op::Square => {
            let a = &prev[0];
            let a_data = a.value();
            a.accumulate_grad(2.0 * a_data * out_grad);
        }
        Op::Pow { exponent } => {
            let a = &prev[0];
            let a_data = a.value();
            a.accumulate_grad(exponent * a_data.powf(exponent - 1.0) * out_grad);
        }
        Op::Exp => {
            // d/dv e^v = e^v, which is exactly the cached forward value.
            prev[0].accumulate_grad(out_data * out_grad);
        }
        Op::Ln => {
            let a = &prev[0];
            let a_data = a.value();
            if a_data == 0.0 {
                // Degenerate sample: skip the divide rather than halt a
                // long training run (DomainWarning).
                log::warn!("gradient computation for ln with input 0: update skipped");
            } else {
                a.accumulate_grad(out_grad / a_data);
            }
        }
        Op::Tanh => {
            prev[0].accumulate_grad((1.0 - out_data * out_data) * out_grad);
        }
        Op::Relu => {
            let a = &prev[0];
            if a.value() > 0.0 {
                a.accumulate_grad(out_grad);
            }
        }
    }
}
