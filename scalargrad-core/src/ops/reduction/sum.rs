// scalargrad-core/src/ops/reduction/sum.rs

use crate::autograd::backward_op::Op;
use crate::value::Value;

// --- Forward Operation ---

/// Sums a slice of scalar nodes into one new node.
///
/// The n-ary counterpart of `add_op`, used by the composition layer to
/// build `Σ xᵢwᵢ + b` as a single node instead of a chain of adds.
/// Backward rule: every operand receives the output gradient unchanged.
///
/// An empty slice yields a leaf node with value 0 and no operands.
pub fn sum_op(args: &[Value]) -> Value {
    let data: f64 = args.iter().map(|v| v.value()).sum();
    if args.is_empty() {
        return Value::new(0.0);
    }
    Value::from_op(data, args.to_vec(), Op::Add, String::new())
}

#[cfg(test)]
#[path = "sum_test.rs"]
mod sum_test;
