// scalargrad-core/src/ops/comparison/min_max.rs

use crate::value::Value;

/// Returns the operand with the smaller forward value.
///
/// This is a pass-through, not a differentiable selection: no new node is
/// created and no gradient rule is attached at the comparison. The
/// returned handle *is* the selected operand, so gradient flows through
/// whichever node was selected simply by virtue of being the same node.
/// Callers must be aware that no gradient branch is recorded here.
pub fn min_op(a: &Value, b: &Value) -> Value {
    if a.value() < b.value() {
        a.clone()
    } else {
        b.clone()
    }
}

/// Returns the operand with the larger forward value.
///
/// Same pass-through semantics as [`min_op`].
pub fn max_op(a: &Value, b: &Value) -> Value {
    if a.value() > b.value() {
        a.clone()
    } else {
        b.clone()
    }
}
