//! Reverse-mode automatic differentiation over scalar values.
//!
//! Every operation builder records its operand list and a local gradient
//! rule on the node it constructs. `Value::backward` seeds the root
//! gradient, orders the reachable graph topologically and replays the
//! rules in reverse, accumulating into operand gradients.

pub(crate) mod backward_op;
pub(crate) mod graph;

use crate::value::Value;

impl Value {
    /// Computes the gradients of this node (regarded as the loss/root)
    /// with respect to every node that contributed to it.
    ///
    /// Seeds this node's gradient to 1, then walks the graph in reverse
    /// topological order, so each node's gradient is final (all consumer
    /// contributions received) before it propagates to its own operands.
    ///
    /// Gradients are *not* reset here: repeated calls accumulate. Callers
    /// must zero parameter gradients between optimization steps (see
    /// [`crate::nn::zero_grad`]).
    pub fn backward(&self) {
        if self.borrow_data().prev.is_empty() {
            log::debug!("backward() called on a leaf node; only the seed gradient is set.");
        }
        self.set_grad(1.0);
        let order = graph::topo_sort(self);
        for node in order.iter().rev() {
            backward_op::propagate(node);
        }
    }
}
