use crate::value::Value;

/// The base trait for all neural network modules (neurons, layers,
/// containers).
///
/// A module owns a set of parameter nodes (weights and biases). Forward
/// signatures differ between module kinds (a neuron produces one node, a
/// layer a vector), so only the parameter surface is shared here.
pub trait Module: std::fmt::Debug {
    /// Returns every learnable parameter node of the module, including
    /// those of sub-modules. The returned handles share identity with the
    /// stored parameters: mutating them mutates the module.
    fn parameters(&self) -> Vec<Value>;

    /// Resets the gradient of every parameter to 0, without touching
    /// values or graph structure. Call between optimization steps;
    /// `backward()` never zeroes anything on its own.
    fn zero_grad(&self) {
        zero_grad(&self.parameters());
    }
}

/// Batch zero-grad helper over an arbitrary collection of parameter nodes.
pub fn zero_grad(params: &[Value]) {
    for p in params {
        p.zero_grad();
    }
}
