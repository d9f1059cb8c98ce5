use crate::error::ScalarGradError;
use crate::nn::layers::neuron::{Activation, Neuron};
use crate::nn::module::Module;
use crate::value::Value;

/// A fully connected layer: `nout` independent neurons over `nin` inputs,
/// all with the same activation.
#[derive(Debug)]
pub struct Linear {
    neurons: Vec<Neuron>,
    nin: usize,
    nout: usize,
}

impl Linear {
    /// Creates a new layer with randomly initialized neurons.
    pub fn new(nin: usize, nout: usize, activation: Activation) -> Self {
        let neurons = (0..nout).map(|_| Neuron::new(nin, activation)).collect();
        Linear { neurons, nin, nout }
    }

    /// Rebuilds a layer from persisted neurons (model load).
    pub(crate) fn from_neurons(nin: usize, neurons: Vec<Neuron>) -> Self {
        let nout = neurons.len();
        Linear { neurons, nin, nout }
    }

    pub fn nin(&self) -> usize {
        self.nin
    }

    pub fn nout(&self) -> usize {
        self.nout
    }

    pub(crate) fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    /// Forward pass: applies every neuron to the same input vector.
    ///
    /// # Errors
    /// `ShapeMismatch` if the input length differs from `nin`; the check
    /// happens before any neuron runs, so no partial output graph is
    /// built.
    pub fn forward(&self, xs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        if xs.len() != self.nin {
            return Err(ScalarGradError::ShapeMismatch {
                expected: self.nin,
                actual: xs.len(),
                operation: "Linear forward".to_string(),
            });
        }
        self.neurons.iter().map(|n| n.forward(xs)).collect()
    }
}

impl Module for Linear {
    fn parameters(&self) -> Vec<Value> {
        let mut params = Vec::with_capacity(self.nout * (self.nin + 1));
        for neuron in &self.neurons {
            params.extend(neuron.parameters());
        }
        params
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "linear_test.rs"]
mod linear_test;
