use crate::error::ScalarGradError;
use crate::nn::layers::linear::Linear;
use crate::nn::layers::neuron::Activation;
use crate::nn::module::Module;
use crate::value::Value;

/// A multilayer perceptron: a stack of fully connected tanh layers.
///
/// `Mlp::new(3, &[4, 4, 1])` builds 3 → 4 → 4 → 1.
#[derive(Debug)]
pub struct Mlp {
    layers: Vec<Linear>,
}

impl Mlp {
    /// Creates an MLP with the given input width and per-layer output
    /// sizes, every layer using tanh.
    pub fn new(nin: usize, layer_sizes: &[usize]) -> Self {
        Self::with_activation(nin, layer_sizes, Activation::Tanh)
    }

    /// Same as [`new`](Self::new) with an explicit activation for all
    /// layers.
    pub fn with_activation(nin: usize, layer_sizes: &[usize], activation: Activation) -> Self {
        let widths: Vec<usize> = std::iter::once(nin).chain(layer_sizes.iter().copied()).collect();
        let layers = widths
            .windows(2)
            .map(|pair| Linear::new(pair[0], pair[1], activation))
            .collect();
        Mlp { layers }
    }

    pub(crate) fn from_layers(layers: Vec<Linear>) -> Self {
        Mlp { layers }
    }

    pub(crate) fn layers(&self) -> &[Linear] {
        &self.layers
    }

    /// Forward pass: threads the input vector through every layer.
    ///
    /// # Errors
    /// `ShapeMismatch` if the input length differs from the first layer's
    /// input width.
    pub fn forward(&self, input: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        let mut xs = input.to_vec();
        for layer in &self.layers {
            xs = layer.forward(&xs)?;
        }
        Ok(xs)
    }
}

impl Module for Mlp {
    fn parameters(&self) -> Vec<Value> {
        let mut params = Vec::new();
        for layer in &self.layers {
            params.extend(layer.parameters());
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mlp_shape() {
        let mlp = Mlp::new(3, &[4, 4, 1]);
        assert_eq!(mlp.layers().len(), 3);
        // (3*4+4) + (4*4+4) + (4*1+1) = 16 + 20 + 5
        assert_eq!(mlp.parameters().len(), 41);
    }

    #[test]
    fn test_mlp_forward_output_width() {
        let mlp = Mlp::new(2, &[3, 1]);
        let xs = vec![Value::new(0.5), Value::new(-1.0)];
        let out = mlp.forward(&xs).unwrap();
        assert_eq!(out.len(), 1);
        assert!(out[0].value().abs() < 1.0);
    }

    #[test]
    fn test_mlp_forward_shape_mismatch() {
        let mlp = Mlp::new(2, &[3, 1]);
        let xs = vec![Value::new(0.5)];
        assert!(mlp.forward(&xs).is_err());
    }

    #[test]
    fn test_mlp_backward_touches_every_parameter_grad() {
        let mlp = Mlp::new(2, &[3, 1]);
        let xs = vec![Value::new(0.5), Value::new(-1.0)];
        let out = mlp.forward(&xs).unwrap();
        out[0].backward();
        // Individual gradients can be zero by numerical coincidence, so
        // only check that the backward pass reached the parameters at all.
        let params = mlp.parameters();
        assert!(params.iter().any(|p| p.grad() != 0.0));
        mlp.zero_grad();
        assert!(params.iter().all(|p| p.grad() == 0.0));
    }
}
