use crate::error::ScalarGradError;
use crate::nn::init;
use crate::nn::module::Module;
use crate::ops::activation::{relu_op, tanh_op};
use crate::ops::arithmetic::mul_op;
use crate::ops::reduction::sum_op;
use crate::value::Value;

/// The nonlinearity applied to a neuron's pre-activation sum.
///
/// Each variant maps directly to one operation builder; the persisted
/// model format encodes the variant as an integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    None,
    Tanh,
    Relu,
}

impl Activation {
    /// Integer code used in the model file format.
    pub fn as_code(self) -> u8 {
        match self {
            Activation::None => 0,
            Activation::Tanh => 1,
            Activation::Relu => 2,
        }
    }

    /// Inverse of [`as_code`](Self::as_code); `None` for unknown codes.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Activation::None),
            1 => Some(Activation::Tanh),
            2 => Some(Activation::Relu),
            _ => None,
        }
    }
}

/// A single neuron: `act(Σ xᵢ·wᵢ + b)` over `nin` inputs.
///
/// Weights and bias are leaf parameter nodes, shared by every forward
/// pass of this neuron within a graph.
#[derive(Debug)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
    activation: Activation,
}

impl Neuron {
    /// Creates a neuron with `nin` weights and one bias, all initialized
    /// uniformly in [-1, 1).
    pub fn new(nin: usize, activation: Activation) -> Self {
        let weights = (0..nin)
            .map(|_| Value::new(init::uniform(-1.0, 1.0)))
            .collect();
        let bias = Value::new(init::uniform(-1.0, 1.0));
        Neuron {
            weights,
            bias,
            activation,
        }
    }

    /// Rebuilds a neuron from persisted parameter values (model load).
    /// Every weight and the bias become fresh leaf nodes with zero grad.
    pub(crate) fn from_parameters(activation: Activation, weights: &[f64], bias: f64) -> Self {
        Neuron {
            weights: weights.iter().map(|&w| Value::new(w)).collect(),
            bias: Value::new(bias),
            activation,
        }
    }

    /// Number of inputs this neuron expects.
    pub fn nin(&self) -> usize {
        self.weights.len()
    }

    pub(crate) fn activation(&self) -> Activation {
        self.activation
    }

    pub(crate) fn weights(&self) -> &[Value] {
        &self.weights
    }

    pub(crate) fn bias(&self) -> &Value {
        &self.bias
    }

    /// Forward pass over one input vector.
    ///
    /// # Errors
    /// `ShapeMismatch` if the input length differs from the weight count.
    /// The check runs before any graph node is built, so a failed call
    /// leaves no partial graph behind.
    pub fn forward(&self, xs: &[Value]) -> Result<Value, ScalarGradError> {
        if xs.len() != self.weights.len() {
            return Err(ScalarGradError::ShapeMismatch {
                expected: self.weights.len(),
                actual: xs.len(),
                operation: "Neuron forward".to_string(),
            });
        }

        let mut terms: Vec<Value> = xs
            .iter()
            .zip(self.weights.iter())
            .map(|(x, w)| mul_op(x, w))
            .collect();
        terms.push(self.bias.clone());
        let pre_activation = sum_op(&terms);

        Ok(match self.activation {
            Activation::None => pre_activation,
            Activation::Tanh => tanh_op(&pre_activation),
            Activation::Relu => relu_op(&pre_activation),
        })
    }
}

impl Module for Neuron {
    fn parameters(&self) -> Vec<Value> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }
}
