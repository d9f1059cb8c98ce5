pub mod linear;
pub mod neuron;

pub use linear::Linear;
pub use neuron::{Activation, Neuron};
