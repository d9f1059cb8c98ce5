// src/nn/mod.rs
// Module principal pour les neurones, couches et le MLP.

pub mod init;
pub mod layers;
pub mod losses; // Declare losses module
pub mod mlp;
pub mod module; // Trait Module
pub mod serialize;

// Re-export common items
pub use layers::linear::Linear;
pub use layers::neuron::{Activation, Neuron};
pub use losses::MseLoss;
pub use mlp::Mlp;
pub use module::{zero_grad, Module};
