use rand::distributions::{Distribution, Uniform};

/// Draws one parameter initial value uniformly from `[low, high)`.
///
/// Weights and biases are initialized with `uniform(-1.0, 1.0)`, matching
/// the usual small-network setup for tanh activations.
pub fn uniform(low: f64, high: f64) -> f64 {
    let distribution = Uniform::new(low, high);
    distribution.sample(&mut rand::thread_rng())
}
