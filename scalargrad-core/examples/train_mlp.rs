//! # Training a Small MLP on Scalar Autodiff
//!
//! Demonstrates the full loop on a tiny binary-pattern dataset:
//! 1. Build an `Mlp` (3 -> 4 -> 4 -> 1, tanh everywhere).
//! 2. Forward each sample and compute the MSE loss.
//! 3. `zero_grad`, `backward`, and a manual SGD step via `set_value`.
//! 4. Save the trained model and reload it to check the round trip.
//!
//! Run with: `cargo run --example train_mlp`

use scalargrad_core::nn::{Mlp, Module, MseLoss};
use scalargrad_core::{ScalarGradError, Value};

fn main() -> Result<(), ScalarGradError> {
    // The classic 4-sample toy dataset.
    let inputs: [[f64; 3]; 4] = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let targets = [1.0, -1.0, -1.0, 1.0];

    let mlp = Mlp::new(3, &[4, 4, 1]);
    let loss_fn = MseLoss::new();
    let learning_rate = 0.05;

    for epoch in 0..100 {
        let mut epoch_loss = 0.0;
        // Gradients accumulate across the samples of one epoch; one
        // update per epoch.
        mlp.zero_grad();

        for (xs, &target) in inputs.iter().zip(targets.iter()) {
            let input: Vec<Value> = xs.iter().map(|&x| Value::new(x)).collect();
            let pred = mlp.forward(&input)?;
            let loss = loss_fn.calculate(&pred, &[Value::new(target)])?;
            epoch_loss += loss.value();
            loss.backward();
        }

        for p in mlp.parameters() {
            p.set_value(p.value() - learning_rate * p.grad());
        }

        if epoch % 10 == 0 {
            println!("epoch {:3}: loss = {:.6}", epoch, epoch_loss);
        }
    }

    // Final predictions.
    for (xs, &target) in inputs.iter().zip(targets.iter()) {
        let input: Vec<Value> = xs.iter().map(|&x| Value::new(x)).collect();
        let pred = mlp.forward(&input)?;
        println!("target {:5.1} -> predicted {:8.4}", target, pred[0].value());
    }

    // Persist and reload.
    let path = std::env::temp_dir().join("scalargrad-train-mlp.txt");
    mlp.save_to(&path)?;
    let restored = Mlp::load_from(&path)?;
    let probe: Vec<Value> = [2.0, 3.0, -1.0].iter().map(|&x| Value::new(x)).collect();
    let reloaded_pred = restored.forward(&probe)?;
    println!(
        "reloaded model predicts {:8.4} on the first sample",
        reloaded_pred[0].value()
    );
    std::fs::remove_file(&path).ok();

    Ok(())
}
