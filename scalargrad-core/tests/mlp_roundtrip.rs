// Persistence round-trip: a saved and reloaded MLP must behave like the
// original on the same input.

use scalargrad_core::nn::{Mlp, Module};
use scalargrad_core::Value;
use std::path::PathBuf;

fn temp_model_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("scalargrad-it-{}-{}", std::process::id(), name))
}

#[test]
fn forward_output_survives_round_trip() {
    let path = temp_model_path("forward.txt");
    let mlp = Mlp::new(3, &[4, 4, 1]);

    let input: Vec<Value> = [0.5, -0.25, 0.75].iter().map(|&x| Value::new(x)).collect();
    let original_out = mlp.forward(&input).unwrap();

    mlp.save_to(&path).unwrap();
    let restored = Mlp::load_from(&path).unwrap();

    let input_again: Vec<Value> = [0.5, -0.25, 0.75].iter().map(|&x| Value::new(x)).collect();
    let restored_out = restored.forward(&input_again).unwrap();

    assert_eq!(original_out.len(), restored_out.len());
    for (a, b) in original_out.iter().zip(restored_out.iter()) {
        assert!(
            (a.value() - b.value()).abs() < 1e-6,
            "round-trip output drifted: {} vs {}",
            a.value(),
            b.value()
        );
    }
    std::fs::remove_file(&path).ok();
}

#[test]
fn reloaded_model_is_trainable() {
    let path = temp_model_path("trainable.txt");
    let mlp = Mlp::new(2, &[3, 1]);
    mlp.save_to(&path).unwrap();

    let restored = Mlp::load_from(&path).unwrap();
    for p in restored.parameters() {
        assert_eq!(p.grad(), 0.0);
    }

    let input: Vec<Value> = [0.1, -0.9].iter().map(|&x| Value::new(x)).collect();
    let out = restored.forward(&input).unwrap();
    out[0].backward();
    // The output-layer bias always receives (1 - out^2) * 1 != 0 for tanh.
    assert!(restored.parameters().iter().any(|p| p.grad() != 0.0));
    std::fs::remove_file(&path).ok();
}
