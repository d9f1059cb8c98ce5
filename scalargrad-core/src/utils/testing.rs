use crate::value::Value;
use approx::relative_eq;

/// Checks that a node's forward value is within tolerance of the
/// expectation. Panics with both values on mismatch.
pub fn check_value_near(actual: &Value, expected: f64, tolerance: f64) {
    let value = actual.value();
    if !relative_eq!(value, expected, epsilon = tolerance) {
        panic!(
            "Value mismatch: actual={:?}, expected={:?}, tolerance={:?}",
            value, expected, tolerance
        );
    }
}

/// Checks the gradients of a slice of nodes against expectations,
/// index by index. Panics on the first mismatch.
pub fn check_grads_near(nodes: &[Value], expected: &[f64], tolerance: f64) {
    assert_eq!(
        nodes.len(),
        expected.len(),
        "Gradient expectation length mismatch"
    );
    for (i, (node, e)) in nodes.iter().zip(expected.iter()).enumerate() {
        let g = node.grad();
        if !relative_eq!(g, *e, epsilon = tolerance) {
            panic!(
                "Gradient mismatch at index {}: actual={:?}, expected={:?}, tolerance={:?}",
                i, g, e, tolerance
            );
        }
    }
}
