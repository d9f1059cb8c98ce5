// scalargrad-core/src/nn/losses/mse.rs

use crate::error::ScalarGradError;
use crate::ops::arithmetic::{div_op, mul_op, sub_op};
use crate::ops::reduction::sum_op;
use crate::value::Value;

/// Computes the mean squared error between a prediction vector and a
/// target vector, as one scalar loss node.
#[derive(Debug, Clone, Default)]
pub struct MseLoss;

impl MseLoss {
    pub fn new() -> Self {
        MseLoss
    }

    /// Builds the loss node `Σ (predᵢ - targetᵢ)² / n`.
    ///
    /// # Errors
    /// `ShapeMismatch` if the vectors differ in length or are empty (a
    /// mean over zero samples is undefined). The checks run before any
    /// node is built; a failed call performs no graph mutation.
    pub fn calculate(&self, pred: &[Value], target: &[Value]) -> Result<Value, ScalarGradError> {
        if pred.len() != target.len() {
            return Err(ScalarGradError::ShapeMismatch {
                expected: target.len(),
                actual: pred.len(),
                operation: "MseLoss calculate".to_string(),
            });
        }
        if pred.is_empty() {
            return Err(ScalarGradError::ShapeMismatch {
                expected: 1,
                actual: 0,
                operation: "MseLoss calculate".to_string(),
            });
        }

        let squared: Vec<Value> = pred
            .iter()
            .zip(target.iter())
            .map(|(p, t)| {
                let diff = sub_op(p, t);
                mul_op(&diff, &diff)
            })
            .collect();
        let total = sum_op(&squared);
        Ok(div_op(&total, &Value::new(pred.len() as f64)))
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "mse_test.rs"]
mod mse_test;
