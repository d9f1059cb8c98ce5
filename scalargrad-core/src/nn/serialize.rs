//! Line-oriented text persistence for [`Mlp`] models.
//!
//! Layout: the literal tag `MLP`, the layer count, then per layer its
//! `nin` and `nout` on their own lines, then per neuron one line with the
//! activation code (0 = none, 1 = tanh, 2 = relu), `nin` weight lines and
//! one bias line. Gradients are not persisted; every parameter reloads as
//! a fresh leaf node with zero grad.

use crate::error::ScalarGradError;
use crate::nn::layers::linear::Linear;
use crate::nn::layers::neuron::{Activation, Neuron};
use crate::nn::mlp::Mlp;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const MODEL_TAG: &str = "MLP";

impl Mlp {
    /// Saves the model to a text file, overwriting any existing file.
    ///
    /// # Errors
    /// `Io` if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ScalarGradError> {
        let path = path.as_ref();
        let mut out = String::new();
        let _ = writeln!(out, "{}", MODEL_TAG);
        let _ = writeln!(out, "{}", self.layers().len());
        for layer in self.layers() {
            let _ = writeln!(out, "{}", layer.nin());
            let _ = writeln!(out, "{}", layer.nout());
            for neuron in layer.neurons() {
                let _ = writeln!(out, "{}", neuron.activation().as_code());
                for weight in neuron.weights() {
                    let _ = writeln!(out, "{}", weight.value());
                }
                let _ = writeln!(out, "{}", neuron.bias().value());
            }
        }
        fs::write(path, out).map_err(|e| ScalarGradError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Loads a model previously written by [`save_to`](Self::save_to).
    ///
    /// # Errors
    /// `Io` if the file cannot be read, `Parse` if its content does not
    /// follow the format. On failure no model is constructed.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Mlp, ScalarGradError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| ScalarGradError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let mut reader = LineReader::new(path, &contents);

        let tag = reader.next_line()?;
        if tag != MODEL_TAG {
            return Err(reader.error(format!("expected tag {:?}, got {:?}", MODEL_TAG, tag)));
        }

        let layer_count: usize = reader.parse_next("layer count")?;
        let mut layers = Vec::with_capacity(layer_count);
        for _ in 0..layer_count {
            let nin: usize = reader.parse_next("layer nin")?;
            let nout: usize = reader.parse_next("layer nout")?;
            let mut neurons = Vec::with_capacity(nout);
            for _ in 0..nout {
                let code: u8 = reader.parse_next("activation code")?;
                let activation = Activation::from_code(code)
                    .ok_or_else(|| reader.error(format!("unknown activation code {}", code)))?;
                let mut weights = Vec::with_capacity(nin);
                for _ in 0..nin {
                    weights.push(reader.parse_next::<f64>("weight")?);
                }
                let bias: f64 = reader.parse_next("bias")?;
                neurons.push(Neuron::from_parameters(activation, &weights, bias));
            }
            layers.push(Linear::from_neurons(nin, neurons));
        }
        Ok(Mlp::from_layers(layers))
    }
}

/// Cursor over the model file lines, tracking the line number for error
/// reporting.
struct LineReader<'a> {
    path: &'a Path,
    lines: std::str::Lines<'a>,
    line_no: usize,
}

impl<'a> LineReader<'a> {
    fn new(path: &'a Path, contents: &'a str) -> Self {
        LineReader {
            path,
            lines: contents.lines(),
            line_no: 0,
        }
    }

    fn next_line(&mut self) -> Result<&'a str, ScalarGradError> {
        self.line_no += 1;
        match self.lines.next() {
            Some(line) => Ok(line.trim()),
            None => Err(self.error("unexpected end of file".to_string())),
        }
    }

    fn parse_next<T: std::str::FromStr>(&mut self, what: &str) -> Result<T, ScalarGradError> {
        let line = self.next_line()?;
        line.parse()
            .map_err(|_| self.error(format!("invalid {}: {:?}", what, line)))
    }

    fn error(&self, message: String) -> ScalarGradError {
        ScalarGradError::Parse {
            path: self.path.display().to_string(),
            line: self.line_no,
            message,
        }
    }
}
