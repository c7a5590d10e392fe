use crate::error::DeepTensorError;
use crate::nn::init::seeded_values;
use crate::value::Value;
use std::fmt;

/// A single unit computing `w · x + b`, optionally followed by ReLU.
///
/// Weights are seeded standard-normal leaves, the bias starts at zero.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
    nonlin: bool,
}

impl Neuron {
    pub fn new(nin: usize, nonlin: bool, seed: u64) -> Self {
        Neuron {
            weights: seeded_values(nin, seed),
            bias: Value::new(0.0),
            nonlin,
        }
    }

    /// Evaluates the neuron on `inputs`.
    ///
    /// # Errors
    /// `InvalidArgument` if `inputs.len()` differs from the number of weights.
    pub fn call(&self, inputs: &[Value]) -> Result<Value, DeepTensorError> {
        if inputs.len() != self.weights.len() {
            return Err(DeepTensorError::InvalidArgument(format!(
                "neuron expects {} inputs, got {}",
                self.weights.len(),
                inputs.len()
            )));
        }
        let act = self
            .weights
            .iter()
            .zip(inputs)
            .fold(self.bias.clone(), |acc, (w, x)| acc.add(&w.mul(x)));
        Ok(if self.nonlin { act.relu() } else { act })
    }

    /// Weights followed by the bias.
    pub fn parameters(&self) -> Vec<Value> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }

    pub fn nin(&self) -> usize {
        self.weights.len()
    }
}

impl fmt::Display for Neuron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.nonlin { "ReLU" } else { "Linear" };
        write!(f, "{}Neuron({})", kind, self.weights.len())
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
