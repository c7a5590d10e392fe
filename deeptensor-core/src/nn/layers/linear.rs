use crate::device::StorageDevice;
use crate::error::DeepTensorError;
use crate::nn::layers::{check_vector_input, Layer, Neuron};
use crate::tensor::Tensor;
use crate::value::Value;
use std::fmt;

/// A fully connected layer of `nout` independent [`Neuron`]s on the scalar API.
///
/// Neuron `i` is seeded with `seed + 1000 * i`.
#[derive(Debug, Clone)]
pub struct LinearLayer {
    nin: usize,
    nout: usize,
    neurons: Vec<Neuron>,
}

impl LinearLayer {
    pub fn new(nin: usize, nout: usize, nonlin: bool, seed: u64) -> Self {
        let neurons = (0..nout)
            .map(|i| Neuron::new(nin, nonlin, seed.wrapping_add(1000 * i as u64)))
            .collect();
        LinearLayer { nin, nout, neurons }
    }

    /// Evaluates every neuron on the same inputs.
    ///
    /// # Errors
    /// `InvalidArgument` if `inputs.len() != nin`.
    pub fn call(&self, inputs: &[Value]) -> Result<Vec<Value>, DeepTensorError> {
        self.neurons.iter().map(|n| n.call(inputs)).collect()
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }
}

impl Layer for LinearLayer {
    fn forward(&self, input: &Tensor, _device: StorageDevice) -> Result<Tensor, DeepTensorError> {
        check_vector_input(input, self.nin, "LinearLayer")?;
        let out = self.call(&input.values()?)?;
        Tensor::from_values(out, vec![self.nout])
    }

    fn parameters(&self) -> Vec<Value> {
        self.neurons.iter().flat_map(Neuron::parameters).collect()
    }
}

impl fmt::Display for LinearLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Layer({},{})", self.nin, self.nout)
    }
}

#[cfg(test)]
#[path = "linear_test.rs"]
mod tests;
