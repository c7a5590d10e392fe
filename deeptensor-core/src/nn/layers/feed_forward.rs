use crate::device::StorageDevice;
use crate::error::DeepTensorError;
use crate::nn::init::seeded_tensor;
use crate::nn::layers::{check_vector_input, Layer};
use crate::tensor::{zeros, Tensor};
use crate::value::Value;
use std::fmt;

/// A dense layer computing `x W + b` with tensor operations.
///
/// `W` has shape `(nin, nout)` and is filled with seeded standard-normal
/// leaves; `b` has shape `(nout)` and starts at zero.
#[derive(Debug, Clone)]
pub struct FeedForwardLayer {
    nin: usize,
    nout: usize,
    weights: Tensor,
    bias: Tensor,
}

impl FeedForwardLayer {
    /// # Errors
    /// `InvalidArgument` if `nin` or `nout` is zero.
    pub fn new(nin: usize, nout: usize, seed: u64) -> Result<Self, DeepTensorError> {
        Ok(FeedForwardLayer {
            nin,
            nout,
            weights: seeded_tensor(vec![nin, nout], seed)?,
            bias: zeros(vec![nout])?,
        })
    }

    pub fn weights(&self) -> &Tensor {
        &self.weights
    }

    pub fn bias(&self) -> &Tensor {
        &self.bias
    }
}

impl Layer for FeedForwardLayer {
    fn forward(&self, input: &Tensor, _device: StorageDevice) -> Result<Tensor, DeepTensorError> {
        check_vector_input(input, self.nin, "FeedForwardLayer")?;
        // (1, nin) x (nin, nout) -> (1, nout)
        input
            .matmul(&self.weights)?
            .reshape(vec![self.nout])?
            .add(&self.bias)
    }

    fn parameters(&self) -> Vec<Value> {
        let mut params = self.weights.parameters();
        params.extend(self.bias.parameters());
        params
    }
}

impl fmt::Display for FeedForwardLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Layer({},{})", self.nin, self.nout)
    }
}

#[cfg(test)]
#[path = "feed_forward_test.rs"]
mod tests;
