use crate::device::StorageDevice;
use crate::error::DeepTensorError;
use crate::tensor::Tensor;
use crate::value::Value;
use std::fmt::{Debug, Display};

pub mod activation;
pub mod feed_forward;
pub mod linear;
pub mod neuron;

pub use activation::{GeLU, LeakyReLU, ReLU, Sigmoid, SoftMax, Tanh};
pub use feed_forward::FeedForwardLayer;
pub use linear::LinearLayer;
pub use neuron::Neuron;

/// The base trait for everything a [`Model`](crate::nn::Model) can chain.
///
/// A layer maps one tensor to another by composing catalog operations, so the
/// output stays connected to both the input and the layer's own parameters.
/// `Display` gives the short name used when printing a model.
pub trait Layer: Debug + Display + Send + Sync {
    /// Performs a forward pass.
    ///
    /// `device` is forwarded by the model; every layer computes on the CPU path.
    fn forward(&self, input: &Tensor, device: StorageDevice) -> Result<Tensor, DeepTensorError>;

    /// The trainable leaves of this layer, in a stable order.
    fn parameters(&self) -> Vec<Value> {
        Vec::new()
    }

    /// Resets the gradient of every parameter.
    fn zero_grad(&self) {
        for p in self.parameters() {
            p.zero_grad();
        }
    }
}

/// Rejects anything but a 1-D tensor of `expected` elements.
pub(crate) fn check_vector_input(input: &Tensor, expected: usize, layer: &str) -> Result<(), DeepTensorError> {
    if input.dims() != 1 || input.shape[0] != expected {
        return Err(DeepTensorError::InvalidArgument(format!(
            "{} expects a 1-D input of length {}, got shape {:?}",
            layer, expected, input.shape
        )));
    }
    Ok(())
}
