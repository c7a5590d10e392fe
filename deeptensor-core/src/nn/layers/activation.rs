//! Parameter-free layers that apply an element-wise activation to their input.

use crate::device::StorageDevice;
use crate::error::DeepTensorError;
use crate::nn::layers::Layer;
use crate::tensor::Tensor;
use std::fmt;

#[derive(Debug, Clone, Copy, Default)]
pub struct ReLU;

impl Layer for ReLU {
    fn forward(&self, input: &Tensor, _device: StorageDevice) -> Result<Tensor, DeepTensorError> {
        input.relu()
    }
}

impl fmt::Display for ReLU {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReLU()")
    }
}

/// GELU, tanh approximation.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeLU;

impl Layer for GeLU {
    fn forward(&self, input: &Tensor, _device: StorageDevice) -> Result<Tensor, DeepTensorError> {
        input.gelu()
    }
}

impl fmt::Display for GeLU {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GeLU()")
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Tanh;

impl Layer for Tanh {
    fn forward(&self, input: &Tensor, _device: StorageDevice) -> Result<Tensor, DeepTensorError> {
        input.tanh()
    }
}

impl fmt::Display for Tanh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tanh()")
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Sigmoid;

impl Layer for Sigmoid {
    fn forward(&self, input: &Tensor, _device: StorageDevice) -> Result<Tensor, DeepTensorError> {
        input.sigmoid()
    }
}

impl fmt::Display for Sigmoid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sigmoid()")
    }
}

/// Leaky ReLU with negative slope `alpha`.
#[derive(Debug, Clone, Copy)]
pub struct LeakyReLU {
    pub alpha: f64,
}

impl LeakyReLU {
    pub fn new(alpha: f64) -> Self {
        LeakyReLU { alpha }
    }
}

impl Layer for LeakyReLU {
    fn forward(&self, input: &Tensor, _device: StorageDevice) -> Result<Tensor, DeepTensorError> {
        input.leaky_relu(self.alpha)
    }
}

impl fmt::Display for LeakyReLU {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LeakyReLU({})", self.alpha)
    }
}

/// Softmax over all elements of the input in flat order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SoftMax;

impl Layer for SoftMax {
    fn forward(&self, input: &Tensor, _device: StorageDevice) -> Result<Tensor, DeepTensorError> {
        input.softmax()
    }
}

impl fmt::Display for SoftMax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SoftMax()")
    }
}

#[cfg(test)]
#[path = "activation_test.rs"]
mod tests;
