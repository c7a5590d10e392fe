use crate::device::StorageDevice;
use crate::error::DeepTensorError;
use crate::nn::layers::Layer;
use crate::tensor::Tensor;
use crate::value::Value;
use log::{debug, warn};
use std::fmt;
use std::path::Path;

/// A sequential container: the output of each layer is the input of the next.
#[derive(Debug)]
pub struct Model {
    layers: Vec<Box<dyn Layer>>,
    device: StorageDevice,
}

impl Model {
    pub fn new(layers: Vec<Box<dyn Layer>>, device: StorageDevice) -> Self {
        Model { layers, device }
    }

    /// Runs `input` through every layer in order.
    ///
    /// With `StorageDevice::Gpu` a warning is logged and the CPU path is used.
    pub fn forward(&self, input: &Tensor) -> Result<Tensor, DeepTensorError> {
        if self.device.is_accelerated() {
            warn!("Model::forward: no {} backend, running on cpu", self.device);
        }
        debug!("Model::forward through {} layer(s)", self.layers.len());
        let mut out = input.clone();
        for layer in &self.layers {
            out = layer.forward(&out, self.device)?;
        }
        Ok(out)
    }

    /// Parameters of all layers, concatenated in layer order.
    pub fn parameters(&self) -> Vec<Value> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    pub fn zero_grad(&self) {
        for layer in &self.layers {
            layer.zero_grad();
        }
    }

    pub fn layers(&self) -> &[Box<dyn Layer>] {
        &self.layers
    }

    pub fn device(&self) -> StorageDevice {
        self.device
    }

    pub fn save_model<P: AsRef<Path>>(&self, path: P) -> Result<(), DeepTensorError> {
        Err(DeepTensorError::UnsupportedOperation(format!(
            "saving a model is not supported (path: {})",
            path.as_ref().display()
        )))
    }

    pub fn load_model<P: AsRef<Path>>(&mut self, path: P) -> Result<(), DeepTensorError> {
        Err(DeepTensorError::UnsupportedOperation(format!(
            "loading a model is not supported (path: {})",
            path.as_ref().display()
        )))
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Model(")?;
        for layer in &self.layers {
            writeln!(f, "\t{},", layer)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
