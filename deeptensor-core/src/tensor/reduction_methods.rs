use crate::error::DeepTensorError;
use crate::tensor::Tensor;
use crate::value::Value;

impl Tensor {
    /// Sum of all elements as a single node (`0 + x_0 + x_1 + ...`).
    pub fn sum(&self) -> Result<Value, DeepTensorError> {
        Ok(self
            .values()?
            .iter()
            .fold(Value::new(0.0), |acc, v| acc.add(v)))
    }

    /// Arithmetic mean of all elements as a single node.
    pub fn mean(&self) -> Result<Value, DeepTensorError> {
        self.sum()?.div_scalar(self.numel() as f64)
    }
}
