use crate::error::DeepTensorError;
use crate::ops::softmax::softmax_op;
use crate::tensor::Tensor;
use crate::value::Value;

impl Tensor {
    /// Applies a unary scalar operation to every element, keeping the shape.
    pub(crate) fn map_values<F>(&self, f: F) -> Result<Tensor, DeepTensorError>
    where
        F: Fn(&Value) -> Value,
    {
        let out = self.values()?.iter().map(f).collect();
        Tensor::from_values(out, self.shape.clone())
    }

    pub fn relu(&self) -> Result<Tensor, DeepTensorError> {
        self.map_values(Value::relu)
    }

    pub fn tanh(&self) -> Result<Tensor, DeepTensorError> {
        self.map_values(Value::tanh)
    }

    pub fn sigmoid(&self) -> Result<Tensor, DeepTensorError> {
        self.map_values(Value::sigmoid)
    }

    pub fn leaky_relu(&self, alpha: f64) -> Result<Tensor, DeepTensorError> {
        self.map_values(|v| v.leaky_relu(alpha))
    }

    pub fn gelu(&self) -> Result<Tensor, DeepTensorError> {
        self.map_values(Value::gelu)
    }

    pub fn exp(&self) -> Result<Tensor, DeepTensorError> {
        self.map_values(Value::exp)
    }

    pub fn ln(&self) -> Result<Tensor, DeepTensorError> {
        self.map_values(Value::ln)
    }

    pub fn neg(&self) -> Result<Tensor, DeepTensorError> {
        self.map_values(Value::neg)
    }

    /// Softmax over all elements in flat order; the result keeps the shape.
    pub fn softmax(&self) -> Result<Tensor, DeepTensorError> {
        let out = softmax_op(&self.values()?)?;
        Tensor::from_values(out, self.shape.clone())
    }
}
