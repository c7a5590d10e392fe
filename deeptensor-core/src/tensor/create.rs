// src/tensor/create.rs

use crate::error::DeepTensorError;
use crate::tensor::Tensor;
use crate::value::Value;
use num_traits::ToPrimitive;

impl Tensor {
    /// Builds a tensor from existing nodes (shared, not copied) in row-major order.
    ///
    /// # Errors
    /// `ShapeMismatch` if `values.len()` differs from the shape's element count.
    pub fn from_values(values: Vec<Value>, shape: Vec<usize>) -> Result<Tensor, DeepTensorError> {
        let mut tensor = Tensor::new(shape)?;
        if values.len() != tensor.numel() {
            return Err(DeepTensorError::ShapeMismatch {
                expected: tensor.shape(),
                actual: vec![values.len()],
                operation: "from_values".to_string(),
            });
        }
        tensor.elements = values.into_iter().map(Some).collect();
        Ok(tensor)
    }

    /// Builds a tensor whose element at each flat offset is `f(offset)`.
    pub fn from_fn<F>(shape: Vec<usize>, f: F) -> Result<Tensor, DeepTensorError>
    where
        F: FnMut(usize) -> Value,
    {
        let numel: usize = shape.iter().product();
        let values = (0..numel).map(f).collect();
        Tensor::from_values(values, shape)
    }
}

/// Creates a tensor of fresh leaf nodes from numeric data in row-major order.
///
/// # Errors
/// `ShapeMismatch` on a length mismatch, `InvalidArgument` if an element cannot
/// be represented as `f64`.
pub fn from_vec<T: ToPrimitive>(data: Vec<T>, shape: Vec<usize>) -> Result<Tensor, DeepTensorError> {
    let values = data
        .into_iter()
        .enumerate()
        .map(|(i, x)| {
            x.to_f64().map(Value::new).ok_or_else(|| {
                DeepTensorError::InvalidArgument(format!("element {} is not representable as f64", i))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Tensor::from_values(values, shape)
}

/// Creates a tensor of leaf nodes all holding `value`. Each element is a distinct node.
pub fn full(shape: Vec<usize>, value: f64) -> Result<Tensor, DeepTensorError> {
    Tensor::from_fn(shape, |_| Value::new(value))
}

/// Creates a tensor of zero-valued leaf nodes.
pub fn zeros(shape: Vec<usize>) -> Result<Tensor, DeepTensorError> {
    full(shape, 0.0)
}

#[cfg(test)]
#[path = "create_test.rs"]
mod tests;
