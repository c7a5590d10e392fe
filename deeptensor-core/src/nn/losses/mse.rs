// src/nn/losses/mse.rs

use crate::error::DeepTensorError;
use crate::tensor::Tensor;
use crate::value::Value;

/// Mean squared error `Σ (x_i - y_i)² / n` over all elements.
///
/// # Errors
/// `ShapeMismatch` if the shapes of `input` and `target` differ,
/// `UninitializedElement` if either tensor has an unset slot.
pub fn mean_squared_error(input: &Tensor, target: &Tensor) -> Result<Value, DeepTensorError> {
    if input.shape != target.shape {
        return Err(DeepTensorError::ShapeMismatch {
            expected: input.shape(),
            actual: target.shape(),
            operation: "mean_squared_error".to_string(),
        });
    }
    let xs = input.values()?;
    let ys = target.values()?;
    let total = xs
        .iter()
        .zip(ys.iter())
        .fold(Value::new(0.0), |acc, (x, y)| acc.add(&x.sub(y).pow(2)));
    total.div_scalar(xs.len() as f64)
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
