// src/tensor/mod.rs

use crate::error::DeepTensorError;
use crate::value::Value;

mod activation_methods;
mod arithmetic_methods;
mod autograd_methods;
pub mod create;
mod debug;
mod reduction_methods;
pub mod utils;

pub use create::{from_vec, full, zeros};

/// A fixed-shape, row-major dense array of graph nodes.
///
/// Each element is a shared [`Value`] handle, so every tensor operation is a
/// composition of scalar catalog operations and gradients flow through it like
/// through any other expression. Slots start unset after [`Tensor::new`] and
/// are filled with [`Tensor::set`]; reading an unset slot is an error.
///
/// Cloning a tensor clones the handles, not the nodes.
#[derive(Clone)]
pub struct Tensor {
    pub(crate) shape: Vec<usize>,
    pub(crate) strides: Vec<usize>,
    pub(crate) elements: Vec<Option<Value>>,
}

impl Tensor {
    /// Allocates a tensor of `shape` with every slot unset.
    ///
    /// # Errors
    /// `InvalidArgument` if `shape` is empty or contains a zero dimension.
    pub fn new(shape: Vec<usize>) -> Result<Self, DeepTensorError> {
        utils::validate_shape(&shape)?;
        let numel = shape.iter().product();
        let strides = utils::calculate_strides(&shape);
        Ok(Tensor {
            shape,
            strides,
            elements: vec![None; numel],
        })
    }

    /// Returns the shape (`Vec<usize>`).
    pub fn shape(&self) -> Vec<usize> {
        self.shape.clone()
    }

    /// Returns the row-major strides.
    pub fn strides(&self) -> Vec<usize> {
        self.strides.clone()
    }

    /// Number of dimensions.
    pub fn dims(&self) -> usize {
        self.shape.len()
    }

    /// Returns the number of elements in the tensor.
    pub fn numel(&self) -> usize {
        self.elements.len()
    }

    /// True once every slot holds a node.
    pub fn is_initialized(&self) -> bool {
        self.elements.iter().all(Option::is_some)
    }

    /// Maps a multi-index to its flat offset `sum(idx[j] * strides[j])`.
    ///
    /// # Errors
    /// `IndexOutOfRange` if the index rank differs from the tensor rank or the
    /// offset falls outside `[0, numel)`.
    pub fn normalize_idx(&self, idx: &[usize]) -> Result<usize, DeepTensorError> {
        utils::normalize_idx(idx, &self.strides, self.numel())
    }

    fn check_flat(&self, index: usize) -> Result<(), DeepTensorError> {
        if index >= self.numel() {
            return Err(DeepTensorError::IndexOutOfRange {
                index: vec![index],
                size: self.numel(),
            });
        }
        Ok(())
    }

    /// Returns the node at a multi-index.
    pub fn get(&self, idx: &[usize]) -> Result<Value, DeepTensorError> {
        let flat = self.normalize_idx(idx)?;
        self.get_flat(flat)
    }

    /// Stores `value` at a multi-index, replacing any previous node.
    pub fn set(&mut self, idx: &[usize], value: Value) -> Result<(), DeepTensorError> {
        let flat = self.normalize_idx(idx)?;
        self.set_flat(flat, value)
    }

    /// Returns the node at a flat (row-major) offset.
    ///
    /// # Errors
    /// `IndexOutOfRange` for an offset outside `[0, numel)`,
    /// `UninitializedElement` if the slot was never set.
    pub fn get_flat(&self, index: usize) -> Result<Value, DeepTensorError> {
        self.check_flat(index)?;
        self.elements[index]
            .clone()
            .ok_or(DeepTensorError::UninitializedElement { index })
    }

    /// Stores `value` at a flat offset.
    pub fn set_flat(&mut self, index: usize, value: Value) -> Result<(), DeepTensorError> {
        self.check_flat(index)?;
        self.elements[index] = Some(value);
        Ok(())
    }

    /// All element nodes in flat order.
    ///
    /// # Errors
    /// `UninitializedElement` for the first unset slot.
    pub fn values(&self) -> Result<Vec<Value>, DeepTensorError> {
        self.elements
            .iter()
            .enumerate()
            .map(|(index, slot)| {
                slot.clone()
                    .ok_or(DeepTensorError::UninitializedElement { index })
            })
            .collect()
    }

    /// Flat snapshot of the forward values.
    pub fn data(&self) -> Result<Vec<f64>, DeepTensorError> {
        Ok(self.values()?.iter().map(Value::data).collect())
    }

    /// Flat snapshot of the element gradients.
    pub fn grads(&self) -> Result<Vec<f64>, DeepTensorError> {
        Ok(self.values()?.iter().map(Value::grad).collect())
    }

    /// New tensor of `shape` sharing the same element nodes (no graph node is built).
    ///
    /// # Errors
    /// `ShapeMismatch` if the element counts differ, `InvalidArgument` for an invalid shape.
    pub fn reshape(&self, shape: Vec<usize>) -> Result<Tensor, DeepTensorError> {
        utils::validate_shape(&shape)?;
        let numel: usize = shape.iter().product();
        if numel != self.numel() {
            return Err(DeepTensorError::ShapeMismatch {
                expected: self.shape.clone(),
                actual: shape,
                operation: "reshape".to_string(),
            });
        }
        let strides = utils::calculate_strides(&shape);
        Ok(Tensor {
            shape,
            strides,
            elements: self.elements.clone(),
        })
    }
}
