use thiserror::Error;

/// Custom error type for the deeptensor engine.
///
/// Every fallible operation validates its inputs before building any graph
/// node, so an `Err` always leaves the computation graph untouched.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum DeepTensorError {
    #[error("Shape mismatch: expected {expected:?}, got {actual:?} during operation {operation}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
        operation: String,
    },

    #[error("Dimension mismatch for matmul: left shape {left:?} and right shape {right:?} do not align")]
    DimensionMismatch { left: Vec<usize>, right: Vec<usize> },

    #[error("Index out of range: index {index:?} resolves outside of [0, {size})")]
    IndexOutOfRange { index: Vec<usize>, size: usize },

    #[error("Division by zero error")]
    DivisionByZero,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Tensor element at flat index {index} was read before being set")]
    UninitializedElement { index: usize },

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),
}
