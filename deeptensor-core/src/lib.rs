//! Scalar reverse-mode automatic differentiation.
//!
//! Every number is a [`Value`] node in a shared computation graph. Operations
//! from [`ops`] build new nodes eagerly; [`Value::backward`] walks the graph in
//! reverse topological order and accumulates gradients into every node.
//! [`Tensor`] is a dense array of such nodes, and [`nn`] stacks layers, models
//! and losses on top of it.

pub mod autograd;
pub mod device;
pub mod error;
pub mod nn;
pub mod ops;
pub mod tensor;
pub mod utils;
pub mod value;

pub use autograd::Op;
pub use device::StorageDevice;
pub use error::DeepTensorError;
pub use tensor::Tensor;
pub use value::Value;

// Re-export traits required by public functions
pub use num_traits;
