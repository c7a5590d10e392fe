//! Scalar loss functions. Each returns a single [`Value`](crate::Value) node
//! connected to its inputs, ready for `backward()`.

pub mod cross_entropy;
pub mod mse;

pub use cross_entropy::{binary_cross_entropy, cross_entropy};
pub use mse::mean_squared_error;
