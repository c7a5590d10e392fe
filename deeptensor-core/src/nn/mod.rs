//! # Neural network building blocks
//!
//! Thin layers on top of [`Tensor`](crate::tensor::Tensor) and
//! [`Value`](crate::value::Value): seeded weight initialization, the [`Layer`]
//! trait and its implementations, a sequential [`Model`] and scalar losses.
//! Training loops are left to the caller: run a loss, call `backward`, then
//! update `parameters()` by hand.

pub mod init;
pub mod layers;
pub mod losses;
pub mod model;

pub use layers::{
    FeedForwardLayer, GeLU, Layer, LeakyReLU, LinearLayer, Neuron, ReLU, Sigmoid, SoftMax, Tanh,
};
pub use losses::{binary_cross_entropy, cross_entropy, mean_squared_error};
pub use model::Model;
