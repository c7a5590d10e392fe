//! # Operation Catalog
//!
//! Pure constructors that build a new [`Value`](crate::Value) from existing ones.
//! Each computes its forward value eagerly and records an [`Op`](crate::autograd::Op)
//! tag whose rule distributes the gradient back to the operands.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;
pub mod softmax;

pub use activation::{gelu_op, leaky_relu_op, relu_op, sigmoid_op, tanh_op};
pub use arithmetic::{
    add_op, add_scalar_op, div_op, div_scalar_op, mul_op, mul_scalar_op, neg_op, pow_op,
    sub_op, sub_scalar_op,
};
pub use math_elem::{exp_op, ln_op};
pub use softmax::softmax_op;
