//! # Autograd
//!
//! Reverse-mode differentiation over the scalar node graph:
//! - [`Op`]: the operation tag stored in every node and its local derivative rules.
//! - [`graph`]: topological sort and the backward driver.
//! - [`grad_check`]: finite-difference verification of analytical gradients.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::Op;
pub use grad_check::{check_grad, GradCheckError};
pub use graph::{backward_from, topological_sort, NodeId};
