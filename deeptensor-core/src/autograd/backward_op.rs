use crate::ops::activation::gelu_derivative;
use std::fmt;

/// Tag of the operation that produced a [`Value`](crate::Value), together with
/// the scalar parameters its local derivative needs.
///
/// The backward rule of every node is dispatched from this tag instead of a
/// captured closure, so a node stays inspectable after construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    /// User-created node, no backward rule.
    Leaf,
    Add,
    AddScalar(f64),
    Sub,
    SubScalar(f64),
    Mul,
    MulScalar(f64),
    /// Integer power `a^n`.
    Pow(i32),
    Neg,
    Relu,
    Tanh,
    Sigmoid,
    /// Leaky ReLU with negative slope `alpha`.
    LeakyRelu(f64),
    Gelu,
    Exp,
    Ln,
}

impl Op {
    /// Number of node operands the operation consumes.
    pub fn arity(&self) -> usize {
        match self {
            Op::Leaf => 0,
            Op::Add | Op::Sub | Op::Mul => 2,
            _ => 1,
        }
    }

    /// Computes the contribution to each operand's gradient.
    ///
    /// Given the node's forward value `output`, the operands' forward values
    /// `inputs` (call order) and the node's accumulated gradient
    /// `grad_output`, returns `dL/dInput_i` for each operand, in the same
    /// order. The caller adds them into the operands' `grad`.
    pub fn backward(&self, output: f64, inputs: &[f64], grad_output: f64) -> Vec<f64> {
        match *self {
            Op::Leaf => Vec::new(),
            Op::Add => vec![grad_output, grad_output],
            Op::AddScalar(_) | Op::SubScalar(_) => vec![grad_output],
            Op::Sub => vec![grad_output, -grad_output],
            Op::Mul => vec![inputs[1] * grad_output, inputs[0] * grad_output],
            Op::MulScalar(k) => vec![k * grad_output],
            Op::Pow(n) => {
                // d/dx x^0 is 0 everywhere, avoid 0 * x^-1 at x = 0
                if n == 0 {
                    vec![0.0]
                } else {
                    vec![f64::from(n) * inputs[0].powi(n - 1) * grad_output]
                }
            }
            Op::Neg => vec![-grad_output],
            Op::Relu => {
                if output > 0.0 {
                    vec![grad_output]
                } else {
                    vec![0.0]
                }
            }
            Op::Tanh => vec![(1.0 - output * output) * grad_output],
            Op::Sigmoid => vec![output * (1.0 - output) * grad_output],
            // slope is picked from the sign of the input, not the output
            Op::LeakyRelu(alpha) => {
                if inputs[0] > 0.0 {
                    vec![grad_output]
                } else {
                    vec![alpha * grad_output]
                }
            }
            Op::Gelu => vec![gelu_derivative(inputs[0]) * grad_output],
            Op::Exp => vec![output * grad_output],
            Op::Ln => vec![grad_output / inputs[0]],
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Leaf => write!(f, "leaf"),
            Op::Add => write!(f, "+"),
            Op::AddScalar(k) => write!(f, "+ {}", k),
            Op::Sub => write!(f, "-"),
            Op::SubScalar(k) => write!(f, "- {}", k),
            Op::Mul => write!(f, "*"),
            Op::MulScalar(k) => write!(f, "* {}", k),
            Op::Pow(n) => write!(f, "^{}", n),
            Op::Neg => write!(f, "neg"),
            Op::Relu => write!(f, "relu"),
            Op::Tanh => write!(f, "tanh"),
            Op::Sigmoid => write!(f, "sigmoid"),
            Op::LeakyRelu(alpha) => write!(f, "leaky_relu({})", alpha),
            Op::Gelu => write!(f, "gelu"),
            Op::Exp => write!(f, "exp"),
            Op::Ln => write!(f, "ln"),
        }
    }
}
