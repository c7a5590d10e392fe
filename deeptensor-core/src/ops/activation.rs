// src/ops/activation.rs

//! # Activation Functions
//!
//! Non-linear scalar operations: ReLU, Tanh, Sigmoid, LeakyReLU and GELU.
//! Their local derivatives are applied by [`Op::backward`](crate::autograd::Op::backward).

use crate::autograd::Op;
use crate::value::Value;

/// `sqrt(2 / pi)`, scale of the tanh argument in the GELU approximation.
pub(crate) const GELU_SQRT_2_OVER_PI: f64 = 0.797_884_560_802_865_4;
/// Cubic coefficient of the GELU tanh approximation.
pub(crate) const GELU_COEFF: f64 = 0.044_715;

fn gelu_tanh_arg(x: f64) -> f64 {
    GELU_SQRT_2_OVER_PI * (x + GELU_COEFF * x * x * x)
}

/// Derivative of `0.5 * x * (1 + tanh(u(x)))` with `u(x) = sqrt(2/pi) * (x + 0.044715 x^3)`.
///
/// Derived from the same tanh approximation as the forward pass, not from the
/// exact erf-based GELU.
pub(crate) fn gelu_derivative(x: f64) -> f64 {
    let tanh_val = gelu_tanh_arg(x).tanh();
    0.5 * (1.0 + tanh_val)
        + 0.5 * x * (1.0 - tanh_val * tanh_val) * GELU_SQRT_2_OVER_PI * (1.0 + 3.0 * GELU_COEFF * x * x)
}

/// ReLU(x) = max(0, x)
pub fn relu_op(a: &Value) -> Value {
    let x = a.data();
    let out = if x > 0.0 { x } else { 0.0 };
    Value::from_op(out, Op::Relu, vec![a.clone()])
}

pub fn tanh_op(a: &Value) -> Value {
    Value::from_op(a.data().tanh(), Op::Tanh, vec![a.clone()])
}

/// sigmoid(x) = 1 / (1 + e^-x)
pub fn sigmoid_op(a: &Value) -> Value {
    let out = 1.0 / (1.0 + (-a.data()).exp());
    Value::from_op(out, Op::Sigmoid, vec![a.clone()])
}

/// LeakyReLU(x) = x if x > 0, alpha * x otherwise.
pub fn leaky_relu_op(a: &Value, alpha: f64) -> Value {
    let x = a.data();
    let out = if x > 0.0 { x } else { alpha * x };
    Value::from_op(out, Op::LeakyRelu(alpha), vec![a.clone()])
}

/// GELU, tanh approximation:
/// `0.5 * x * (1 + tanh(sqrt(2/pi) * (x + 0.044715 * x^3)))`.
pub fn gelu_op(a: &Value) -> Value {
    let x = a.data();
    let out = 0.5 * x * (1.0 + gelu_tanh_arg(x).tanh());
    Value::from_op(out, Op::Gelu, vec![a.clone()])
}

impl Value {
    pub fn relu(&self) -> Value {
        relu_op(self)
    }

    pub fn tanh(&self) -> Value {
        tanh_op(self)
    }

    pub fn sigmoid(&self) -> Value {
        sigmoid_op(self)
    }

    pub fn leaky_relu(&self, alpha: f64) -> Value {
        leaky_relu_op(self, alpha)
    }

    pub fn gelu(&self) -> Value {
        gelu_op(self)
    }
}

#[cfg(test)]
#[path = "activation_test.rs"]
mod tests;
