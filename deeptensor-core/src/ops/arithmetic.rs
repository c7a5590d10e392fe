// deeptensor-core/src/ops/arithmetic.rs

use crate::autograd::Op;
use crate::error::DeepTensorError;
use crate::value::Value;
use std::ops;

/// `a + b`.
pub fn add_op(a: &Value, b: &Value) -> Value {
    Value::from_op(a.data() + b.data(), Op::Add, vec![a.clone(), b.clone()])
}

/// `a + k` for a constant `k`. Only `a` becomes a predecessor.
pub fn add_scalar_op(a: &Value, k: f64) -> Value {
    Value::from_op(a.data() + k, Op::AddScalar(k), vec![a.clone()])
}

/// `a - b`.
pub fn sub_op(a: &Value, b: &Value) -> Value {
    Value::from_op(a.data() - b.data(), Op::Sub, vec![a.clone(), b.clone()])
}

/// `a - k` for a constant `k`.
pub fn sub_scalar_op(a: &Value, k: f64) -> Value {
    Value::from_op(a.data() - k, Op::SubScalar(k), vec![a.clone()])
}

/// `a * b`.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    Value::from_op(a.data() * b.data(), Op::Mul, vec![a.clone(), b.clone()])
}

/// `a * k` for a constant `k`.
pub fn mul_scalar_op(a: &Value, k: f64) -> Value {
    Value::from_op(a.data() * k, Op::MulScalar(k), vec![a.clone()])
}

/// Integer power `a^n`. Negative exponents are allowed (`a^-1` is used by division).
pub fn pow_op(a: &Value, n: i32) -> Value {
    Value::from_op(a.data().powi(n), Op::Pow(n), vec![a.clone()])
}

/// `-a`.
pub fn neg_op(a: &Value) -> Value {
    Value::from_op(-a.data(), Op::Neg, vec![a.clone()])
}

/// `a / b`, built as `a * b^-1` from catalog operations.
///
/// # Errors
/// `DivisionByZero` if `b.data() == 0`. No node is created in that case.
pub fn div_op(a: &Value, b: &Value) -> Result<Value, DeepTensorError> {
    if b.data() == 0.0 {
        return Err(DeepTensorError::DivisionByZero);
    }
    Ok(mul_op(a, &pow_op(b, -1)))
}

/// `a / k` for a constant `k`, built as `a * (1 / k)`.
///
/// # Errors
/// `DivisionByZero` if `k == 0`.
pub fn div_scalar_op(a: &Value, k: f64) -> Result<Value, DeepTensorError> {
    if k == 0.0 {
        return Err(DeepTensorError::DivisionByZero);
    }
    Ok(mul_scalar_op(a, 1.0 / k))
}

impl Value {
    pub fn add(&self, other: &Value) -> Value {
        add_op(self, other)
    }

    pub fn add_scalar(&self, k: f64) -> Value {
        add_scalar_op(self, k)
    }

    pub fn sub(&self, other: &Value) -> Value {
        sub_op(self, other)
    }

    pub fn sub_scalar(&self, k: f64) -> Value {
        sub_scalar_op(self, k)
    }

    pub fn mul(&self, other: &Value) -> Value {
        mul_op(self, other)
    }

    pub fn mul_scalar(&self, k: f64) -> Value {
        mul_scalar_op(self, k)
    }

    pub fn pow(&self, n: i32) -> Value {
        pow_op(self, n)
    }

    pub fn neg(&self) -> Value {
        neg_op(self)
    }

    pub fn div(&self, other: &Value) -> Result<Value, DeepTensorError> {
        div_op(self, other)
    }

    pub fn div_scalar(&self, k: f64) -> Result<Value, DeepTensorError> {
        div_scalar_op(self, k)
    }
}

// --- Operator overloads on references ---
// Division is left out on purpose: it is fallible and goes through `div`.

impl<'a> ops::Add<&'a Value> for &'a Value {
    type Output = Value;

    fn add(self, rhs: &'a Value) -> Value {
        add_op(self, rhs)
    }
}

impl ops::Add<f64> for &Value {
    type Output = Value;

    fn add(self, rhs: f64) -> Value {
        add_scalar_op(self, rhs)
    }
}

impl<'a> ops::Sub<&'a Value> for &'a Value {
    type Output = Value;

    fn sub(self, rhs: &'a Value) -> Value {
        sub_op(self, rhs)
    }
}

impl ops::Sub<f64> for &Value {
    type Output = Value;

    fn sub(self, rhs: f64) -> Value {
        sub_scalar_op(self, rhs)
    }
}

impl<'a> ops::Mul<&'a Value> for &'a Value {
    type Output = Value;

    fn mul(self, rhs: &'a Value) -> Value {
        mul_op(self, rhs)
    }
}

impl ops::Mul<f64> for &Value {
    type Output = Value;

    fn mul(self, rhs: f64) -> Value {
        mul_scalar_op(self, rhs)
    }
}

impl ops::Neg for &Value {
    type Output = Value;

    fn neg(self) -> Value {
        neg_op(self)
    }
}

#[cfg(test)]
#[path = "arithmetic_test.rs"]
mod tests;
