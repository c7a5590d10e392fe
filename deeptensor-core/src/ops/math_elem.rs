// deeptensor-core/src/ops/math_elem.rs

use crate::autograd::Op;
use crate::value::Value;

/// Computes `e^a`.
pub fn exp_op(a: &Value) -> Value {
    Value::from_op(a.data().exp(), Op::Exp, vec![a.clone()])
}

/// Computes the natural logarithm of `a`.
///
/// # Domain Considerations
/// Non-positive inputs follow `f64::ln`: `-inf` at zero, `NaN` below. The
/// gradient `1/x` is likewise undefined at zero.
pub fn ln_op(a: &Value) -> Value {
    Value::from_op(a.data().ln(), Op::Ln, vec![a.clone()])
}

impl Value {
    pub fn exp(&self) -> Value {
        exp_op(self)
    }

    pub fn ln(&self) -> Value {
        ln_op(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::value::Value;
    use approx::assert_relative_eq;

    #[test]
    fn test_exp_forward_backward() {
        let x = Value::new(1.5);
        let y = x.exp();
        assert_relative_eq!(y.data(), 1.5_f64.exp());
        y.backward();
        assert_relative_eq!(x.grad(), 1.5_f64.exp());
    }

    #[test]
    fn test_ln_forward_backward() {
        let x = Value::new(4.0);
        let y = x.ln();
        assert_relative_eq!(y.data(), 4.0_f64.ln());
        y.backward();
        assert_relative_eq!(x.grad(), 0.25);
    }

    #[test]
    fn test_ln_of_exp_is_identity_gradient() {
        let x = Value::new(-0.3);
        let y = x.exp().ln();
        assert_relative_eq!(y.data(), -0.3, epsilon = 1e-12);
        y.backward();
        assert_relative_eq!(x.grad(), 1.0, epsilon = 1e-12);
    }
}
