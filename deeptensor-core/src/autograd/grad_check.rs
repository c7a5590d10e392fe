use crate::error::DeepTensorError;
use crate::value::Value;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },

    #[error("Epsilon must be strictly positive, got {0}")]
    InvalidEpsilon(f64),

    #[error("Function evaluation failed during gradient check: {0}")]
    ForwardPassError(#[from] DeepTensorError),
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// `func` is evaluated on fresh leaves built from `inputs`; the analytical
/// gradient comes from a backward pass on its output, the numerical one from
/// `(f(x + eps) - f(x - eps)) / (2 * eps)` for each input in turn.
///
/// # Errors
/// `GradientMismatch` as soon as one input disagrees beyond `tolerance`
/// (absolute or relative), or the error returned by `func`.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, DeepTensorError>,
{
    if epsilon <= 0.0 || !epsilon.is_finite() {
        return Err(GradCheckError::InvalidEpsilon(epsilon));
    }

    let leaves: Vec<Value> = inputs.iter().copied().map(Value::new).collect();
    let output = func(&leaves)?;
    output.backward();

    let evaluate = |index: usize, shift: f64| -> Result<f64, DeepTensorError> {
        let shifted: Vec<Value> = inputs
            .iter()
            .enumerate()
            .map(|(i, &x)| Value::new(if i == index { x + shift } else { x }))
            .collect();
        Ok(func(&shifted)?.data())
    };

    for (input_index, leaf) in leaves.iter().enumerate() {
        let analytical_grad = leaf.grad();
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }

        let loss_plus = evaluate(input_index, epsilon)?;
        let loss_minus = evaluate(input_index, -epsilon)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }

        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_grad_accepts_correct_gradient() {
        let result = check_grad(
            |x| Ok(x[0].mul(&x[1]).add(&x[0].tanh())),
            &[0.7, -1.3],
            1e-6,
            1e-5,
        );
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_check_grad_reports_forward_error() {
        let result = check_grad(|x| x[0].div(&x[1]), &[1.0, 0.0], 1e-6, 1e-5);
        assert!(matches!(
            result,
            Err(GradCheckError::ForwardPassError(DeepTensorError::DivisionByZero))
        ));
    }

    #[test]
    fn test_check_grad_rejects_bad_epsilon() {
        let result = check_grad(|x| Ok(x[0].clone()), &[1.0], 0.0, 1e-5);
        assert_eq!(result, Err(GradCheckError::InvalidEpsilon(0.0)));
    }
}
