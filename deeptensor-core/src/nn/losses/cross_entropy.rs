use crate::error::DeepTensorError;
use crate::ops::softmax::softmax_op;
use crate::tensor::Tensor;
use crate::value::Value;

/// Negative log-likelihood of class `target` under `softmax(logits)`.
///
/// Returns `-ln(softmax(logits)[target])` for a single sample; no averaging.
///
/// # Errors
/// `InvalidArgument` if `logits` is not 1-D or `target >= logits.numel()`.
pub fn cross_entropy(logits: &Tensor, target: usize) -> Result<Value, DeepTensorError> {
    if logits.dims() != 1 || target >= logits.numel() {
        return Err(DeepTensorError::InvalidArgument(format!(
            "cross_entropy expects 1-D logits and target < len, got shape {:?} and target {}",
            logits.shape, target
        )));
    }
    let probs = softmax_op(&logits.values()?)?;
    Ok(probs[target].ln().neg())
}

/// Binary cross entropy of the probability held in `prob[0]`.
///
/// `-ln(p)` for target 1, `-ln(1 - p)` for target 0. `p` is expected in `(0, 1)`;
/// it is not clamped.
///
/// # Errors
/// `InvalidArgument` if `prob` is not 1-D or `target` is not 0 or 1.
pub fn binary_cross_entropy(prob: &Tensor, target: usize) -> Result<Value, DeepTensorError> {
    if target > 1 {
        return Err(DeepTensorError::InvalidArgument(format!(
            "binary_cross_entropy target must be 0 or 1, got {}",
            target
        )));
    }
    if prob.dims() != 1 {
        return Err(DeepTensorError::InvalidArgument(format!(
            "binary_cross_entropy expects a 1-D tensor, got shape {:?}",
            prob.shape
        )));
    }
    let p = prob.get_flat(0)?;
    let likelihood = if target == 1 { p } else { Value::new(1.0).sub(&p) };
    Ok(likelihood.ln().neg())
}

#[cfg(test)]
#[path = "cross_entropy_test.rs"]
mod tests;
