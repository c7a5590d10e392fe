use crate::error::DeepTensorError;
use crate::value::Value;

/// Softmax over a sequence of nodes.
///
/// Built only from catalog operations so gradients flow without a dedicated rule:
/// 1. find the node with the largest `data` (numerical stability),
/// 2. `e_i = exp(x_i - max)`,
/// 3. `sum = 0 + e_0 + e_1 + ...`,
/// 4. `out_i = e_i / sum`.
///
/// # Errors
/// `InvalidArgument` on an empty input.
pub fn softmax_op(inputs: &[Value]) -> Result<Vec<Value>, DeepTensorError> {
    let max_val = inputs
        .iter()
        .fold(None::<&Value>, |best, v| match best {
            Some(b) if b.data() >= v.data() => Some(b),
            _ => Some(v),
        })
        .ok_or_else(|| DeepTensorError::InvalidArgument("softmax of an empty sequence".to_string()))?;

    let exp_vals: Vec<Value> = inputs.iter().map(|v| v.sub(max_val).exp()).collect();

    let sum_exp = exp_vals
        .iter()
        .fold(Value::new(0.0), |acc, e| acc.add(e));

    // sum_exp >= 1 since the max element contributes exp(0)
    exp_vals.iter().map(|e| e.div(&sum_exp)).collect()
}
