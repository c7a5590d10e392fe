use crate::error::DeepTensorError;

/// Calculates the strides for a given shape.
/// Strides represent the number of elements to skip in the flattened data array
/// to move one step along each dimension.
///
/// Example:
/// shape = [2, 3] -> strides = [3, 1]
/// shape = [2, 2, 2] -> strides = [4, 2, 1]
pub fn calculate_strides(shape: &[usize]) -> Vec<usize> {
    if shape.is_empty() {
        return vec![];
    }
    let rank = shape.len();
    let mut strides = vec![1; rank];
    for i in (0..rank - 1).rev() {
        strides[i] = strides[i + 1] * shape[i + 1];
    }
    strides
}

/// A tensor shape must be non-empty with strictly positive dimensions.
pub fn validate_shape(shape: &[usize]) -> Result<(), DeepTensorError> {
    if shape.is_empty() {
        return Err(DeepTensorError::InvalidArgument(
            "tensor shape must have at least one dimension".to_string(),
        ));
    }
    if shape.contains(&0) {
        return Err(DeepTensorError::InvalidArgument(format!(
            "tensor dimensions must be positive, got {:?}",
            shape
        )));
    }
    Ok(())
}

/// Flat offset of a multi-index: `sum(idx[j] * strides[j])`.
///
/// Only the resolved offset is range-checked, matching flat storage bounds:
/// an index that overflows one dimension but still lands inside the buffer is
/// accepted.
pub fn normalize_idx(idx: &[usize], strides: &[usize], size: usize) -> Result<usize, DeepTensorError> {
    let out_of_range = || DeepTensorError::IndexOutOfRange {
        index: idx.to_vec(),
        size,
    };
    if idx.len() != strides.len() {
        return Err(out_of_range());
    }
    let offset = idx
        .iter()
        .zip(strides)
        .try_fold(0usize, |acc, (&i, &s)| i.checked_mul(s).and_then(|v| acc.checked_add(v)))
        .ok_or_else(out_of_range)?;
    if offset >= size {
        return Err(out_of_range());
    }
    Ok(offset)
}

/// Formats a shape as `(a, b, c)` for messages.
pub fn shape_str(shape: &[usize]) -> String {
    let dims: Vec<String> = shape.iter().map(usize::to_string).collect();
    format!("({})", dims.join(", "))
}

#[cfg(test)]
#[path = "utils_test.rs"]
mod tests;
