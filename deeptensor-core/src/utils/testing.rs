use crate::tensor::Tensor;

/// Checks that two f64 slices are element-wise within `tolerance`.
/// Panics with the first offending index otherwise.
pub fn check_values_near(actual: &[f64], expected: &[f64], tolerance: f64) {
    assert_eq!(actual.len(), expected.len(), "Data length mismatch");

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (a - e).abs();
        if diff > tolerance || diff.is_nan() {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, a, e, diff, tolerance
            );
        }
    }
}

/// Checks a tensor's shape and forward data against expectations.
/// Panics if shapes differ, an element is unset, or data differs beyond `tolerance`.
pub fn check_tensor_near(
    actual: &Tensor,
    expected_shape: &[usize],
    expected_data: &[f64],
    tolerance: f64,
) {
    assert_eq!(actual.shape(), expected_shape, "Shape mismatch");
    let actual_data = actual
        .data()
        .expect("Unset element in check_tensor_near");
    check_values_near(&actual_data, expected_data, tolerance);
}
