use super::*;

#[test]
fn test_seeded_values_are_reproducible() {
    let a: Vec<f64> = seeded_values(16, 42).iter().map(Value::data).collect();
    let b: Vec<f64> = seeded_values(16, 42).iter().map(Value::data).collect();
    assert_eq!(a, b);

    let c: Vec<f64> = seeded_values(16, 43).iter().map(Value::data).collect();
    assert_ne!(a, c);
}

#[test]
fn test_seeded_values_are_distinct_leaves() {
    let values = seeded_values(4, 7);
    assert!(values.iter().all(Value::is_leaf));
    assert!(!values[0].same_node(&values[1]));
    assert!(values.iter().all(|v| v.data().is_finite()));
}

#[test]
fn test_seeded_tensor_shape() {
    let t = seeded_tensor(vec![3, 2], 1).unwrap();
    assert_eq!(t.shape(), vec![3, 2]);
    assert!(t.is_initialized());

    let expected: Vec<f64> = seeded_values(6, 1).iter().map(Value::data).collect();
    assert_eq!(t.data().unwrap(), expected);
}

#[test]
fn test_seeded_tensor_invalid_shape() {
    assert!(matches!(
        seeded_tensor(vec![2, 0], 1),
        Err(DeepTensorError::InvalidArgument(_))
    ));
    assert!(matches!(
        seeded_tensor(vec![], 1),
        Err(DeepTensorError::InvalidArgument(_))
    ));
}
