use super::*;
use crate::tensor::from_vec;
use crate::utils::testing::check_values_near;
use approx::assert_relative_eq;

#[test]
fn test_cross_entropy_forward() {
    let logits = from_vec(vec![1.0, 2.0, 3.0], vec![3]).unwrap();
    let loss = cross_entropy(&logits, 2).unwrap();
    let denom: f64 = [1.0_f64, 2.0, 3.0].iter().map(|v| v.exp()).sum();
    assert_relative_eq!(loss.data(), -(3.0_f64.exp() / denom).ln(), epsilon = 1e-12);
}

#[test]
fn test_cross_entropy_backward_is_softmax_minus_onehot() {
    let raw = [0.5, -1.0, 2.0, 0.0];
    let logits = from_vec(raw.to_vec(), vec![4]).unwrap();
    cross_entropy(&logits, 1).unwrap().backward();

    let max = 2.0_f64;
    let exps: Vec<f64> = raw.iter().map(|v| (v - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    let mut expected: Vec<f64> = exps.iter().map(|e| e / sum).collect();
    expected[1] -= 1.0;
    check_values_near(&logits.grads().unwrap(), &expected, 1e-12);
}

#[test]
fn test_cross_entropy_invalid_inputs() {
    let logits = from_vec(vec![1.0, 2.0, 3.0], vec![3]).unwrap();
    assert!(matches!(cross_entropy(&logits, 3), Err(DeepTensorError::InvalidArgument(_))));

    let matrix = from_vec(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]).unwrap();
    assert!(matches!(cross_entropy(&matrix, 0), Err(DeepTensorError::InvalidArgument(_))));
}

#[test]
fn test_binary_cross_entropy() {
    let p = from_vec(vec![0.8], vec![1]).unwrap();
    let one = binary_cross_entropy(&p, 1).unwrap();
    assert_relative_eq!(one.data(), -(0.8_f64).ln(), epsilon = 1e-12);
    one.backward();
    assert_relative_eq!(p.grads().unwrap()[0], -1.0 / 0.8, epsilon = 1e-12);

    let q = from_vec(vec![0.8], vec![1]).unwrap();
    let zero = binary_cross_entropy(&q, 0).unwrap();
    assert_relative_eq!(zero.data(), -(0.2_f64).ln(), epsilon = 1e-12);
    zero.backward();
    assert_relative_eq!(q.grads().unwrap()[0], 1.0 / (1.0 - 0.8), epsilon = 1e-9);
}

#[test]
fn test_binary_cross_entropy_invalid_inputs() {
    let p = from_vec(vec![0.4], vec![1]).unwrap();
    assert!(matches!(binary_cross_entropy(&p, 2), Err(DeepTensorError::InvalidArgument(_))));

    let matrix = from_vec(vec![0.4, 0.6], vec![1, 2]).unwrap();
    assert!(matches!(binary_cross_entropy(&matrix, 1), Err(DeepTensorError::InvalidArgument(_))));
}
