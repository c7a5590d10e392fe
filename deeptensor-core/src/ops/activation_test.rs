use super::*;
use crate::autograd::check_grad;
use approx::assert_relative_eq;

#[test]
fn test_relu_positive_and_negative() {
    let v = Value::new(5.0);
    let out = v.relu();
    assert_relative_eq!(out.data(), 5.0);
    assert_eq!(v.grad(), 0.0);
    assert_eq!(out.grad(), 0.0);
    out.backward();
    assert_relative_eq!(v.grad(), 1.0);
    assert_relative_eq!(out.grad(), 1.0);

    let v_neg = Value::new(-5.0);
    let out_neg = v_neg.relu();
    assert_eq!(out_neg.data(), 0.0);
    out_neg.backward();
    assert_eq!(v_neg.grad(), 0.0);
    assert_relative_eq!(out_neg.grad(), 1.0);
}

#[test]
fn test_tanh_gradient() {
    for &x in &[-3.0, -0.5, 0.0, 0.5, 2.0] {
        let v = Value::new(x);
        let out = v.tanh();
        let t = f64::tanh(x);
        assert_relative_eq!(out.data(), t);
        out.backward();
        assert_relative_eq!(v.grad(), 1.0 - t * t);
    }
}

#[test]
fn test_sigmoid_gradient() {
    let v = Value::new(0.5);
    let out = v.sigmoid();
    let s = 1.0 / (1.0 + (-0.5_f64).exp());
    assert_relative_eq!(out.data(), s);
    out.backward();
    assert_relative_eq!(v.grad(), s * (1.0 - s));
}

#[test]
fn test_leaky_relu_uses_input_sign() {
    let v = Value::new(5.0);
    let out = v.leaky_relu(0.1);
    assert_relative_eq!(out.data(), 5.0);
    out.backward();
    assert_relative_eq!(v.grad(), 1.0);

    let v_neg = Value::new(-5.0);
    let out_neg = v_neg.leaky_relu(0.1);
    assert_relative_eq!(out_neg.data(), -0.5);
    out_neg.backward();
    assert_relative_eq!(v_neg.grad(), 0.1);
}

#[test]
fn test_leaky_relu_negative_alpha_keeps_input_slope() {
    // with alpha < 0 the output of a negative input is positive,
    // the slope must still be alpha
    let v = Value::new(-2.0);
    let out = v.leaky_relu(-0.5);
    assert_relative_eq!(out.data(), 1.0);
    out.backward();
    assert_relative_eq!(v.grad(), -0.5);
}

#[test]
fn test_gelu_forward_matches_tanh_approximation() {
    let x: f64 = 0.8;
    let expected = 0.5 * x * (1.0 + ((2.0 / std::f64::consts::PI).sqrt() * (x + 0.044715 * x.powi(3))).tanh());
    let out = Value::new(x).gelu();
    assert_relative_eq!(out.data(), expected, epsilon = 1e-12);
    assert_relative_eq!(GELU_SQRT_2_OVER_PI, (2.0 / std::f64::consts::PI).sqrt(), epsilon = 1e-15);
}

#[test]
fn test_gelu_gradient_consistent_with_forward() {
    for &x in &[-2.5, -0.3, 0.0, 0.7, 3.1] {
        let result = check_grad(|v| Ok(v[0].gelu()), &[x], 1e-6, 1e-6);
        assert!(result.is_ok(), "x = {}: {:?}", x, result);
    }
}

#[test]
fn test_gelu_at_zero() {
    let v = Value::new(0.0);
    let out = v.gelu();
    assert_eq!(out.data(), 0.0);
    out.backward();
    assert_relative_eq!(v.grad(), 0.5);
}

#[test]
fn test_activation_chain_grad_check() {
    let result = check_grad(
        |v| Ok(v[0].sigmoid().mul(&v[1].tanh()).add(&v[0].leaky_relu(0.01))),
        &[0.3, -1.1],
        1e-6,
        1e-5,
    );
    assert!(result.is_ok(), "{:?}", result);
}
