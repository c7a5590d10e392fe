use super::*;
use approx::assert_relative_eq;

// Shared fixture values
fn fixture() -> (Value, Value) {
    (Value::new(5.1), Value::new(4.2))
}

#[test]
fn test_leaf_defaults() {
    let v = Value::new(3.5);
    assert_eq!(v.data(), 3.5);
    assert_eq!(v.grad(), 0.0);
    assert_eq!(v.op(), Op::Leaf);
    assert!(v.is_leaf());
    assert!(v.predecessors().is_empty());
}

#[test]
fn test_add_single_rule() {
    let (a, b) = fixture();
    let c = a.add(&b);
    assert_relative_eq!(c.data(), 9.3, epsilon = 1e-12);

    c.set_grad(-2.3);
    assert_eq!(a.grad(), 0.0);
    assert_eq!(b.grad(), 0.0);

    c.apply_backward();
    assert_relative_eq!(a.grad(), -2.3);
    assert_relative_eq!(b.grad(), -2.3);
    assert_relative_eq!(c.grad(), -2.3);
}

#[test]
fn test_sub_single_rule() {
    let (a, b) = fixture();
    let c = a.sub(&b);
    assert_relative_eq!(c.data(), 0.9, epsilon = 1e-12);

    c.set_grad(-2.3);
    c.apply_backward();
    assert_relative_eq!(a.grad(), -2.3);
    assert_relative_eq!(b.grad(), 2.3);
}

#[test]
fn test_mul_single_rule() {
    let (a, b) = fixture();
    let c = a.mul(&b);
    assert_relative_eq!(c.data(), 5.1 * 4.2);

    c.set_grad(-2.3);
    c.apply_backward();
    assert_relative_eq!(a.grad(), -2.3 * 4.2);
    assert_relative_eq!(b.grad(), -2.3 * 5.1);
}

#[test]
fn test_apply_backward_on_leaf_is_noop() {
    let a = Value::new(1.0);
    a.set_grad(4.0);
    a.apply_backward();
    assert_eq!(a.grad(), 4.0);
}

#[test]
fn test_predecessors_are_distinct() {
    let a = Value::new(3.0);
    let sq = a.mul(&a);
    assert_eq!(sq.operands().len(), 2);
    let preds = sq.predecessors();
    assert_eq!(preds.len(), 1);
    assert!(preds[0].same_node(&a));
}

#[test]
fn test_self_multiplication_accumulates_both_paths() {
    let a = Value::new(3.0);
    let sq = a.mul(&a);
    sq.backward();
    assert_relative_eq!(a.grad(), 6.0);
}

#[test]
fn test_composite_expression() {
    let x = Value::new(7.0);
    let y = Value::new(2.0);
    let z = x.pow(2).add(&y.mul_scalar(5.0)).sub_scalar(1.0);
    assert_relative_eq!(z.data(), 58.0);

    z.backward();
    assert_relative_eq!(z.grad(), 1.0);
    assert_relative_eq!(x.grad(), 14.0);
    assert_relative_eq!(y.grad(), 5.0);
}

#[test]
fn test_backward_accumulates_across_calls() {
    let x = Value::new(2.0);
    let y = x.mul_scalar(3.0);
    y.backward();
    y.backward();
    assert_relative_eq!(x.grad(), 6.0);
}

#[test]
fn test_zero_grad_graph_resets_ancestors() {
    let x = Value::new(2.0);
    let w = Value::new(-1.0);
    let y = x.mul(&w).tanh();
    y.backward();
    assert!(x.grad() != 0.0);

    y.zero_grad_graph();
    assert_eq!(x.grad(), 0.0);
    assert_eq!(w.grad(), 0.0);
    assert_eq!(y.grad(), 0.0);
}

#[test]
fn test_zero_grad_then_backward_is_repeatable() {
    let x = Value::new(0.4);
    let y = Value::new(-1.7);
    let z = x.mul(&y).add(&x.sigmoid()).gelu();

    z.zero_grad_graph();
    z.backward();
    let first = (x.grad(), y.grad());

    z.zero_grad_graph();
    z.backward();
    let second = (x.grad(), y.grad());

    assert_eq!(first, second);
}

#[test]
fn test_display_format() {
    let v = Value::new(1.5);
    assert_eq!(format!("{}", v), "Value(data=1.500000, grad=0.000000)");
}

#[test]
fn test_operator_overloads_build_graph() {
    let a = Value::new(2.0);
    let b = Value::new(3.0);
    let c = &(&(&a * &b) + 1.0) - &(-&a);
    // 2*3 + 1 + 2
    assert_relative_eq!(c.data(), 9.0);
    c.backward();
    assert_relative_eq!(a.grad(), 4.0);
    assert_relative_eq!(b.grad(), 2.0);
}

#[test]
fn test_set_data_does_not_touch_descendants() {
    let w = Value::new(1.0);
    let y = w.mul_scalar(2.0);
    w.set_data(4.0).unwrap();
    assert_eq!(w.data(), 4.0);
    assert_eq!(y.data(), 2.0);
    assert_eq!(w.mul_scalar(2.0).data(), 8.0);
}

#[test]
fn test_set_data_rejects_derived_nodes() {
    let y = Value::new(1.0).exp();
    assert!(matches!(
        y.set_data(0.0),
        Err(DeepTensorError::UnsupportedOperation(_))
    ));
    assert_relative_eq!(y.data(), 1.0_f64.exp());
}
