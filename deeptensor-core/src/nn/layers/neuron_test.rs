use super::*;
use approx::assert_relative_eq;

fn fixed_neuron(weights: &[f64], bias: f64, nonlin: bool) -> Neuron {
    Neuron {
        weights: weights.iter().copied().map(Value::new).collect(),
        bias: Value::new(bias),
        nonlin,
    }
}

#[test]
fn test_neuron_linear_forward_backward() {
    let n = fixed_neuron(&[2.0, -1.0], 0.5, false);
    let x = [Value::new(3.0), Value::new(4.0)];
    let out = n.call(&x).unwrap();
    assert_relative_eq!(out.data(), 2.5);

    out.backward();
    assert_relative_eq!(x[0].grad(), 2.0);
    assert_relative_eq!(x[1].grad(), -1.0);
    let grads: Vec<f64> = n.parameters().iter().map(Value::grad).collect();
    assert_eq!(grads, vec![3.0, 4.0, 1.0]);
}

#[test]
fn test_neuron_relu_clamps() {
    let n = fixed_neuron(&[1.0], -2.0, true);
    let out = n.call(&[Value::new(1.0)]).unwrap();
    assert_eq!(out.data(), 0.0);
    out.backward();
    assert!(n.parameters().iter().all(|p| p.grad() == 0.0));
}

#[test]
fn test_neuron_width_mismatch() {
    let n = Neuron::new(3, false, 42);
    assert!(matches!(
        n.call(&[Value::new(1.0)]),
        Err(DeepTensorError::InvalidArgument(_))
    ));
}

#[test]
fn test_neuron_seeded_init() {
    let a = Neuron::new(4, true, 9);
    let b = Neuron::new(4, true, 9);
    let pa: Vec<f64> = a.parameters().iter().map(Value::data).collect();
    let pb: Vec<f64> = b.parameters().iter().map(Value::data).collect();
    assert_eq!(pa, pb);
    assert_eq!(pa.len(), 5);
    assert_eq!(pa[4], 0.0);
    assert_eq!(a.nin(), 4);
    assert_eq!(format!("{}", a), "ReLUNeuron(4)");
}
