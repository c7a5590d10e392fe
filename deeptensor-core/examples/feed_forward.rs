//! Trains a two-layer network on XOR with plain gradient descent.
//!
//! Run with `RUST_LOG=debug` to see the backward driver at work.

use deeptensor_core::nn::{binary_cross_entropy, FeedForwardLayer, Model, Sigmoid, Tanh};
use deeptensor_core::tensor::from_vec;
use deeptensor_core::{DeepTensorError, StorageDevice, Value};

fn main() -> Result<(), DeepTensorError> {
    env_logger::init();

    let model = Model::new(
        vec![
            Box::new(FeedForwardLayer::new(2, 4, 42)?),
            Box::new(Tanh),
            Box::new(FeedForwardLayer::new(4, 1, 7)?),
            Box::new(Sigmoid),
        ],
        StorageDevice::Cpu,
    );
    println!("{}", model);

    let samples = [([0.0, 0.0], 0), ([0.0, 1.0], 1), ([1.0, 0.0], 1), ([1.0, 1.0], 0)];
    let lr = 0.5;

    for epoch in 0..200 {
        model.zero_grad();
        let mut total = Value::new(0.0);
        for (x, y) in &samples {
            let prob = model.forward(&from_vec(x.to_vec(), vec![2])?)?;
            total = total.add(&binary_cross_entropy(&prob, *y)?);
        }
        let loss = total.div_scalar(samples.len() as f64)?;
        loss.backward();

        for p in model.parameters() {
            p.set_data(p.data() - lr * p.grad())?;
        }
        if epoch % 20 == 0 {
            println!("epoch {:>3}  loss {:.6}", epoch, loss.data());
        }
    }

    for (x, y) in &samples {
        let prob = model.forward(&from_vec(x.to_vec(), vec![2])?)?;
        println!("{:?} -> {:.4} (target {})", x, prob.get_flat(0)?.data(), y);
    }
    Ok(())
}
