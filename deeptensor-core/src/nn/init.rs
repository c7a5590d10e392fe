use crate::error::DeepTensorError;
use crate::tensor::Tensor;
use crate::value::Value;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

/// Draws `n` fresh leaf nodes from a standard normal distribution.
///
/// The generator is a `StdRng` seeded with `seed`, so the same `(n, seed)`
/// pair always yields the same values.
pub fn seeded_values(n: usize, seed: u64) -> Vec<Value> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Value::new(rng.sample::<f64, _>(StandardNormal)))
        .collect()
}

/// Creates a tensor of `shape` filled row-major with seeded standard-normal leaves.
///
/// # Errors
/// `InvalidArgument` if `shape` is empty or has a zero dimension.
pub fn seeded_tensor(shape: Vec<usize>, seed: u64) -> Result<Tensor, DeepTensorError> {
    crate::tensor::utils::validate_shape(&shape)?;
    let numel = shape.iter().product();
    Tensor::from_values(seeded_values(numel, seed), shape)
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
