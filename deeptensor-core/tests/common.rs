use deeptensor_core::tensor::from_vec;
use deeptensor_core::Tensor;

/// Installs `env_logger` once per test binary; `RUST_LOG=debug` shows the
/// backward driver's output.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// Helper to build a leaf tensor from literal data.
#[allow(dead_code)]
pub fn create_test_tensor(data: Vec<f64>, shape: Vec<usize>) -> Tensor {
    from_vec(data, shape).expect("Test tensor creation failed")
}
