use crate::error::DeepTensorError;
use crate::ops::arithmetic::{add_op, div_op, mul_op, sub_op};
use crate::tensor::Tensor;
use crate::value::Value;

impl Tensor {
    /// Applies a binary scalar operation to corresponding elements of two
    /// tensors of identical shape.
    fn zip_with<F>(&self, other: &Tensor, operation: &str, f: F) -> Result<Tensor, DeepTensorError>
    where
        F: Fn(&Value, &Value) -> Value,
    {
        if self.shape != other.shape {
            return Err(DeepTensorError::ShapeMismatch {
                expected: self.shape.clone(),
                actual: other.shape.clone(),
                operation: operation.to_string(),
            });
        }
        let lhs = self.values()?;
        let rhs = other.values()?;
        let out = lhs.iter().zip(rhs.iter()).map(|(a, b)| f(a, b)).collect();
        Tensor::from_values(out, self.shape.clone())
    }

    /// Element-wise addition. Shapes must be identical (no broadcasting).
    ///
    /// # Errors
    /// `ShapeMismatch` if the shapes differ.
    pub fn add(&self, other: &Tensor) -> Result<Tensor, DeepTensorError> {
        self.zip_with(other, "add", add_op)
    }

    /// Element-wise subtraction. Shapes must be identical.
    pub fn sub(&self, other: &Tensor) -> Result<Tensor, DeepTensorError> {
        self.zip_with(other, "sub", sub_op)
    }

    /// Element-wise (Hadamard) product. Shapes must be identical.
    pub fn mul(&self, other: &Tensor) -> Result<Tensor, DeepTensorError> {
        self.zip_with(other, "mul", mul_op)
    }

    /// Multiplies every element by a constant.
    pub fn mul_scalar(&self, k: f64) -> Result<Tensor, DeepTensorError> {
        self.map_values(|v| v.mul_scalar(k))
    }

    /// Divides every element by a single scalar node.
    ///
    /// # Errors
    /// `DivisionByZero` if `divisor.data() == 0`, checked before any node is built.
    pub fn div(&self, divisor: &Value) -> Result<Tensor, DeepTensorError> {
        if divisor.data() == 0.0 {
            return Err(DeepTensorError::DivisionByZero);
        }
        let out = self
            .values()?
            .iter()
            .map(|v| div_op(v, divisor))
            .collect::<Result<Vec<_>, _>>()?;
        Tensor::from_values(out, self.shape.clone())
    }

    /// Matrix product built from scalar `mul`/`add` nodes.
    ///
    /// A 1-D left operand is promoted to a row vector `(1, n)` and a 1-D right
    /// operand to a column vector `(n, 1)`. The result is always 2-D
    /// `(rows, cols)`; each element is the chain `0 + a_i0*b_0j + a_i1*b_1j + ...`.
    ///
    /// # Errors
    /// * `InvalidArgument` if an operand has more than two dimensions.
    /// * `DimensionMismatch` if the inner dimensions differ.
    pub fn matmul(&self, other: &Tensor) -> Result<Tensor, DeepTensorError> {
        let left = promote_matmul_shape(&self.shape, true)?;
        let right = promote_matmul_shape(&other.shape, false)?;
        if left[1] != right[0] {
            return Err(DeepTensorError::DimensionMismatch {
                left: self.shape.clone(),
                right: other.shape.clone(),
            });
        }

        let a = self.values()?;
        let b = other.values()?;
        let (rows, inner, cols) = (left[0], left[1], right[1]);

        let mut out = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                let mut sum = Value::new(0.0);
                for k in 0..inner {
                    sum = sum.add(&a[i * inner + k].mul(&b[k * cols + j]));
                }
                out.push(sum);
            }
        }
        Tensor::from_values(out, vec![rows, cols])
    }
}

/// Shape promotion of a matmul operand to 2-D.
fn promote_matmul_shape(shape: &[usize], is_left: bool) -> Result<[usize; 2], DeepTensorError> {
    match *shape {
        [n] if is_left => Ok([1, n]),
        [n] => Ok([n, 1]),
        [rows, cols] => Ok([rows, cols]),
        _ => Err(DeepTensorError::InvalidArgument(format!(
            "matmul supports 1-D and 2-D tensors, got shape {}",
            crate::tensor::utils::shape_str(shape)
        ))),
    }
}
