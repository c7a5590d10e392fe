use crate::tensor::utils::shape_str;
use crate::tensor::Tensor;
use std::fmt;

impl fmt::Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data: Vec<Option<f64>> = self
            .elements
            .iter()
            .map(|slot| slot.as_ref().map(|v| v.data()))
            .collect();
        f.debug_struct("Tensor")
            .field("shape", &self.shape)
            .field("strides", &self.strides)
            .field("data", &data)
            .finish()
    }
}

impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tensor(shape={}, data=[", shape_str(&self.shape))?;
        for (i, slot) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match slot {
                Some(v) => write!(f, "{:.4}", v.data())?,
                None => write!(f, "_")?,
            }
        }
        write!(f, "])")
    }
}
