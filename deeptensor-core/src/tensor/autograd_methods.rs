use crate::autograd::graph::backward_from;
use crate::error::DeepTensorError;
use crate::tensor::Tensor;
use crate::value::Value;

impl Tensor {
    /// Resets every element's gradient to zero. Flat reset, no graph traversal;
    /// unset slots are skipped.
    pub fn zero_grad(&self) {
        for value in self.elements.iter().flatten() {
            value.zero_grad();
        }
    }

    /// Propagates gradients from every element of this tensor.
    ///
    /// Runs one topological traversal over the union of the graphs reachable
    /// from all elements, seeding each element with `grad = 1.0` (the gradient
    /// of the sum of the elements). Elements that depend on each other, or on
    /// shared nodes of another tensor (e.g. after `matmul`), receive every
    /// contribution before they propagate.
    ///
    /// # Errors
    /// `UninitializedElement` if a slot was never set.
    pub fn backward(&self) -> Result<(), DeepTensorError> {
        let roots = self.values()?;
        log::debug!("Tensor::backward over {} element(s), shape {:?}", roots.len(), self.shape);
        backward_from(&roots);
        Ok(())
    }

    /// The element nodes in flat order, skipping unset slots.
    /// Layers use it to enumerate their trainable leaves.
    pub fn parameters(&self) -> Vec<Value> {
        self.elements.iter().flatten().cloned().collect()
    }
}
