use gradtrace_core::error::Result;

use crate::{adapter::TensorAdapter, Tensor};

/// The one place where operands of a tensor operation are lifted into the graph.
///
/// Existing tensors pass through unchanged, so `&a + &a` refers to the same node
/// twice. Any [`TensorAdapter`] data becomes a fresh leaf in the default dtype.
pub trait IntoTensor {
    fn into_tensor(self) -> Result<Tensor>;
}

impl IntoTensor for Tensor {
    fn into_tensor(self) -> Result<Tensor> {
        Ok(self)
    }
}

impl IntoTensor for &Tensor {
    fn into_tensor(self) -> Result<Tensor> {
        Ok(self.clone())
    }
}

impl<T: TensorAdapter> IntoTensor for T {
    fn into_tensor(self) -> Result<Tensor> {
        Tensor::try_new(self)
    }
}
