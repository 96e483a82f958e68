use crate::Tensor;
use gradtrace_core::{
    buffer::Element,
    error::{Error, Result},
    scalar::Scalar,
};

impl Tensor {
    /// The value in row-major order as `T`, converting from the tensor's dtype if needed.
    pub fn to_flatten_vec<T: Element>(&self) -> Result<Vec<T>> {
        Ok(self.buffer().to_vec::<T>())
    }

    pub fn item(&self) -> Result<Scalar> {
        if self.size() != 1 {
            return Err(Error::InvalidArgument(format!(
                "item() can only be called on a tensor with a single element, but got tensor with {} elements",
                self.size()
            )));
        }

        self.buffer().read_scalar(0)
    }
}
