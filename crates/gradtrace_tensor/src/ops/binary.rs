use crate::{coercion::IntoTensor, utils::promotion::{get_promoted_dtype, promote_buffer}, Op, Tensor};
use gradtrace_core::{be, error::Result};
use tracing::trace;

impl Tensor {
    /// Elementwise sum with broadcasting; the result is traced with [`Op::Add`].
    ///
    /// `rhs` may be another tensor or any data accepted by [`IntoTensor`].
    ///
    /// # Errors
    ///
    /// * [`Error::UnsupportedOperand`](gradtrace_core::error::Error::UnsupportedOperand) when `rhs` cannot be lifted
    /// * [`Error::IncompatibleShape`](gradtrace_core::error::Error::IncompatibleShape) when the shapes do not broadcast
    pub fn try_add<R: IntoTensor>(&self, rhs: R) -> Result<Tensor> {
        let rhs = rhs.into_tensor()?;

        let target_dtype = get_promoted_dtype(self.dtype(), rhs.dtype());
        let lhs_buffer = promote_buffer(self, target_dtype);
        let rhs_buffer = promote_buffer(&rhs, target_dtype);

        let (buffer, layout) = be::ops::binary::add(&lhs_buffer, self.layout(), &rhs_buffer, rhs.layout())?;
        let result = Tensor::from_op(buffer, layout, Op::Add { lhs: self.clone(), rhs });

        trace!(id = %result.id(), op = "+", shape = ?result.shape(), "forward");
        Ok(result)
    }

    /// Elementwise product with broadcasting; the result is traced with [`Op::Mul`].
    ///
    /// # Errors
    ///
    /// Same as [`try_add`](Self::try_add).
    pub fn try_mul<R: IntoTensor>(&self, rhs: R) -> Result<Tensor> {
        let rhs = rhs.into_tensor()?;

        let target_dtype = get_promoted_dtype(self.dtype(), rhs.dtype());
        let lhs_buffer = promote_buffer(self, target_dtype);
        let rhs_buffer = promote_buffer(&rhs, target_dtype);

        let (buffer, layout) = be::ops::binary::mul(&lhs_buffer, self.layout(), &rhs_buffer, rhs.layout())?;
        let result = Tensor::from_op(buffer, layout, Op::Mul { lhs: self.clone(), rhs });

        trace!(id = %result.id(), op = "*", shape = ?result.shape(), "forward");
        Ok(result)
    }
}
