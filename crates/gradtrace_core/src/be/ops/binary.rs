use crate::{
    buffer::Buffer,
    error::{Error, Result},
    layout::Layout,
};
use gradtrace_cpu::ops::binary;

macro_rules! declare_binary_op {
    ($name:ident, [$($dtype:ident),* $(,)?]) => {
        /// Elementwise op with broadcasting. Both operands must share a dtype;
        /// the result is contiguous with the broadcast shape.
        pub fn $name(lhs: &Buffer, lhs_layout: &Layout, rhs: &Buffer, rhs_layout: &Layout) -> Result<(Buffer, Layout)> {
            if lhs.dtype() != rhs.dtype() {
                return Err(Error::DTypeMismatch {
                    expected: lhs.dtype(),
                    got: rhs.dtype(),
                });
            }
            if !lhs.dtype().is_numeric() {
                return Err(Error::UnsupportedDType {
                    op: stringify!($name),
                    dtype: lhs.dtype(),
                });
            }

            let shape = Layout::broadcast_shape(lhs_layout.shape(), rhs_layout.shape())?;
            let lhs_strides = lhs_layout.broadcast_strides(&shape)?;
            let rhs_strides = rhs_layout.broadcast_strides(&shape)?;
            let size = Layout::compute_size(&shape);

            let out = match (lhs, rhs) {
                $(
                    (Buffer::$dtype(l), Buffer::$dtype(r)) => {
                        let mut out = vec![Default::default(); size];
                        binary::$name(&shape, &lhs_strides, &rhs_strides, l, r, out.as_mut_slice());
                        Buffer::$dtype(out)
                    }
                )*
                _ => {
                    return Err(Error::UnsupportedDType {
                        op: stringify!($name),
                        dtype: lhs.dtype(),
                    })
                }
            };

            Ok((out, Layout::from_shape(&shape)))
        }
    };
}

declare_binary_op!(add, [BF16, F16, F32, F64, U8, U32, I8, I32, I64]);
declare_binary_op!(mul, [BF16, F16, F32, F64, U8, U32, I8, I32, I64]);
