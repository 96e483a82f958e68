use crate::{
    buffer::Buffer,
    error::{Error, Result},
    layout::Layout,
};
use gradtrace_cpu::ops::reduction;

macro_rules! declare_sum_to_shape {
    ([$($dtype:ident),* $(,)?]) => {
        /// Sums `src` over every dimension along which `target` was broadcast to reach
        /// `src_layout`'s shape. `target` must broadcast to that shape.
        pub fn sum_to_shape(src: &Buffer, src_layout: &Layout, target: &[usize]) -> Result<Buffer> {
            if !src.dtype().is_numeric() {
                return Err(Error::UnsupportedDType {
                    op: "sum_to_shape",
                    dtype: src.dtype(),
                });
            }
            if src_layout.shape() == target {
                return Ok(src.clone());
            }

            let target_layout = Layout::from_shape(target);
            let out_strides = target_layout.broadcast_strides(src_layout.shape())?;

            match src {
                $(
                    Buffer::$dtype(s) => {
                        let mut out = vec![Default::default(); target_layout.size()];
                        reduction::sum_to(src_layout.shape(), &out_strides, s, out.as_mut_slice());
                        Ok(Buffer::$dtype(out))
                    }
                )*
                _ => Err(Error::UnsupportedDType {
                    op: "sum_to_shape",
                    dtype: src.dtype(),
                }),
            }
        }
    };
}

declare_sum_to_shape!([BF16, F16, F32, F64, U8, U32, I8, I32, I64]);
