pub use gradtrace_core::dtype::{bfloat16, bool, float16, float32, float64, half, int32, int64, int8, uint32, uint8};
pub use crate::core::{
    dtype::{get_default_dtype, set_default_dtype, DType},
    error::{Error, Result},
    scalar::Scalar,
};
pub use crate::tensor::{IntoTensor, Op, Tensor, TensorAdapter, TensorId};
pub use ::half::{bf16, f16};
