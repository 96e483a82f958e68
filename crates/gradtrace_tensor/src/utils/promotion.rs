use gradtrace_core::{buffer::Buffer, dtype::DType};
use std::borrow::Cow;

use crate::Tensor;

/// The dtype both operands of a binary op are converted to before the kernel runs.
///
/// `bool` takes part as `u8`, so two boolean operands produce a `u8` result.
pub fn get_promoted_dtype(dtype1: DType, dtype2: DType) -> DType {
    let dtype1 = if dtype1 == DType::BOOL { DType::U8 } else { dtype1 };
    let dtype2 = if dtype2 == DType::BOOL { DType::U8 } else { dtype2 };

    match (dtype1, dtype2) {
        (dtype1, dtype2) if dtype1 == dtype2 => dtype1,

        (_, DType::F64) | (DType::F64, _) => DType::F64,
        (_, DType::F32) | (DType::F32, _) => DType::F32,
        (DType::BF16, DType::F16) | (DType::F16, DType::BF16) => DType::F32,
        (_, DType::F16) | (DType::F16, _) => DType::F16,
        (_, DType::BF16) | (DType::BF16, _) => DType::BF16,

        (_, DType::I64) | (DType::I64, _) => DType::I64,
        (_, DType::I32) | (DType::I32, _) => DType::I32,
        (_, DType::I8) | (DType::I8, _) => DType::I8,
        (_, DType::U32) | (DType::U32, _) => DType::I64,
        (_, DType::U8) | (DType::U8, _) => DType::I32,
        _ => dtype1,
    }
}

/// The forward value of `src` as `target_dtype`, borrowed when no conversion is needed.
pub(crate) fn promote_buffer(src: &Tensor, target_dtype: DType) -> Cow<'_, Buffer> {
    if src.dtype() == target_dtype {
        Cow::Borrowed(src.buffer())
    } else {
        Cow::Owned(src.buffer().to_dtype(target_dtype))
    }
}
