use super::Buffer;
use crate::{dtype::DType, scalar::Scalar};

/// A Rust type that is the element type of exactly one [`DType`].
pub trait Element: Copy + Default + Send + Sync + 'static + Into<Scalar> {
    const DTYPE: DType;

    fn from_scalar(value: Scalar) -> Self;
    fn into_buffer(data: Vec<Self>) -> Buffer;
    fn slice(buffer: &Buffer) -> Option<&[Self]>;
}
