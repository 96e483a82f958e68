use crate::{adapter::TensorAdapter, Tensor};
use gradtrace_core::{
    buffer::Buffer,
    dtype::{get_default_dtype, DType},
    error::{Error, Result},
    layout::Layout,
    scalar::Scalar,
};

/// ## Constructors
///
/// Everything built here is a leaf: it has no parents and its gradient starts
/// at zeros of the same shape and dtype.
///
/// `new` and `new_with_dtype` panic on malformed data; use the `try_*`
/// counterparts to get the error instead.
impl Tensor {
    /// Runs [`try_new`](Self::try_new) and panics on failure.
    ///
    /// # Examples
    /// ```
    /// use gradtrace_tensor::Tensor;
    ///
    /// let tensor = Tensor::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    /// assert_eq!(tensor.shape(), &[2, 2]);
    /// ```
    ///
    /// # Panics
    ///
    /// * When the data is ragged
    pub fn new<T>(data: T) -> Self
    where
        T: TensorAdapter,
    {
        Self::try_new(data).expect("failed to create tensor")
    }

    /// Runs [`try_new_with_dtype`](Self::try_new_with_dtype) and panics on failure.
    ///
    /// # Panics
    ///
    /// * When the data is ragged
    pub fn new_with_dtype<T>(data: T, dtype: DType) -> Self
    where
        T: TensorAdapter,
    {
        Self::try_new_with_dtype(data, dtype).expect("failed to create tensor with specified dtype")
    }

    /// Creates a leaf from host data, converted to the default dtype.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedOperand`] when nested data is ragged.
    pub fn try_new<T>(data: T) -> Result<Self>
    where
        T: TensorAdapter,
    {
        Self::try_new_with_dtype(data, get_default_dtype())
    }

    pub fn try_new_with_dtype<T>(data: T, dtype: DType) -> Result<Self>
    where
        T: TensorAdapter,
    {
        let shape = data.get_shape()?;
        let layout = Layout::from_shape(&shape);
        let buffer = Buffer::from_vec(data.to_flatten_vec()?).to_dtype(dtype);

        Ok(Self::leaf(buffer, layout))
    }

    /// Wraps an existing buffer as a leaf of the given shape.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidShape`] when `shape` does not describe `buffer.len()` elements.
    pub fn from_buffer(buffer: Buffer, shape: &[usize]) -> Result<Self> {
        let layout = Layout::from_shape(shape);
        if layout.size() != buffer.len() {
            return Err(Error::InvalidShape {
                message: format!(
                    "Shape mismatch: shape {:?} implies {} elements but buffer has {} elements",
                    shape,
                    layout.size(),
                    buffer.len()
                ),
            });
        }

        Ok(Self::leaf(buffer, layout))
    }

    pub fn zeros(shape: &[usize]) -> Self {
        Self::zeros_with_dtype(shape, get_default_dtype())
    }

    pub fn zeros_like(src: &Tensor) -> Self {
        Self::zeros_with_dtype(src.shape(), src.dtype())
    }

    pub fn zeros_with_dtype(shape: &[usize], dtype: DType) -> Self {
        Self::fill_with_dtype(shape, 0u8, dtype)
    }

    pub fn ones(shape: &[usize]) -> Self {
        Self::ones_with_dtype(shape, get_default_dtype())
    }

    pub fn ones_like(src: &Tensor) -> Self {
        Self::ones_with_dtype(src.shape(), src.dtype())
    }

    pub fn ones_with_dtype(shape: &[usize], dtype: DType) -> Self {
        Self::fill_with_dtype(shape, 1u8, dtype)
    }

    pub fn fill<T: Into<Scalar>>(shape: &[usize], value: T) -> Self {
        Self::fill_with_dtype(shape, value, get_default_dtype())
    }

    pub fn fill_like<T: Into<Scalar>>(src: &Tensor, value: T) -> Self {
        Self::fill_with_dtype(src.shape(), value, src.dtype())
    }

    pub fn fill_with_dtype<T: Into<Scalar>>(shape: &[usize], value: T, dtype: DType) -> Self {
        let layout = Layout::from_shape(shape);
        let buffer = Buffer::filled(layout.size(), dtype, value.into());

        Self::leaf(buffer, layout)
    }
}
