mod element;

pub use element::Element;

use crate::{
    dtype::DType,
    error::{Error, Result},
    scalar::Scalar,
};
use half::{bf16, f16};

macro_rules! buffer_variants {
    ($($variant:ident => $type:ty),* $(,)?) => {
        /// Contiguous host storage, one variant per dtype.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Buffer {
            $($variant(Vec<$type>),)*
        }

        impl Buffer {
            pub fn dtype(&self) -> DType {
                match self {
                    $(Self::$variant(_) => DType::$variant,)*
                }
            }

            pub fn len(&self) -> usize {
                match self {
                    $(Self::$variant(v) => v.len(),)*
                }
            }

            /// `size` copies of `value` converted to `dtype`.
            pub fn filled(size: usize, dtype: DType, value: Scalar) -> Self {
                match value.to_dtype(dtype) {
                    $(Scalar::$variant(x) => Self::$variant(vec![x; size]),)*
                }
            }

            pub fn read_scalar(&self, index: usize) -> Result<Scalar> {
                let size = self.len();
                let value = match self {
                    $(Self::$variant(v) => v.get(index).map(|&x| Scalar::$variant(x)),)*
                };
                value.ok_or(Error::IndexOutOfBounds { index, size })
            }

            pub fn scalars(&self) -> Box<dyn Iterator<Item = Scalar> + '_> {
                match self {
                    $(Self::$variant(v) => Box::new(v.iter().map(|&x| Scalar::$variant(x))),)*
                }
            }

            /// Elementwise conversion to `dtype`; a plain clone when it already matches.
            pub fn to_dtype(&self, dtype: DType) -> Self {
                if self.dtype() == dtype {
                    return self.clone();
                }

                match dtype {
                    $(DType::$variant => paste::paste! {
                        Self::$variant(self.scalars().map(|s| s.[<as_ $variant:lower>]()).collect())
                    },)*
                }
            }
        }

        $(
            impl Element for $type {
                const DTYPE: DType = DType::$variant;

                fn from_scalar(value: Scalar) -> Self {
                    paste::paste! { value.[<as_ $variant:lower>]() }
                }

                fn into_buffer(data: Vec<Self>) -> Buffer {
                    Buffer::$variant(data)
                }

                fn slice(buffer: &Buffer) -> Option<&[Self]> {
                    match buffer {
                        Buffer::$variant(v) => Some(v.as_slice()),
                        _ => None,
                    }
                }
            }
        )*
    };
}

buffer_variants! {
    BF16 => bf16,
    F16  => f16,
    F32  => f32,
    F64  => f64,
    BOOL => bool,
    U8   => u8,
    U32  => u32,
    I8   => i8,
    I32  => i32,
    I64  => i64,
}

impl Buffer {
    pub fn from_vec<T: Element>(data: Vec<T>) -> Self {
        T::into_buffer(data)
    }

    pub fn zeros(size: usize, dtype: DType) -> Self {
        Self::filled(size, dtype, Scalar::U8(0))
    }

    pub fn ones(size: usize, dtype: DType) -> Self {
        Self::filled(size, dtype, Scalar::U8(1))
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_slice<T: Element>(&self) -> Result<&[T]> {
        T::slice(self).ok_or(Error::DTypeMismatch {
            expected: T::DTYPE,
            got: self.dtype(),
        })
    }

    /// Copies the elements out as `T`, converting when the dtype differs.
    pub fn to_vec<T: Element>(&self) -> Vec<T> {
        match T::slice(self) {
            Some(values) => values.to_vec(),
            None => self.scalars().map(T::from_scalar).collect(),
        }
    }
}
