use crate::dtype::DType;
use half::{bf16, f16};
use std::fmt;

macro_rules! numeric_variants {
    ($($variant:ident => $type:ty),* $(,)?) => {
        /// A single value of any supported dtype.
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub enum Scalar {
            BOOL(bool),
            $($variant($type),)*
        }

        impl Scalar {
            #[inline]
            pub fn new<T: Into<Self>>(value: T) -> Self {
                value.into()
            }

            #[inline]
            pub fn dtype(&self) -> DType {
                match self {
                    Self::BOOL(_) => DType::BOOL,
                    $(Self::$variant(_) => DType::$variant,)*
                }
            }

            #[inline]
            pub fn as_f64_any(&self) -> f64 {
                match *self {
                    Self::BOOL(x) => if x { 1.0 } else { 0.0 },
                    $(Self::$variant(x) => numeric_variants!(@as_f64 $variant, x),)*
                }
            }

            #[inline]
            pub fn as_bool(&self) -> bool {
                match *self {
                    Self::BOOL(x) => x,
                    _ => self.as_f64_any() != 0.0,
                }
            }

            $(
                paste::paste! {
                    /// Converts to this dtype, saturating out-of-range integers.
                    #[inline]
                    pub fn [<as_ $variant:lower>](&self) -> $type {
                        match *self {
                            Self::$variant(x) => x,
                            _ => numeric_variants!(@convert $variant => self.as_f64_any()),
                        }
                    }
                }
            )*

            /// Re-tags this value as `dtype`.
            pub fn to_dtype(self, dtype: DType) -> Self {
                match dtype {
                    DType::BOOL => Self::BOOL(self.as_bool()),
                    $(DType::$variant => paste::paste! { Self::$variant(self.[<as_ $variant:lower>]()) },)*
                }
            }
        }

        impl From<bool> for Scalar {
            #[inline]
            fn from(x: bool) -> Self {
                Self::BOOL(x)
            }
        }

        $(
            impl From<$type> for Scalar {
                #[inline]
                fn from(x: $type) -> Self {
                    Self::$variant(x)
                }
            }
        )*

        impl fmt::Display for Scalar {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    Self::BOOL(x) => write!(f, "{}", x),
                    $(Self::$variant(x) => write!(f, "{}", x),)*
                }
            }
        }
    };

    (@as_f64 BF16, $x:ident) => { f64::from($x) };
    (@as_f64 F16, $x:ident) => { f64::from($x) };
    (@as_f64 F64, $x:ident) => { $x };
    (@as_f64 I64, $x:ident) => { $x as f64 };
    (@as_f64 $other:ident, $x:ident) => { f64::from($x) };

    (@convert BF16 => $val:expr) => { bf16::from_f64($val) };
    (@convert F16 => $val:expr) => { f16::from_f64($val) };
    (@convert F32 => $val:expr) => { $val as f32 };
    (@convert F64 => $val:expr) => { $val };
    (@convert U8 => $val:expr) => { $val.clamp(0.0, u8::MAX as f64) as u8 };
    (@convert U32 => $val:expr) => { $val.clamp(0.0, u32::MAX as f64) as u32 };
    (@convert I8 => $val:expr) => { $val.clamp(i8::MIN as f64, i8::MAX as f64) as i8 };
    (@convert I32 => $val:expr) => { $val.clamp(i32::MIN as f64, i32::MAX as f64) as i32 };
    (@convert I64 => $val:expr) => { $val.clamp(i64::MIN as f64, i64::MAX as f64) as i64 };
}

numeric_variants! {
    BF16 => bf16,
    F16  => f16,
    F32  => f32,
    F64  => f64,
    U8   => u8,
    U32  => u32,
    I8   => i8,
    I32  => i32,
    I64  => i64,
}
