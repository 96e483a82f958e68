use half::{bf16, f16};

/// Element arithmetic used by the kernels. Floats use the plain operators;
/// integers saturate at their bounds instead of overflowing.
pub trait Arith: Copy + Send + Sync {
    fn arith_add(self, rhs: Self) -> Self;
    fn arith_mul(self, rhs: Self) -> Self;
}

macro_rules! impl_float_arith {
    ($($t:ty),*) => {
        $(
            impl Arith for $t {
                #[inline(always)]
                fn arith_add(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline(always)]
                fn arith_mul(self, rhs: Self) -> Self {
                    self * rhs
                }
            }
        )*
    };
}

macro_rules! impl_int_arith {
    ($($t:ty),*) => {
        $(
            impl Arith for $t {
                #[inline(always)]
                fn arith_add(self, rhs: Self) -> Self {
                    self.saturating_add(rhs)
                }

                #[inline(always)]
                fn arith_mul(self, rhs: Self) -> Self {
                    self.saturating_mul(rhs)
                }
            }
        )*
    };
}

impl_float_arith!(bf16, f16, f32, f64);
impl_int_arith!(u8, u32, i8, i32, i64);
