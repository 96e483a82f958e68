//! `std::ops` sugar over [`Tensor::try_add`] and [`Tensor::try_mul`].
//!
//! # Panics
//!
//! The operators panic when the underlying `try_*` call fails, e.g. when the
//! operand shapes do not broadcast. Call `try_add`/`try_mul` to handle that case.

use crate::{coercion::IntoTensor, Tensor};
use gradtrace_core::error::Result;
use half::{bf16, f16};
use std::ops::{Add, Mul};

#[track_caller]
fn expect_op(result: Result<Tensor>, op: &str) -> Tensor {
    match result {
        Ok(tensor) => tensor,
        Err(e) => panic!("failed to {} tensors: {}", op, e),
    }
}

macro_rules! impl_operator {
    ($trait:ident, $method:ident, $try_method:ident, [$($t:ty),* $(,)?]) => {
        impl $trait<&Tensor> for &Tensor {
            type Output = Tensor;

            fn $method(self, rhs: &Tensor) -> Tensor {
                expect_op(self.$try_method(rhs), stringify!($method))
            }
        }

        impl $trait<Tensor> for &Tensor {
            type Output = Tensor;

            fn $method(self, rhs: Tensor) -> Tensor {
                expect_op(self.$try_method(rhs), stringify!($method))
            }
        }

        impl $trait<&Tensor> for Tensor {
            type Output = Tensor;

            fn $method(self, rhs: &Tensor) -> Tensor {
                expect_op(self.$try_method(rhs), stringify!($method))
            }
        }

        impl $trait<Tensor> for Tensor {
            type Output = Tensor;

            fn $method(self, rhs: Tensor) -> Tensor {
                expect_op(self.$try_method(rhs), stringify!($method))
            }
        }

        $(
            impl $trait<$t> for &Tensor {
                type Output = Tensor;

                fn $method(self, rhs: $t) -> Tensor {
                    expect_op(self.$try_method(rhs), stringify!($method))
                }
            }

            impl $trait<$t> for Tensor {
                type Output = Tensor;

                fn $method(self, rhs: $t) -> Tensor {
                    expect_op(self.$try_method(rhs), stringify!($method))
                }
            }

            impl $trait<&Tensor> for $t {
                type Output = Tensor;

                fn $method(self, rhs: &Tensor) -> Tensor {
                    expect_op(self.into_tensor().and_then(|lhs| lhs.$try_method(rhs)), stringify!($method))
                }
            }

            impl $trait<Tensor> for $t {
                type Output = Tensor;

                fn $method(self, rhs: Tensor) -> Tensor {
                    expect_op(self.into_tensor().and_then(|lhs| lhs.$try_method(rhs)), stringify!($method))
                }
            }
        )*
    };
}

impl_operator!(Add, add, try_add, [bf16, f16, f32, f64, u8, u32, i8, i32, i64]);
impl_operator!(Mul, mul, try_mul, [bf16, f16, f32, f64, u8, u32, i8, i32, i64]);
