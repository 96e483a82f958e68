#![allow(dead_code)]

use gradtrace_core::{dtype::DType, error::Result};
use gradtrace_tensor::{Tensor, TensorAdapter};
use tracing_subscriber::filter::LevelFilter;

// Helper functions
pub fn setup_tensor<T: TensorAdapter>(data: T, dtype: DType) -> Result<Tensor> {
    Tensor::try_new_with_dtype(data, dtype)
}

pub fn setup_tensor_with_shape<T: TensorAdapter>(data: T, dtype: DType, shape: &[usize]) -> Result<Tensor> {
    let tensor = Tensor::try_new_with_dtype(data, dtype)?;
    Tensor::from_buffer(tensor.buffer().clone(), shape)
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(LevelFilter::TRACE)
        .try_init();
}

#[macro_export]
macro_rules! test_ops {
    ([$($op:ident),*]) => {
        $(
            mod $op {
                use super::*;
                use paste::paste;

                paste! {
                    #[test]
                    fn bf16() -> Result<()> {
                        test_functions::[<$op _test>](DType::BF16)
                    }

                    #[test]
                    fn f16() -> Result<()> {
                        test_functions::[<$op _test>](DType::F16)
                    }

                    #[test]
                    fn f32() -> Result<()> {
                        test_functions::[<$op _test>](DType::F32)
                    }

                    #[test]
                    fn f64() -> Result<()> {
                        test_functions::[<$op _test>](DType::F64)
                    }

                    #[test]
                    fn u8() -> Result<()> {
                        test_functions::[<$op _test>](DType::U8)
                    }

                    #[test]
                    fn u32() -> Result<()> {
                        test_functions::[<$op _test>](DType::U32)
                    }

                    #[test]
                    fn i8() -> Result<()> {
                        test_functions::[<$op _test>](DType::I8)
                    }

                    #[test]
                    fn i32() -> Result<()> {
                        test_functions::[<$op _test>](DType::I32)
                    }

                    #[test]
                    fn i64() -> Result<()> {
                        test_functions::[<$op _test>](DType::I64)
                    }
                }
            }
        )*
    };
}
