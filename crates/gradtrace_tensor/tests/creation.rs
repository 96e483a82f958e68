use gradtrace_core::{
    buffer::Buffer,
    dtype::{set_default_dtype, DType},
    error::{Error, Result},
    scalar::Scalar,
};
use gradtrace_tensor::Tensor;

#[test]
fn new() -> Result<()> {
    let x = Tensor::new(vec![vec![1.0f32, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);

    assert_eq!(x.shape(), &[2, 3]);
    assert_eq!(x.ndim(), 2);
    assert_eq!(x.size(), 6);
    assert_eq!(x.dtype(), DType::F32);
    assert!(x.is_leaf());
    assert_eq!(x.to_flatten_vec::<f32>()?, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert_eq!(x.grad().to_flatten_vec::<f32>()?, vec![0.0; 6]);
    Ok(())
}

#[test]
fn new_converts_to_default_dtype() -> Result<()> {
    let x = Tensor::new(vec![1i32, 2, 3]);
    assert_eq!(x.dtype(), DType::F32);

    set_default_dtype(DType::I64);
    let y = Tensor::new([[1.5f64, 2.5], [3.5, 4.5]]);
    assert_eq!(y.dtype(), DType::I64);
    assert_eq!(y.to_flatten_vec::<i64>()?, vec![1, 2, 3, 4]);
    Ok(())
}

#[test]
fn new_with_dtype() -> Result<()> {
    let x = Tensor::new_with_dtype(vec![1.0f32, 2.0], DType::BF16);

    assert_eq!(x.dtype(), DType::BF16);
    assert_eq!(x.grad().dtype(), DType::BF16);
    assert_eq!(x.to_flatten_vec::<f32>()?, vec![1.0, 2.0]);
    Ok(())
}

#[test]
fn from_buffer() -> Result<()> {
    let x = Tensor::from_buffer(Buffer::from_vec(vec![1u8, 2, 3, 4, 5, 6]), &[3, 2])?;

    assert_eq!(x.shape(), &[3, 2]);
    assert_eq!(x.dtype(), DType::U8);
    assert_eq!(x.layout().strides(), &[2, 1]);
    Ok(())
}

#[test]
fn zeros_and_ones() -> Result<()> {
    let z = Tensor::zeros(&[2, 2]);
    assert_eq!(z.to_flatten_vec::<f32>()?, vec![0.0; 4]);

    let o = Tensor::ones_with_dtype(&[3], DType::I8);
    assert_eq!(o.dtype(), DType::I8);
    assert_eq!(o.to_flatten_vec::<i8>()?, vec![1, 1, 1]);

    let zl = Tensor::zeros_like(&o);
    assert_eq!(zl.shape(), o.shape());
    assert_eq!(zl.dtype(), DType::I8);
    assert_ne!(zl.id(), o.id());

    let ol = Tensor::ones_like(&z);
    assert_eq!(ol.to_flatten_vec::<f32>()?, vec![1.0; 4]);
    Ok(())
}

#[test]
fn fill() -> Result<()> {
    let x = Tensor::fill(&[2], 7.5f64);
    assert_eq!(x.dtype(), DType::F32);
    assert_eq!(x.to_flatten_vec::<f32>()?, vec![7.5, 7.5]);

    let y = Tensor::fill_like(&Tensor::zeros_with_dtype(&[2, 1], DType::U32), 3u8);
    assert_eq!(y.dtype(), DType::U32);
    assert_eq!(y.to_flatten_vec::<u32>()?, vec![3, 3]);

    let z = Tensor::fill_with_dtype(&[1], true, DType::BOOL);
    assert_eq!(z.to_flatten_vec::<bool>()?, vec![true]);
    Ok(())
}

#[test]
fn item() -> Result<()> {
    let x = Tensor::new(4.0f32);
    assert_eq!(x.item()?, Scalar::F32(4.0));

    let y = Tensor::new(vec![1.0f32, 2.0]);
    assert!(matches!(y.item(), Err(Error::InvalidArgument(_))));
    Ok(())
}

#[test]
fn ids_are_unique() {
    let a = Tensor::new(1.0f32);
    let b = Tensor::new(1.0f32);

    assert_ne!(a.id(), b.id());
    assert_eq!(a.clone().id(), a.id());
}
