use gradtrace_core::{
    buffer::Buffer,
    dtype::DType,
    error::{Error, Result},
};
use gradtrace_tensor::{IntoTensor, Tensor};

#[test]
fn tensors_pass_through_without_new_node() -> Result<()> {
    let a = Tensor::new(vec![1.0f32, 2.0]);

    assert_eq!((&a).into_tensor()?.id(), a.id());
    assert_eq!(a.clone().into_tensor()?.id(), a.id());
    Ok(())
}

#[test]
fn plain_data_becomes_a_fresh_leaf() -> Result<()> {
    let lifted = vec![vec![1i64, 2], vec![3, 4]].into_tensor()?;

    assert!(lifted.is_leaf());
    assert_eq!(lifted.shape(), &[2, 2]);
    assert_eq!(lifted.dtype(), DType::F32);
    assert_eq!(lifted.grad().to_flatten_vec::<f32>()?, vec![0.0; 4]);

    let again = 5.0f64.into_tensor()?;
    assert_ne!(again.id(), lifted.id());
    assert_eq!(again.shape(), &[] as &[usize]);
    Ok(())
}

#[test]
fn ragged_operand_is_rejected() {
    let a = Tensor::new(vec![vec![1.0f32, 2.0], vec![3.0, 4.0]]);

    let result = a.try_add(vec![vec![1.0f32, 2.0], vec![3.0]]);
    assert!(matches!(result, Err(Error::UnsupportedOperand { .. })));

    let result = Tensor::try_new(vec![vec![vec![1u8]], vec![vec![2u8, 3]]]);
    assert!(matches!(result, Err(Error::UnsupportedOperand { .. })));
}

#[test]
fn incompatible_shapes_are_rejected() {
    let a = Tensor::new(vec![1.0f32, 2.0]);
    let b = Tensor::new(vec![1.0f32, 2.0, 3.0]);

    let result = a.try_mul(&b);
    assert_eq!(
        result.err(),
        Some(Error::IncompatibleShape {
            lhs: vec![2],
            rhs: vec![3]
        })
    );
}

#[test]
#[should_panic(expected = "failed to add tensors")]
fn operator_panics_on_incompatible_shapes() {
    let a = Tensor::new(vec![1.0f32, 2.0]);
    let b = Tensor::new(vec![1.0f32, 2.0, 3.0]);

    let _ = &a + &b;
}

#[test]
fn from_buffer_checks_length() {
    let buffer = Buffer::from_vec(vec![1.0f32, 2.0, 3.0]);

    assert!(matches!(
        Tensor::from_buffer(buffer.clone(), &[2, 2]),
        Err(Error::InvalidShape { .. })
    ));
    assert!(Tensor::from_buffer(buffer, &[3, 1]).is_ok());
}

#[test]
fn lifting_honours_default_dtype() -> Result<()> {
    gradtrace_core::dtype::set_default_dtype(DType::F64);

    let a = Tensor::new_with_dtype(vec![1.0f32, 2.0], DType::F32);
    let c = a.try_add(0.5f32)?;

    assert_eq!(c.dtype(), DType::F64);
    assert_eq!(c.to_flatten_vec::<f64>()?, vec![1.5, 2.5]);
    Ok(())
}
