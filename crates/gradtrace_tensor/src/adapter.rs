use gradtrace_core::{
    buffer::Element,
    dtype::DType,
    error::{Error, Result},
};
use half::{bf16, f16};

/// Host data that can become the value of a tensor: a scalar, or rectangular
/// nesting of `Vec`s, slices and arrays around one.
pub trait TensorAdapter: Sized {
    type Elem: Element;

    /// Row-major elements.
    fn to_flatten_vec(self) -> Result<Vec<Self::Elem>>;

    /// The shape of the nesting; fails when sibling rows differ in length.
    fn get_shape(&self) -> Result<Vec<usize>>;

    fn dtype(&self) -> DType {
        Self::Elem::DTYPE
    }
}

macro_rules! impl_scalar_adapter {
    ($($t:ty),* $(,)?) => {
        $(
            impl TensorAdapter for $t {
                type Elem = $t;

                fn to_flatten_vec(self) -> Result<Vec<$t>> {
                    Ok(vec![self])
                }

                fn get_shape(&self) -> Result<Vec<usize>> {
                    Ok(vec![])
                }
            }
        )*
    };
}

impl_scalar_adapter!(bf16, f16, f32, f64, bool, u8, u32, i8, i32, i64);

fn nested_shape<'a, A, I>(len: usize, mut items: I) -> Result<Vec<usize>>
where
    A: TensorAdapter + 'a,
    I: Iterator<Item = &'a A>,
{
    let mut shape = vec![len];
    let Some(first) = items.next() else {
        return Ok(shape);
    };

    let inner = first.get_shape()?;
    for (index, item) in items.enumerate() {
        let item_shape = item.get_shape()?;
        if item_shape != inner {
            return Err(Error::UnsupportedOperand {
                reason: format!(
                    "ragged data: element {} has shape {:?}, expected {:?}",
                    index + 1,
                    item_shape,
                    inner
                ),
            });
        }
    }
    shape.extend(inner);

    Ok(shape)
}

impl<A: TensorAdapter> TensorAdapter for Vec<A> {
    type Elem = A::Elem;

    fn to_flatten_vec(self) -> Result<Vec<A::Elem>> {
        let mut flat = Vec::with_capacity(self.len());
        for item in self {
            flat.extend(item.to_flatten_vec()?);
        }
        Ok(flat)
    }

    fn get_shape(&self) -> Result<Vec<usize>> {
        nested_shape(self.len(), self.iter())
    }
}

impl<A: TensorAdapter + Clone, const N: usize> TensorAdapter for [A; N] {
    type Elem = A::Elem;

    fn to_flatten_vec(self) -> Result<Vec<A::Elem>> {
        Vec::from(self).to_flatten_vec()
    }

    fn get_shape(&self) -> Result<Vec<usize>> {
        nested_shape(N, self.iter())
    }
}

impl<A: TensorAdapter + Clone> TensorAdapter for &[A] {
    type Elem = A::Elem;

    fn to_flatten_vec(self) -> Result<Vec<A::Elem>> {
        self.to_vec().to_flatten_vec()
    }

    fn get_shape(&self) -> Result<Vec<usize>> {
        nested_shape(self.len(), self.iter())
    }
}
