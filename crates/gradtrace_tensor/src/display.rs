use crate::Tensor;
use gradtrace_core::buffer::Buffer;
use std::fmt;

const MAX_ELEMENTS_PER_DIM: usize = 4;

fn format_elements(buffer: &Buffer) -> Vec<String> {
    if buffer.dtype().is_float() {
        buffer.scalars().map(|s| format!("{:.4}", s.as_f64_any())).collect()
    } else {
        buffer.scalars().map(|s| s.to_string()).collect()
    }
}

fn write_nested(f: &mut fmt::Formatter<'_>, data: &[String], shape: &[usize]) -> fmt::Result {
    let Some((&dim_size, inner_shape)) = shape.split_first() else {
        return match data.first() {
            Some(value) => write!(f, "{}", value),
            None => write!(f, "[]"),
        };
    };

    let sub_stride = inner_shape.iter().product::<usize>();
    let (show_start, show_end) = if dim_size <= MAX_ELEMENTS_PER_DIM * 2 {
        (dim_size, 0)
    } else {
        (MAX_ELEMENTS_PER_DIM, MAX_ELEMENTS_PER_DIM)
    };

    write!(f, "[")?;
    for (n, i) in (0..show_start).chain(dim_size - show_end..dim_size).enumerate() {
        if n > 0 {
            write!(f, ", ")?;
        }
        if show_end > 0 && n == show_start {
            write!(f, "..., ")?;
        }
        if inner_shape.is_empty() {
            write!(f, "{}", data[i])?;
        } else {
            write_nested(f, &data[i * sub_stride..(i + 1) * sub_stride], inner_shape)?;
        }
    }
    write!(f, "]")
}

struct Nested<'a> {
    buffer: &'a Buffer,
    shape: &'a [usize],
}

impl fmt::Display for Nested<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_nested(f, &format_elements(self.buffer), self.shape)
    }
}

impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            Nested {
                buffer: self.buffer(),
                shape: self.shape()
            }
        )
    }
}

impl fmt::Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grad = self.grad_buffer();
        write!(
            f,
            "Tensor(data={}, grad={}, shape={:?}, dtype={}, op={:?})",
            Nested {
                buffer: self.buffer(),
                shape: self.shape()
            },
            Nested {
                buffer: &grad,
                shape: self.shape()
            },
            self.shape(),
            self.dtype(),
            self.op_label()
        )
    }
}
