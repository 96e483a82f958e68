use crate::dtype::DType;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Two operand shapes cannot be broadcast together.
    IncompatibleShape {
        lhs: Vec<usize>,
        rhs: Vec<usize>,
    },
    InvalidShape {
        message: String,
    },
    /// Data that cannot be lifted into a tensor.
    UnsupportedOperand {
        reason: String,
    },
    UnsupportedDType {
        op: &'static str,
        dtype: DType,
    },
    DTypeMismatch {
        expected: DType,
        got: DType,
    },
    IndexOutOfBounds {
        index: usize,
        size: usize,
    },
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompatibleShape { lhs, rhs } => {
                write!(f, "Incompatible shape: cannot broadcast {:?} with {:?}", lhs, rhs)
            }
            Self::InvalidShape { message } => write!(f, "Invalid shape: {}", message),
            Self::UnsupportedOperand { reason } => write!(f, "Unsupported operand: {}", reason),
            Self::UnsupportedDType { op, dtype } => {
                write!(f, "Unsupported data type: {} is not defined for {}", op, dtype)
            }
            Self::DTypeMismatch { expected, got } => {
                write!(f, "DType mismatch: expected {}, got {}", expected, got)
            }
            Self::IndexOutOfBounds { index, size } => {
                write!(f, "Index out of bounds: index {} is out of bounds for size {}", index, size)
            }
            Self::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
