//! Define-by-run reverse-mode automatic differentiation over tensors.
//!
//! ```
//! use gradtrace::prelude::*;
//!
//! let a = Tensor::new(2.0f32);
//! let b = Tensor::new(3.0f32);
//! let d = &a * &b + &a;
//! d.backward().unwrap();
//!
//! assert_eq!(a.grad().item().unwrap(), Scalar::F32(4.0));
//! assert_eq!(b.grad().item().unwrap(), Scalar::F32(2.0));
//! ```

pub use gradtrace_internal::*;
