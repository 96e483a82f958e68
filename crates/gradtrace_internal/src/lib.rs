pub mod prelude;

pub use gradtrace_core as core;
pub use gradtrace_tensor as tensor;
