pub mod be;
pub mod buffer;
pub mod dtype;
pub mod error;
pub mod layout;
pub mod scalar;

pub use gradtrace_cpu as cpu;
