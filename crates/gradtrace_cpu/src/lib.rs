pub mod arith;
pub mod ops;
mod utils;

pub use arith::Arith;
