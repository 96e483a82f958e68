pub mod binary;
pub mod reduction;
