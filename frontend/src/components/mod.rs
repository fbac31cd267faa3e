pub mod brand;
pub mod common;
pub mod error;
