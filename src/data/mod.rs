//! Data module: result containers
#![warn(missing_docs)]

pub mod matrix;

pub use matrix::Matrix;
