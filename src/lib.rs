pub mod catalog;
pub mod error;
pub mod fractals;
pub mod math;
pub mod model;
pub mod operations;

pub use error::{FractalError, Result};
