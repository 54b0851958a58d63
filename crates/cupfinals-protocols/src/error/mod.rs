//! Error types for the cupfinals protocol layer.

mod driver;
mod extract;

pub use driver::*;
pub use extract::*;
