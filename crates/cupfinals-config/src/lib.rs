//! # cupfinals Config
//!
//! Configuration for the cupfinals flow. Everything has a compiled-in
//! default; the only files read are the bundled sheet properties and the
//! service-account key in the resources directory.

mod error;
mod loader;
mod schema;
mod validator;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::*;
pub use validator::{ConfigValidator, ValidationError, ValidationResult, ValidationWarning};
