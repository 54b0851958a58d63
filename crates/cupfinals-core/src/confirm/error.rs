//! Confirmation step errors. None of them fail the run; the bridge maps each to skip.

use std::path::PathBuf;

use cupfinals_protocols::DriverError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfirmError {
    #[error("Could not write confirmation page: {0}")]
    Io(#[from] std::io::Error),

    #[error("Confirmation page path is not a valid file URL: {}", .0.display())]
    InvalidPath(PathBuf),

    #[error("Browser failed during confirmation: {0}")]
    Driver(#[from] DriverError),
}
