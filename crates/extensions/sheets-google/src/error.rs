//! Sheets destination errors.

use cupfinals_config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetsError {
    #[error("Sheets configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid service account credentials: {0}")]
    Credentials(String),

    #[error("Authorization failed: {0}")]
    Auth(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Sheets API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for SheetsError {
    fn from(err: reqwest::Error) -> Self {
        SheetsError::Network(err.to_string())
    }
}
