//! # cupfinals Sheets
//!
//! Appends confirmed finals to a Google Sheets tab through the Sheets v4 REST
//! API, authenticating with a service-account key.

pub mod auth;
mod client;
mod error;
pub mod types;
mod writer;

pub use auth::{ServiceAccountAuth, ServiceAccountKey, StaticToken, TokenSource};
pub use client::{SHEETS_BASE_URL, SheetsClient};
pub use error::SheetsError;
pub use writer::{HEADER, SheetWriter};
