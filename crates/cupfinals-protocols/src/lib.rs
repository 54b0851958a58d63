//! # cupfinals Protocols
//!
//! Data model and the traits that sit between the scraping flow and the
//! outside world, plus the bounded poll used by every wait. No browser or
//! network code lives here.
//!
//! ## Core Traits
//!
//! - [`PageDriver`] - Browser page the flow reads from and renders into
//! - [`Confirmer`] - Asks a human what to do with one extracted record
//! - [`ResultSink`] - Persists the confirmed batch

pub mod driver;
pub mod error;
pub mod sink;
pub mod types;
pub mod wait;

pub use driver::{Confirmer, PageDriver};
pub use error::{DriverError, ExtractError};
pub use sink::ResultSink;
pub use types::{FinalResult, RowField, SessionBatch, UserChoice};
pub use wait::{PollOutcome, poll_until};
