//! # cupfinals Core
//!
//! The scraping flow: locate and extract one table row at a time, ask the
//! user about each record on a local confirmation page, and flush the
//! approved batch to a [`ResultSink`](cupfinals_protocols::ResultSink).

pub mod confirm;
pub mod extractor;
pub mod locators;
pub mod orchestrator;

#[cfg(test)]
pub(crate) mod test_support;

pub use confirm::{ConfirmError, ConfirmationBridge};
pub use extractor::{Extractor, parse_year};
pub use locators::Locators;
pub use orchestrator::{FlowState, Orchestrator, RunReport};
