//! Chrome process and connection manager.
//!
//! Reuses a Chrome already listening on the debug port, otherwise launches
//! one with a dedicated profile and shuts it down again on exit.

mod manager_core;
mod manager_types;

pub use manager_core::BrowserManager;
pub use manager_types::{BrowserError, BrowserManagerConfig};

#[cfg(test)]
#[path = "manager_tests.rs"]
mod tests;
