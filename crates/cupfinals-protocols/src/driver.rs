//! Browser page and human confirmation traits.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::DriverError;
use crate::types::{FinalResult, UserChoice};

/// A single browser page the flow navigates, reads and renders into.
///
/// Locators are XPath expressions. Waits are bounded: an element that does
/// not become visible in time yields [`DriverError::Timeout`].
#[async_trait]
pub trait PageDriver: Send + Sync {
    /// Navigate to `url` and wait for the document to load.
    async fn navigate(&self, url: &str) -> Result<(), DriverError>;

    /// Current location of the page.
    async fn current_url(&self) -> Result<String, DriverError>;

    /// Current document title.
    async fn title(&self) -> Result<String, DriverError>;

    /// Wait until the element at `xpath` is visible.
    async fn wait_visible(&self, xpath: &str, timeout: Duration) -> Result<(), DriverError>;

    /// Wait until the element at `xpath` is visible and return its rendered text.
    async fn visible_text(&self, xpath: &str, timeout: Duration) -> Result<String, DriverError>;

    /// Release the browser session. Must be safe to call more than once.
    async fn quit(&self) -> Result<(), DriverError>;
}

/// Asks a human what to do with one extracted record.
#[async_trait]
pub trait Confirmer: Send + Sync {
    /// Returns the effective choice; implementations resolve timeouts themselves.
    async fn confirm(&self, result: &FinalResult) -> UserChoice;
}
