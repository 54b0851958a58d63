//! [`PageDriver`] backed by a Chrome tab.

use std::time::Duration;

use async_trait::async_trait;
use cupfinals_protocols::{DriverError, PageDriver};
use tracing::debug;

use crate::manager::{BrowserError, BrowserManager, BrowserManagerConfig};

/// Interval between visibility probes of an element.
const DEFAULT_ELEMENT_POLL: Duration = Duration::from_millis(100);

/// A single Chrome tab driven over CDP.
pub struct ChromeDriver {
    manager: BrowserManager,
    element_poll: Duration,
}

impl ChromeDriver {
    pub fn new(config: BrowserManagerConfig) -> Self {
        Self {
            manager: BrowserManager::new(config),
            element_poll: DEFAULT_ELEMENT_POLL,
        }
    }

    pub fn with_element_poll(mut self, interval: Duration) -> Self {
        self.element_poll = interval;
        self
    }

    /// Connect (launching Chrome if needed) and open the working tab.
    pub async fn start(&self) -> Result<(), BrowserError> {
        self.manager.page().await.map(|_| ())
    }

    pub fn manager(&self) -> &BrowserManager {
        &self.manager
    }
}

#[async_trait]
impl PageDriver for ChromeDriver {
    async fn navigate(&self, url: &str) -> Result<(), DriverError> {
        let page = self.manager.page().await?;
        page.navigate(url).await.map_err(BrowserError::from)?;
        Ok(())
    }

    async fn current_url(&self) -> Result<String, DriverError> {
        let page = self.manager.page().await?;
        Ok(page.get_url().await.map_err(BrowserError::from)?)
    }

    async fn title(&self) -> Result<String, DriverError> {
        let page = self.manager.page().await?;
        Ok(page.get_title().await.map_err(BrowserError::from)?)
    }

    async fn wait_visible(&self, xpath: &str, timeout: Duration) -> Result<(), DriverError> {
        self.visible_text(xpath, timeout).await.map(|_| ())
    }

    async fn visible_text(&self, xpath: &str, timeout: Duration) -> Result<String, DriverError> {
        let page = self.manager.page().await?;
        debug!("Waiting up to {:?} for {}", timeout, xpath);
        Ok(page
            .wait_for_visible_text(xpath, timeout, self.element_poll)
            .await
            .map_err(BrowserError::from)?)
    }

    async fn quit(&self) -> Result<(), DriverError> {
        Ok(self.manager.shutdown().await?)
    }
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod tests;
