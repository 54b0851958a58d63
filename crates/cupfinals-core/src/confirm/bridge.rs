//! Shows the confirmation page in the browser and waits for the user's choice.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use cupfinals_config::ConfirmConfig;
use cupfinals_protocols::{Confirmer, FinalResult, PageDriver, UserChoice, poll_until};
use tempfile::NamedTempFile;
use tracing::{debug, error, info, warn};
use url::Url;

use super::error::ConfirmError;
use super::page::{parse_sentinel, render_page};

pub const TEMP_FILE_PREFIX: &str = "user_choice_fifa_";
pub const TEMP_FILE_SUFFIX: &str = ".html";

/// Confirmation step backed by a temporary HTML page in the flow's browser.
pub struct ConfirmationBridge<D: PageDriver> {
    driver: Arc<D>,
    timeout: Duration,
    poll_interval: Duration,
}

impl<D: PageDriver> ConfirmationBridge<D> {
    pub fn new(driver: Arc<D>, config: &ConfirmConfig) -> Self {
        Self::with_timing(driver, config.timeout(), config.poll_interval())
    }

    pub fn with_timing(driver: Arc<D>, timeout: Duration, poll_interval: Duration) -> Self {
        Self {
            driver,
            timeout,
            poll_interval,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Present `result` and wait for a choice.
    ///
    /// Returns [`UserChoice::Timeout`] when no action is taken in time. The
    /// temporary page is removed on every path.
    pub async fn wait_for_choice(&self, result: &FinalResult) -> Result<UserChoice, ConfirmError> {
        let page = write_page(result)?;
        let outcome = self.present(page.path()).await;

        let path = page.path().to_path_buf();
        match page.close() {
            Ok(()) => debug!("Removed confirmation page {}", path.display()),
            Err(e) => warn!(
                "Could not delete temporary confirmation page {}: {}",
                path.display(),
                e
            ),
        }

        outcome
    }

    async fn present(&self, path: &Path) -> Result<UserChoice, ConfirmError> {
        let url = Url::from_file_path(path)
            .map_err(|_| ConfirmError::InvalidPath(path.to_path_buf()))?;

        self.driver.navigate(url.as_str()).await?;
        info!("Confirmation page opened at {}", url);
        info!(
            "Waiting up to {}s for a choice in the browser",
            self.timeout.as_secs()
        );

        let driver = &self.driver;
        let outcome = poll_until(self.poll_interval, self.timeout, || async move {
            let title = driver.title().await?;
            Ok::<_, ConfirmError>(parse_sentinel(&title))
        })
        .await?;

        Ok(outcome.ready().unwrap_or(UserChoice::Timeout))
    }
}

fn write_page(result: &FinalResult) -> Result<NamedTempFile, ConfirmError> {
    let mut file = tempfile::Builder::new()
        .prefix(TEMP_FILE_PREFIX)
        .suffix(TEMP_FILE_SUFFIX)
        .tempfile()?;
    file.write_all(render_page(result).as_bytes())?;
    file.flush()?;
    Ok(file)
}

#[async_trait]
impl<D: PageDriver> Confirmer for ConfirmationBridge<D> {
    async fn confirm(&self, result: &FinalResult) -> UserChoice {
        match self.wait_for_choice(result).await {
            Ok(UserChoice::Timeout) => {
                warn!(
                    "No choice made within {}s; defaulting to {}",
                    self.timeout.as_secs(),
                    UserChoice::TIMEOUT_DEFAULT
                );
                UserChoice::Timeout.effective()
            }
            Ok(choice) => {
                info!("User selected: {}", choice);
                choice
            }
            Err(e) => {
                error!("Confirmation step failed for {}: {}. Skipping.", result, e);
                UserChoice::Skip
            }
        }
    }
}

#[cfg(test)]
#[path = "bridge_tests.rs"]
mod tests;
