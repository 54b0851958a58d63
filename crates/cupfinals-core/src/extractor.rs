//! Row extraction from the finals table.

use std::time::Duration;

use cupfinals_config::ScrapeConfig;
use cupfinals_protocols::{DriverError, ExtractError, FinalResult, PageDriver, RowField};
use tracing::{debug, info};

use crate::locators::Locators;

/// Reads one table row at a time into a [`FinalResult`].
#[derive(Debug, Clone)]
pub struct Extractor {
    locators: Locators,
    source_url: String,
    element_timeout: Duration,
}

impl Extractor {
    pub fn new(config: &ScrapeConfig) -> Self {
        Self {
            locators: Locators::default(),
            source_url: config.source_url.clone(),
            element_timeout: config.element_timeout(),
        }
    }

    pub fn with_locators(mut self, locators: Locators) -> Self {
        self.locators = locators;
        self
    }

    pub fn locators(&self) -> &Locators {
        &self.locators
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// Navigate back to the source page if the browser has left it.
    pub async fn ensure_on_source<D>(&self, driver: &D) -> Result<(), DriverError>
    where
        D: PageDriver + ?Sized,
    {
        let current = driver.current_url().await?;
        if current.starts_with(&self.source_url) {
            return Ok(());
        }

        info!(
            "Not on the source page (current: {}). Navigating back to {}",
            current, self.source_url
        );
        driver.navigate(&self.source_url).await
    }

    /// Extract the record at 1-based `row` from the currently loaded page.
    ///
    /// Fields are read in table order and reading stops at the first failure.
    pub async fn extract_row<D>(&self, driver: &D, row: u32) -> Result<FinalResult, ExtractError>
    where
        D: PageDriver + ?Sized,
    {
        let year_text = self.read_field(driver, RowField::Year, row).await?;
        let winner = self.read_field(driver, RowField::Winner, row).await?;
        let score = self
            .read_field(driver, RowField::Score, row)
            .await?
            .replace("\r\n", " ")
            .replace('\n', " ");
        let runner_up = self.read_field(driver, RowField::RunnerUp, row).await?;

        if [&year_text, &winner, &score, &runner_up]
            .iter()
            .any(|text| text.is_empty())
        {
            return Err(ExtractError::EmptyField {
                row,
                year: year_text,
                winner,
                score,
                runner_up,
            });
        }

        let year = parse_year(&year_text).ok_or(ExtractError::InvalidYear {
            row,
            text: year_text.clone(),
        })?;

        let result = FinalResult::new(year, winner, score, runner_up);
        debug!("Extracted row {}: {}", row, result);
        Ok(result)
    }

    async fn read_field<D>(&self, driver: &D, field: RowField, row: u32) -> Result<String, ExtractError>
    where
        D: PageDriver + ?Sized,
    {
        let xpath = self.locators.xpath(field, row);
        driver
            .visible_text(&xpath, self.element_timeout)
            .await
            .map(|text| text.trim().to_string())
            .map_err(|e| ExtractError::from_driver(row, field, e))
    }
}

/// Parse a year cell by keeping only its ASCII digits.
///
/// Footnote markers and whitespace are dropped, so `"19 30"` reads as 1930.
/// Text without digits, or too many digits for an `i32`, yields `None`.
pub fn parse_year(text: &str) -> Option<i32> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
#[path = "extractor_tests.rs"]
mod tests;
