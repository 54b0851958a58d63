//! The scraping flow as an explicit state machine.
//!
//! ```text
//! NotStarted ─▶ PageVerified ─▶ Iterating ⇄ AwaitingConfirmation
//!      │                            │                │ quit
//!      ▼                            ▼                ▼
//!   Aborted                      Flushing ◀──────────┘
//!                                   │
//!                                   ▼
//!                                  Done
//! ```
//!
//! Both terminal states release the browser session.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use cupfinals_config::ScrapeConfig;
use cupfinals_protocols::{
    Confirmer, DriverError, PageDriver, ResultSink, SessionBatch, UserChoice,
};
use tracing::{debug, error, info, warn};

use crate::extractor::Extractor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowState {
    #[default]
    NotStarted,
    PageVerified,
    Iterating,
    AwaitingConfirmation,
    Flushing,
    Done,
    Aborted,
}

impl FlowState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, FlowState::Done | FlowState::Aborted)
    }
}

impl fmt::Display for FlowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// What a run did, for the summary and for callers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub state: FlowState,
    /// Row indices for which extraction was attempted.
    pub rows_processed: u32,
    /// Records shown to the user.
    pub offered: u32,
    /// Records the user chose to append.
    pub confirmed: usize,
    /// Sink result; `None` when nothing was written.
    pub write_succeeded: Option<bool>,
}

/// Drives extraction, confirmation and the final flush.
pub struct Orchestrator<D: PageDriver, C: Confirmer, S: ResultSink> {
    driver: Arc<D>,
    confirmer: C,
    sink: S,
    extractor: Extractor,
    rows: u32,
    verify_timeout: Duration,
    state: FlowState,
}

impl<D, C, S> Orchestrator<D, C, S>
where
    D: PageDriver,
    C: Confirmer,
    S: ResultSink,
{
    pub fn new(driver: Arc<D>, confirmer: C, sink: S, config: &ScrapeConfig) -> Self {
        Self {
            driver,
            confirmer,
            sink,
            extractor: Extractor::new(config),
            rows: config.rows,
            verify_timeout: config.verify_timeout(),
            state: FlowState::NotStarted,
        }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn confirmer(&self) -> &C {
        &self.confirmer
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Run the flow to a terminal state and release the browser.
    pub async fn run(&mut self) -> RunReport {
        info!("--- Starting application flow ---");
        let mut report = RunReport::default();

        if let Err(e) = self.run_flow(&mut report).await {
            error!("Fatal error in application flow: {}", e);
            self.transition(FlowState::Aborted);
        }

        info!("--- Application flow finished ---");
        info!("Closing browser session");
        if let Err(e) = self.driver.quit().await {
            warn!("Error while closing browser session: {}", e);
        }

        report.state = self.state;
        report
    }

    async fn run_flow(&mut self, report: &mut RunReport) -> Result<(), DriverError> {
        let source_url = self.extractor.source_url().to_string();
        self.driver.navigate(&source_url).await?;
        info!("Opened {}", source_url);

        let table = self.extractor.locators().table();
        if let Err(e) = self.driver.wait_visible(table, self.verify_timeout).await {
            error!(
                "Finals table did not become visible within {}s; page structure may have changed: {}",
                self.verify_timeout.as_secs(),
                e
            );
            self.transition(FlowState::Aborted);
            return Ok(());
        }
        info!("Finals table is visible");
        self.transition(FlowState::PageVerified);

        let batch = self.iterate(report).await?;

        report.confirmed = batch.len();
        if batch.is_empty() {
            info!("No results were selected for appending");
        } else {
            info!("Appending {} confirmed result(s)", batch.len());
            let ok = self.sink.append_results(batch.as_slice()).await;
            if ok {
                info!("Batch append finished");
            } else {
                error!("Batch append failed; check the log above for details");
            }
            report.write_succeeded = Some(ok);
        }
        self.transition(FlowState::Done);

        info!(
            "Summary: {} row indices processed, {} offered for confirmation, {} confirmed for append",
            report.rows_processed, report.offered, report.confirmed
        );
        Ok(())
    }

    /// Row loop. Ends in [`FlowState::Flushing`] with the confirmed batch.
    async fn iterate(&mut self, report: &mut RunReport) -> Result<SessionBatch, DriverError> {
        self.transition(FlowState::Iterating);
        let mut batch = SessionBatch::new();

        for row in 1..=self.rows {
            info!("Processing row index {}", row);
            report.rows_processed += 1;

            self.extractor.ensure_on_source(self.driver.as_ref()).await?;

            let result = match self.extractor.extract_row(self.driver.as_ref(), row).await {
                Ok(result) => result,
                Err(e) => {
                    warn!("{}. Skipping this row.", e);
                    continue;
                }
            };
            info!("Extracted: {}", result);

            report.offered += 1;
            self.transition(FlowState::AwaitingConfirmation);
            match self.confirmer.confirm(&result).await {
                UserChoice::Append => {
                    info!("Added to batch: {}", result);
                    batch.push(result);
                }
                UserChoice::Quit => {
                    info!("Quit requested; stopping extraction");
                    break;
                }
                UserChoice::Skip | UserChoice::Timeout => {
                    info!("Skipped: {}", result);
                }
            }
            self.transition(FlowState::Iterating);
        }

        self.transition(FlowState::Flushing);
        Ok(batch)
    }

    fn transition(&mut self, next: FlowState) {
        debug!("Flow state {} -> {}", self.state, next);
        self.state = next;
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
