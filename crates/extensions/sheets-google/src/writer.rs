//! Appends confirmed finals to the configured tab.

use async_trait::async_trait;
use cupfinals_config::SheetTarget;
use cupfinals_protocols::{FinalResult, ResultSink};
use serde_json::{Value, json};
use tracing::{error, info};

use crate::client::SheetsClient;
use crate::error::SheetsError;
use crate::types::ValueRange;

/// Header row written to an empty sheet.
pub const HEADER: [&str; 4] = ["Year", "Winner", "Score", "Runner-Up"];

/// [`ResultSink`] writing to a Google Sheets tab.
pub struct SheetWriter {
    client: SheetsClient,
    target: SheetTarget,
}

impl SheetWriter {
    pub fn new(client: SheetsClient, target: SheetTarget) -> Self {
        Self { client, target }
    }

    pub fn target(&self) -> &SheetTarget {
        &self.target
    }

    /// Append `results` in order, preceded by [`HEADER`] when cell A1's row is empty.
    ///
    /// Returns the number of rows written, header included. An empty slice
    /// writes nothing and makes no request.
    pub async fn append(&self, results: &[FinalResult]) -> Result<usize, SheetsError> {
        if results.is_empty() {
            return Ok(0);
        }

        let spreadsheet_id = self.target.resolved_id()?;
        let sheet = &self.target.sheet_name;

        let first_row = self
            .client
            .get_values(spreadsheet_id, &format!("{sheet}!A1"))
            .await?;

        let mut rows = Vec::with_capacity(results.len() + 1);
        if first_row.first_row_empty() {
            info!("Sheet '{}' is empty; writing header row", sheet);
            rows.push(header_row());
        }
        rows.extend(results.iter().map(result_row));

        let count = rows.len();
        let response = self
            .client
            .append_values(spreadsheet_id, &format!("{sheet}!A:D"), ValueRange::rows(rows))
            .await?;

        if let Some(range) = response.updates.and_then(|u| u.updated_range) {
            info!("Updated range {}", range);
        }
        Ok(count)
    }
}

fn header_row() -> Vec<Value> {
    HEADER.iter().map(|h| json!(h)).collect()
}

/// Canonical column order: year (as a number), winner, score, runner-up.
fn result_row(result: &FinalResult) -> Vec<Value> {
    vec![
        json!(result.year()),
        json!(result.winner()),
        json!(result.score()),
        json!(result.runner_up()),
    ]
}

#[async_trait]
impl ResultSink for SheetWriter {
    async fn append_results(&self, results: &[FinalResult]) -> bool {
        match self.append(results).await {
            Ok(0) => {
                info!("No results to append");
                true
            }
            Ok(rows) => {
                info!(
                    "Appended {} result(s) to '{}' ({} row(s) written)",
                    results.len(),
                    self.target.sheet_name,
                    rows
                );
                true
            }
            Err(e) => {
                error!("Failed to append {} result(s) to Google Sheets: {}", results.len(), e);
                false
            }
        }
    }
}

#[cfg(test)]
#[path = "writer_tests.rs"]
mod tests;
