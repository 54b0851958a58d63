//! Sheets v4 values API client.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::auth::TokenSource;
use crate::error::SheetsError;
use crate::types::{ApiErrorBody, AppendValuesResponse, ValueRange};

pub const SHEETS_BASE_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Minimal client for the `spreadsheets.values` resource.
pub struct SheetsClient {
    http: Client,
    base_url: Url,
    tokens: Arc<dyn TokenSource>,
}

impl SheetsClient {
    pub fn new(tokens: Arc<dyn TokenSource>) -> Result<Self, SheetsError> {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(60))
            .build()?;
        let base_url = Url::parse(SHEETS_BASE_URL)
            .map_err(|e| SheetsError::InvalidResponse(e.to_string()))?;
        Ok(Self {
            http,
            base_url,
            tokens,
        })
    }

    /// Point the client at another API root, e.g. a local mock server.
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// `GET {base}/{id}/values/{range}`.
    pub async fn get_values(
        &self,
        spreadsheet_id: &str,
        range: &str,
    ) -> Result<ValueRange, SheetsError> {
        let url = self.values_url(spreadsheet_id, range)?;
        debug!("Sheets get values: {}", url);

        let token = self.tokens.access_token().await?;
        let response = self.http.get(url).bearer_auth(token).send().await?;
        parse_response(response).await
    }

    /// `POST {base}/{id}/values/{range}:append` with user-entered rows inserted below the table.
    pub async fn append_values(
        &self,
        spreadsheet_id: &str,
        range: &str,
        rows: ValueRange,
    ) -> Result<AppendValuesResponse, SheetsError> {
        let mut url = self.values_url(spreadsheet_id, &format!("{range}:append"))?;
        url.query_pairs_mut()
            .append_pair("valueInputOption", "USER_ENTERED")
            .append_pair("insertDataOption", "INSERT_ROWS");
        debug!("Sheets append {} row(s): {}", rows.values.len(), url);

        let token = self.tokens.access_token().await?;
        let response = self
            .http
            .post(url)
            .bearer_auth(token)
            .json(&rows)
            .send()
            .await?;
        parse_response(response).await
    }

    fn values_url(&self, spreadsheet_id: &str, range: &str) -> Result<Url, SheetsError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                SheetsError::InvalidResponse(format!("{} cannot be a base URL", self.base_url))
            })?
            .pop_if_empty()
            .push(spreadsheet_id)
            .push("values")
            .push(range);
        Ok(url)
    }
}

async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, SheetsError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let message = match serde_json::from_str::<ApiErrorBody>(&body) {
            Ok(e) => match e.error.status {
                Some(code) => format!("{} ({})", e.error.message, code),
                None => e.error.message,
            },
            Err(_) => body,
        };
        return Err(SheetsError::Api {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_str(&body)
        .map_err(|e| SheetsError::InvalidResponse(format!("Failed to parse response: {}", e)))
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
