//! Configuration schema definitions.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Wikipedia page holding the finals table.
pub const SOURCE_URL: &str = "https://en.wikipedia.org/wiki/List_of_FIFA_World_Cup_finals";

/// Sheet used when the properties file names none.
pub const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub scrape: ScrapeConfig,

    #[serde(default)]
    pub confirm: ConfirmConfig,

    #[serde(default)]
    pub browser: BrowserConfig,

    #[serde(default)]
    pub resources: ResourcesConfig,
}

/// Source page and extraction loop settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    #[serde(default = "default_source_url")]
    pub source_url: String,

    /// Number of row indices attempted, starting at 1.
    #[serde(default = "default_rows")]
    pub rows: u32,

    #[serde(default = "default_element_timeout_secs")]
    pub element_timeout_secs: u64,

    #[serde(default = "default_verify_timeout_secs")]
    pub verify_timeout_secs: u64,

    #[serde(default = "default_element_poll_ms")]
    pub element_poll_ms: u64,
}

fn default_source_url() -> String {
    SOURCE_URL.to_string()
}

fn default_rows() -> u32 {
    10
}

fn default_element_timeout_secs() -> u64 {
    10
}

fn default_verify_timeout_secs() -> u64 {
    10
}

fn default_element_poll_ms() -> u64 {
    100
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            source_url: default_source_url(),
            rows: default_rows(),
            element_timeout_secs: default_element_timeout_secs(),
            verify_timeout_secs: default_verify_timeout_secs(),
            element_poll_ms: default_element_poll_ms(),
        }
    }
}

impl ScrapeConfig {
    pub fn element_timeout(&self) -> Duration {
        Duration::from_secs(self.element_timeout_secs)
    }

    pub fn verify_timeout(&self) -> Duration {
        Duration::from_secs(self.verify_timeout_secs)
    }

    pub fn element_poll_interval(&self) -> Duration {
        Duration::from_millis(self.element_poll_ms)
    }
}

/// Confirmation page wait settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmConfig {
    #[serde(default = "default_confirm_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_confirm_poll_ms")]
    pub poll_ms: u64,
}

fn default_confirm_timeout_secs() -> u64 {
    300
}

fn default_confirm_poll_ms() -> u64 {
    500
}

impl Default for ConfirmConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_confirm_timeout_secs(),
            poll_ms: default_confirm_poll_ms(),
        }
    }
}

impl ConfirmConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_ms)
    }
}

/// Chrome instance settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    #[serde(default = "default_debug_port")]
    pub debug_port: u16,

    #[serde(default)]
    pub headless: bool,

    /// Profile directory; `~/.cupfinals/browser-profile` when unset.
    #[serde(default)]
    pub profile_dir: Option<PathBuf>,
}

fn default_debug_port() -> u16 {
    9222
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            debug_port: default_debug_port(),
            headless: false,
            profile_dir: None,
        }
    }
}

impl BrowserConfig {
    pub fn profile_dir(&self) -> PathBuf {
        self.profile_dir
            .clone()
            .unwrap_or_else(|| cupfinals_home().join("browser-profile"))
    }
}

/// Location of the bundled resources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourcesConfig {
    #[serde(default = "default_resources_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_sheet_properties")]
    pub sheet_properties: String,

    #[serde(default = "default_credentials")]
    pub credentials: String,
}

fn default_resources_dir() -> PathBuf {
    PathBuf::from("resources")
}

fn default_sheet_properties() -> String {
    "google.sheets.properties.json".to_string()
}

fn default_credentials() -> String {
    "credentials.json".to_string()
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            dir: default_resources_dir(),
            sheet_properties: default_sheet_properties(),
            credentials: default_credentials(),
        }
    }
}

impl ResourcesConfig {
    pub fn sheet_properties_path(&self) -> PathBuf {
        self.dir.join(&self.sheet_properties)
    }

    pub fn credentials_path(&self) -> PathBuf {
        self.dir.join(&self.credentials)
    }
}

/// Destination spreadsheet and tab, as read from the properties resource.
///
/// `spreadsheet_id` is `None` when the resource could not be loaded or does
/// not name one; writes against such a target fail without network calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetTarget {
    pub spreadsheet_id: Option<String>,
    pub sheet_name: String,
}

/// Markers left in the properties file by templates or failed loads.
const PLACEHOLDER_MARKERS: [&str; 4] = ["FALLBACK", "MISSING", "ERROR", "YOUR_"];

impl SheetTarget {
    pub fn new(spreadsheet_id: impl Into<String>, sheet_name: impl Into<String>) -> Self {
        Self {
            spreadsheet_id: Some(spreadsheet_id.into()),
            sheet_name: sheet_name.into(),
        }
    }

    /// Target with no spreadsheet id.
    pub fn unresolved() -> Self {
        Self {
            spreadsheet_id: None,
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
        }
    }

    /// The spreadsheet id, unless it is missing, blank or a placeholder.
    pub fn resolved_id(&self) -> Result<&str, crate::ConfigError> {
        match self.spreadsheet_id.as_deref() {
            Some(id)
                if !id.trim().is_empty()
                    && !PLACEHOLDER_MARKERS.iter().any(|m| id.contains(m)) =>
            {
                Ok(id)
            }
            other => Err(crate::ConfigError::UnresolvedSpreadsheetId(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved_id().is_ok()
    }
}

/// `~/.cupfinals`, or `.cupfinals` when no home directory is known.
pub fn cupfinals_home() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".cupfinals"))
        .unwrap_or_else(|| PathBuf::from(".cupfinals"))
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
