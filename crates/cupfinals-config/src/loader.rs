//! Bundled resource loading.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::schema::{DEFAULT_SHEET_NAME, SheetTarget};

/// Shape of `google.sheets.properties.json`.
#[derive(Debug, Deserialize)]
struct SheetProperties {
    #[serde(rename = "SPREADSHEET_ID")]
    spreadsheet_id: Option<String>,
    #[serde(rename = "SHEET_NAME")]
    sheet_name: Option<String>,
}

/// Loads the resources the flow needs at startup.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the destination sheet from a properties file.
    ///
    /// A file without `SPREADSHEET_ID` yields an unresolved target rather
    /// than an error; `SHEET_NAME` falls back to `Sheet1`.
    pub fn load_sheet_target(path: &Path) -> Result<SheetTarget, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::load_sheet_target_str(&content)
    }

    /// Load the destination sheet from JSON text.
    pub fn load_sheet_target_str(content: &str) -> Result<SheetTarget, ConfigError> {
        let value: serde_json::Value = serde_json::from_str(content)?;
        if !value.is_object() {
            return Err(ConfigError::InvalidFormat(
                "expected a JSON object with SPREADSHEET_ID and SHEET_NAME".to_string(),
            ));
        }
        let props: SheetProperties = serde_json::from_value(value)?;

        Ok(SheetTarget {
            spreadsheet_id: props.spreadsheet_id,
            sheet_name: props
                .sheet_name
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_SHEET_NAME.to_string()),
        })
    }

    /// Fail early if a required resource file is absent.
    pub fn require_file(path: &Path) -> Result<(), ConfigError> {
        if path.is_file() {
            Ok(())
        } else {
            Err(ConfigError::NotFound(path.display().to_string()))
        }
    }
}
