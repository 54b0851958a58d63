//! Sheets v4 wire types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A block of cell values (`ValueRange` in the API).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major_dimension: Option<String>,

    /// Absent in responses for ranges that hold no data.
    #[serde(default)]
    pub values: Vec<Vec<Value>>,
}

impl ValueRange {
    pub fn rows(values: Vec<Vec<Value>>) -> Self {
        Self {
            range: None,
            major_dimension: Some("ROWS".to_string()),
            values,
        }
    }

    /// True when there is no first row, or the first row has no cells.
    pub fn first_row_empty(&self) -> bool {
        self.values.first().is_none_or(|row| row.is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppendValuesResponse {
    #[serde(default)]
    pub table_range: Option<String>,

    #[serde(default)]
    pub updates: Option<UpdateValuesResponse>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateValuesResponse {
    #[serde(default)]
    pub updated_range: Option<String>,

    #[serde(default)]
    pub updated_rows: Option<u32>,
}

/// Google API error envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorDetail {
    #[serde(default)]
    pub message: String,

    #[serde(default)]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_response_has_no_values() {
        let range: ValueRange =
            serde_json::from_str(r#"{"range": "Sheet1!A1", "majorDimension": "ROWS"}"#).unwrap();
        assert!(range.values.is_empty());
        assert!(range.first_row_empty());
    }

    #[test]
    fn test_first_row_empty_collection() {
        let range = ValueRange::rows(vec![vec![]]);
        assert!(range.first_row_empty());

        let range = ValueRange::rows(vec![vec![json!("Year")]]);
        assert!(!range.first_row_empty());
    }

    #[test]
    fn test_rows_serialize() {
        let body = serde_json::to_value(ValueRange::rows(vec![vec![json!(1930), json!("Uruguay")]]))
            .unwrap();
        assert_eq!(
            body,
            json!({"majorDimension": "ROWS", "values": [[1930, "Uruguay"]]})
        );
    }

    #[test]
    fn test_append_response() {
        let resp: AppendValuesResponse = serde_json::from_str(
            r#"{"spreadsheetId": "x", "updates": {"updatedRange": "Sheet1!A2:D3", "updatedRows": 2}}"#,
        )
        .unwrap();
        assert_eq!(resp.updates.unwrap().updated_rows, Some(2));
    }
}
