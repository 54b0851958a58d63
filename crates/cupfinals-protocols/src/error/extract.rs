//! Row extraction errors. Every variant skips only the current row.

use thiserror::Error;

use super::DriverError;
use crate::types::RowField;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Timeout finding the {field} element for row index {row}; the row might not exist or the locators are stale: {source}")]
    ElementTimeout {
        row: u32,
        field: RowField,
        #[source]
        source: DriverError,
    },

    #[error("Unexpected error reading the {field} element for row index {row}: {source}")]
    Driver {
        row: u32,
        field: RowField,
        #[source]
        source: DriverError,
    },

    #[error(
        "One or more data fields are empty for row index {row} (Y:'{year}', W:'{winner}', S:'{score}', R:'{runner_up}')"
    )]
    EmptyField {
        row: u32,
        year: String,
        winner: String,
        score: String,
        runner_up: String,
    },

    #[error("Could not parse year for row index {row} (year text: '{text}')")]
    InvalidYear { row: u32, text: String },
}

impl ExtractError {
    /// Wrap a driver failure for one field, keeping timeouts distinguishable.
    pub fn from_driver(row: u32, field: RowField, source: DriverError) -> Self {
        if source.is_timeout() {
            ExtractError::ElementTimeout { row, field, source }
        } else {
            ExtractError::Driver { row, field, source }
        }
    }

    /// Row index the error belongs to.
    pub fn row(&self) -> u32 {
        match self {
            ExtractError::ElementTimeout { row, .. }
            | ExtractError::Driver { row, .. }
            | ExtractError::EmptyField { row, .. }
            | ExtractError::InvalidYear { row, .. } => *row,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_driver_timeout() {
        let err = ExtractError::from_driver(
            4,
            RowField::Winner,
            DriverError::Timeout("gone".to_string()),
        );
        assert!(matches!(err, ExtractError::ElementTimeout { row: 4, .. }));
        assert!(err.to_string().contains("winner"));
    }

    #[test]
    fn test_from_driver_other() {
        let err = ExtractError::from_driver(
            2,
            RowField::Score,
            DriverError::Script("boom".to_string()),
        );
        assert!(matches!(err, ExtractError::Driver { .. }));
        assert_eq!(err.row(), 2);
    }

    #[test]
    fn test_empty_field_display() {
        let err = ExtractError::EmptyField {
            row: 7,
            year: "1990".to_string(),
            winner: String::new(),
            score: "1–0".to_string(),
            runner_up: "Argentina".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("row index 7"));
        assert!(display.contains("W:''"));
    }

    #[test]
    fn test_invalid_year_display() {
        let err = ExtractError::InvalidYear {
            row: 1,
            text: "n/a".to_string(),
        };
        assert!(err.to_string().contains("'n/a'"));
    }
}
