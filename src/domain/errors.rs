use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the historical dataset
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Failed to read data file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: {column}")]
    MissingColumn { column: String },

    #[error("Invalid value in row {row}, column {column}: '{value}'")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Data file contains no rows")]
    Empty,
}

/// Errors related to fitting the regression model
#[derive(Debug, Error)]
pub enum FitError {
    #[error("no data to fit")]
    NoData,

    #[error("Solver failed: {reason}")]
    Solver { reason: String },
}

/// Errors caused by user-supplied prediction input
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("{field} must be a number, got '{value}'")]
    InvalidNumber { field: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_error_message() {
        assert_eq!(FitError::NoData.to_string(), "no data to fit");
    }

    #[test]
    fn test_invalid_value_formatting() {
        let error = DataError::InvalidValue {
            row: 12,
            column: "Turnover".to_string(),
            value: "n/a".to_string(),
        };

        let msg = error.to_string();
        assert!(msg.contains("row 12"));
        assert!(msg.contains("Turnover"));
        assert!(msg.contains("'n/a'"));
    }

    #[test]
    fn test_input_error_names_field() {
        let error = InputError::InvalidNumber {
            field: "Open",
            value: "abc".to_string(),
        };
        assert_eq!(error.to_string(), "Open must be a number, got 'abc'");
    }
}
