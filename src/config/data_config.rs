//! Data source configuration parsing from environment variables.
//!
//! This module handles the CSV location and the names of the columns used
//! as features and target.

use crate::infrastructure::data::ColumnNames;
use std::env;
use std::path::PathBuf;

/// Data environment configuration
#[derive(Debug, Clone)]
pub struct DataEnvConfig {
    pub data_path: PathBuf,
    pub columns: ColumnNames,
}

impl Default for DataEnvConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("HDFC.csv"),
            columns: ColumnNames::default(),
        }
    }
}

impl DataEnvConfig {
    pub fn from_env() -> Self {
        let defaults = ColumnNames::default();
        Self {
            data_path: env::var("DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("HDFC.csv")),
            columns: ColumnNames {
                open: env::var("OPEN_COLUMN").unwrap_or(defaults.open),
                close: env::var("CLOSE_COLUMN").unwrap_or(defaults.close),
                turnover: env::var("TURNOVER_COLUMN").unwrap_or(defaults.turnover),
            },
        }
    }
}
