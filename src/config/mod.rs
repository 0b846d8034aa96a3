//! Configuration module for the turnover predictor.
//!
//! Configuration is read from environment variables (a `.env` file is loaded
//! by the binaries first), organized by concern: Data and Model. Every
//! variable is optional; with none set the program reads `HDFC.csv` from the
//! working directory and fits with the closed-form solver.

mod data_config;
mod model_config;

pub use data_config::DataEnvConfig;
pub use model_config::ModelEnvConfig;

pub use crate::domain::ml::solver::RegressionSolver;
use crate::infrastructure::data::ColumnNames;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Main application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    // Data (from DataEnvConfig)
    pub data_path: PathBuf,
    pub columns: ColumnNames,

    // Model (from ModelEnvConfig)
    pub solver: RegressionSolver,
}

impl Default for Config {
    fn default() -> Self {
        let data = DataEnvConfig::default();
        Self {
            data_path: data.data_path,
            columns: data.columns,
            solver: RegressionSolver::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let data = DataEnvConfig::from_env();
        let model = ModelEnvConfig::from_env().context("Failed to load model config")?;

        Ok(Self {
            data_path: data.data_path,
            columns: data.columns,
            solver: model.solver,
        })
    }
}
