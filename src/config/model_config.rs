//! Model configuration parsing from environment variables.

use crate::domain::ml::solver::RegressionSolver;
use anyhow::Result;
use std::env;
use std::str::FromStr;

/// Model environment configuration
#[derive(Debug, Clone, Default)]
pub struct ModelEnvConfig {
    pub solver: RegressionSolver,
}

impl ModelEnvConfig {
    pub fn from_env() -> Result<Self> {
        let solver = match env::var("REGRESSION_SOLVER") {
            Ok(v) => RegressionSolver::from_str(&v)?,
            Err(_) => RegressionSolver::default(),
        };
        Ok(Self { solver })
    }
}
