use serde::{Deserialize, Serialize};

/// Least-squares backend used to fit the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RegressionSolver {
    /// Closed-form normal equations on centered data
    #[default]
    Normal,
    /// SmartCore, QR decomposition
    Qr,
    /// SmartCore, singular value decomposition
    Svd,
}

impl std::str::FromStr for RegressionSolver {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Ok(RegressionSolver::Normal),
            "qr" => Ok(RegressionSolver::Qr),
            "svd" => Ok(RegressionSolver::Svd),
            _ => anyhow::bail!(
                "Invalid REGRESSION_SOLVER: {}. Valid: normal, qr, svd",
                s
            ),
        }
    }
}

impl std::fmt::Display for RegressionSolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegressionSolver::Normal => write!(f, "normal"),
            RegressionSolver::Qr => write!(f, "qr"),
            RegressionSolver::Svd => write!(f, "svd"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(RegressionSolver::from_str("QR").unwrap(), RegressionSolver::Qr);
        assert_eq!(RegressionSolver::from_str(" svd ").unwrap(), RegressionSolver::Svd);
        assert_eq!(RegressionSolver::from_str("normal").unwrap(), RegressionSolver::Normal);
    }

    #[test]
    fn test_invalid_solver() {
        let err = RegressionSolver::from_str("lasso").unwrap_err();
        assert!(err.to_string().contains("Invalid REGRESSION_SOLVER"));
    }

    #[test]
    fn test_display_roundtrips() {
        for solver in [RegressionSolver::Normal, RegressionSolver::Qr, RegressionSolver::Svd] {
            assert_eq!(RegressionSolver::from_str(&solver.to_string()).unwrap(), solver);
        }
    }
}
