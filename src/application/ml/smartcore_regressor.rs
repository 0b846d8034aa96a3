use super::ols_regressor::{CenteredMoments, OlsRegressor};
use super::predictor::Regressor;
use crate::domain::errors::FitError;
use crate::domain::market::observation::Observation;
use crate::domain::ml::feature_registry::{FEATURE_NAMES, features_to_f64_vector};
use crate::domain::ml::linear_model::LinearModel;
use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::linear_regression::{
    LinearRegression, LinearRegressionParameters, LinearRegressionSolverName,
};
use tracing::debug;

/// OLS backed by SmartCore's `LinearRegression` (QR or SVD decomposition).
///
/// SmartCore panics on rank-deficient designs, so underdetermined or
/// collinear input is fitted by `OlsRegressor` instead.
pub struct SmartCoreRegressor {
    solver: LinearRegressionSolverName,
}

impl SmartCoreRegressor {
    pub fn new(solver: LinearRegressionSolverName) -> Self {
        Self { solver }
    }

    pub fn qr() -> Self {
        Self::new(LinearRegressionSolverName::QR)
    }

    pub fn svd() -> Self {
        Self::new(LinearRegressionSolverName::SVD)
    }
}

impl Regressor for SmartCoreRegressor {
    fn fit(&self, observations: &[Observation]) -> Result<LinearModel, FitError> {
        if observations.is_empty() {
            return Err(FitError::NoData);
        }

        if observations.len() <= FEATURE_NAMES.len()
            || !CenteredMoments::compute(observations).is_full_rank()
        {
            debug!(
                "{}: rank-deficient design ({} observations), using closed form",
                self.name(),
                observations.len()
            );
            return OlsRegressor::new().fit(observations);
        }

        let rows: Vec<Vec<f64>> = observations
            .iter()
            .map(|o| features_to_f64_vector(o.open, o.close))
            .collect();
        let y: Vec<f64> = observations.iter().map(|o| o.turnover).collect();

        let x = DenseMatrix::from_2d_vec(&rows).map_err(|e| FitError::Solver {
            reason: format!("Matrix creation failed: {}", e),
        })?;

        let params = LinearRegressionParameters::default().with_solver(self.solver.clone());
        let model: LinearRegression<f64, f64, DenseMatrix<f64>, Vec<f64>> =
            LinearRegression::fit(&x, &y, params).map_err(|e| FitError::Solver {
                reason: format!("Training error: {}", e),
            })?;

        // Coefficients come back as a single column (or row) vector
        let coefficients = model.coefficients();
        let (n_rows, n_cols) = coefficients.shape();
        let coef = |i: usize| {
            if n_rows >= n_cols {
                *coefficients.get((i, 0))
            } else {
                *coefficients.get((0, i))
            }
        };
        if n_rows.max(n_cols) < FEATURE_NAMES.len() {
            return Err(FitError::Solver {
                reason: format!(
                    "Expected {} coefficients, got {}x{}",
                    FEATURE_NAMES.len(),
                    n_rows,
                    n_cols
                ),
            });
        }

        let fitted = LinearModel::new(*model.intercept(), coef(0), coef(1));
        if !fitted.is_finite() {
            return Err(FitError::Solver {
                reason: "Non-finite coefficients".to_string(),
            });
        }

        debug!(
            "{} fitted on {} observations",
            self.name(),
            observations.len()
        );
        Ok(fitted)
    }

    fn name(&self) -> &str {
        match self.solver {
            LinearRegressionSolverName::QR => "SmartCore OLS (QR)",
            LinearRegressionSolverName::SVD => "SmartCore OLS (SVD)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Observation> {
        vec![
            Observation::new(10.0, 11.0, 120.0),
            Observation::new(12.0, 11.5, 131.0),
            Observation::new(9.0, 10.0, 101.0),
            Observation::new(14.0, 15.0, 162.0),
            Observation::new(11.0, 13.0, 139.0),
            Observation::new(13.0, 12.0, 140.0),
        ]
    }

    #[test]
    fn test_empty_input_fails() {
        assert!(matches!(
            SmartCoreRegressor::qr().fit(&[]),
            Err(FitError::NoData)
        ));
    }

    #[test]
    fn test_two_observations_fall_back_to_closed_form() {
        let observations = vec![
            Observation::new(10.0, 12.0, 500.0),
            Observation::new(14.0, 13.0, 900.0),
        ];
        let reference = OlsRegressor::new().fit(&observations).unwrap();

        for regressor in [SmartCoreRegressor::qr(), SmartCoreRegressor::svd()] {
            let model = regressor.fit(&observations).unwrap();
            assert!(model.is_finite());
            assert_eq!(model, reference);
        }
    }

    #[test]
    fn test_collinear_features_fall_back_to_closed_form() {
        let observations: Vec<Observation> = [1.0, 2.0, 3.0, 4.0]
            .iter()
            .map(|&o| Observation::new(o, 2.0 * o, 5.0 * o))
            .collect();

        for regressor in [SmartCoreRegressor::qr(), SmartCoreRegressor::svd()] {
            let model = regressor.fit(&observations).unwrap();
            assert!((model.coef_open() - 1.0).abs() < 1e-9);
            assert!((model.coef_close() - 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_agrees_with_closed_form() {
        let observations = sample();
        let reference = OlsRegressor::new().fit(&observations).unwrap();

        for regressor in [SmartCoreRegressor::qr(), SmartCoreRegressor::svd()] {
            let model = regressor.fit(&observations).unwrap();
            assert!((model.intercept() - reference.intercept()).abs() < 1e-6);
            assert!((model.coef_open() - reference.coef_open()).abs() < 1e-6);
            assert!((model.coef_close() - reference.coef_close()).abs() < 1e-6);
        }
    }
}
