use super::ols_regressor::OlsRegressor;
use super::predictor::Regressor;
use super::smartcore_regressor::SmartCoreRegressor;
use crate::domain::ml::solver::RegressionSolver;

pub struct RegressorFactory;

impl RegressorFactory {
    pub fn create(solver: RegressionSolver) -> Box<dyn Regressor> {
        match solver {
            RegressionSolver::Normal => Box::new(OlsRegressor::new()),
            RegressionSolver::Qr => Box::new(SmartCoreRegressor::qr()),
            RegressionSolver::Svd => Box::new(SmartCoreRegressor::svd()),
        }
    }
}
