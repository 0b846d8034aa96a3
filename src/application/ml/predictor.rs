use crate::domain::errors::FitError;
use crate::domain::market::observation::Observation;
use crate::domain::ml::linear_model::LinearModel;

/// Interface for regression backends that turn observations into a `LinearModel`
pub trait Regressor {
    /// Fit turnover against (open, close).
    ///
    /// Fails with `FitError::NoData` on empty input. Underdetermined input
    /// yields a degenerate least-squares solution rather than an error.
    fn fit(&self, observations: &[Observation]) -> Result<LinearModel, FitError>;

    /// Get solver name
    fn name(&self) -> &str;
}

/// Predicted turnover for an (open, close) pair.
pub fn predict(model: &LinearModel, open: f64, close: f64) -> f64 {
    model.predict(open, close)
}
