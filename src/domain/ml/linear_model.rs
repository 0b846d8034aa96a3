use serde::Serialize;

/// Fitted two-feature linear model: `turnover = intercept + coef_open * open + coef_close * close`.
///
/// Built once by a `Regressor` and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearModel {
    intercept: f64,
    coef_open: f64,
    coef_close: f64,
}

impl LinearModel {
    pub(crate) fn new(intercept: f64, coef_open: f64, coef_close: f64) -> Self {
        Self {
            intercept,
            coef_open,
            coef_close,
        }
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn coef_open(&self) -> f64 {
        self.coef_open
    }

    pub fn coef_close(&self) -> f64 {
        self.coef_close
    }

    pub fn predict(&self, open: f64, close: f64) -> f64 {
        self.intercept + self.coef_open * open + self.coef_close * close
    }

    pub fn is_finite(&self) -> bool {
        self.intercept.is_finite() && self.coef_open.is_finite() && self.coef_close.is_finite()
    }
}
