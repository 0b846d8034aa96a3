use crate::application::ml::predictor::{self, Regressor};
use crate::domain::errors::{FitError, InputError};
use crate::domain::market::observation::Dataset;
use crate::domain::ml::linear_model::LinearModel;
use crate::domain::performance::fit_summary::FitSummary;
use serde::Serialize;
use tracing::{debug, info, warn};

const MILLION: f64 = 1_000_000.0;

/// An (open, close) pair entered by the user
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionRequest {
    pub open: f64,
    pub close: f64,
}

/// Result of a successful prediction
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    pub request: PredictionRequest,
    pub turnover: f64,
}

impl Prediction {
    pub fn display(&self) -> String {
        format_turnover_millions(self.turnover)
    }
}

/// Formats a raw turnover as "Predicted Turnover: X.XX Million INR".
pub fn format_turnover_millions(turnover: f64) -> String {
    format!("Predicted Turnover: {:.2} Million INR", turnover / MILLION)
}

/// Owns the fitted model and answers prediction requests against it.
pub struct PredictionService {
    model: LinearModel,
    summary: FitSummary,
}

impl PredictionService {
    /// Fits `regressor` on `dataset` once and wraps the resulting model.
    pub fn train(regressor: &dyn Regressor, dataset: &Dataset) -> Result<Self, FitError> {
        let model = regressor.fit(dataset.observations())?;
        let summary = FitSummary::evaluate(&model, dataset);
        info!(
            "{}: intercept={:.4}, coef_open={:.4}, coef_close={:.4} ({})",
            regressor.name(),
            model.intercept(),
            model.coef_open(),
            model.coef_close(),
            summary
        );
        Ok(Self { model, summary })
    }

    pub fn model(&self) -> &LinearModel {
        &self.model
    }

    pub fn summary(&self) -> &FitSummary {
        &self.summary
    }

    pub fn parse_request(
        &self,
        open_text: &str,
        close_text: &str,
    ) -> Result<PredictionRequest, InputError> {
        Ok(PredictionRequest {
            open: parse_field("Open", open_text)?,
            close: parse_field("Close", close_text)?,
        })
    }

    pub fn predict(&self, request: &PredictionRequest) -> f64 {
        predictor::predict(&self.model, request.open, request.close)
    }

    /// Parse both fields and predict; the handler behind the "Predict Turnover" action.
    pub fn submit(&self, open_text: &str, close_text: &str) -> Result<Prediction, InputError> {
        let request = match self.parse_request(open_text, close_text) {
            Ok(r) => r,
            Err(e) => {
                warn!("Rejected prediction input: {}", e);
                return Err(e);
            }
        };

        let turnover = self.predict(&request);
        debug!(
            "Predicted turnover {:.2} for open={}, close={}",
            turnover, request.open, request.close
        );
        Ok(Prediction { request, turnover })
    }
}

fn parse_field(field: &'static str, text: &str) -> Result<f64, InputError> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(InputError::InvalidNumber {
            field,
            value: trimmed.to_string(),
        }),
    }
}
