use crate::application::prediction_service::{Prediction, PredictionService};
use crate::domain::market::observation::Dataset;
use tracing::info;

/// Outcome of the last "Predict Turnover" action, as shown to the user
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionOutcome {
    Success(Prediction),
    Error(String),
}

impl PredictionOutcome {
    pub fn message(&self) -> String {
        match self {
            PredictionOutcome::Success(p) => p.display(),
            PredictionOutcome::Error(e) => e.clone(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, PredictionOutcome::Error(_))
    }
}

/// Form state behind the desktop window.
///
/// Holds the prediction service (and through it the fitted model), the
/// historical data shown in the plots and the raw text of both inputs.
pub struct UserAgent {
    pub service: PredictionService,
    pub dataset: Dataset,

    // UI State
    pub open_input: String,
    pub close_input: String,
    pub outcome: Option<PredictionOutcome>,
}

impl UserAgent {
    pub fn new(service: PredictionService, dataset: Dataset) -> Self {
        info!(
            "User agent ready with {} historical observations",
            dataset.len()
        );
        Self {
            service,
            dataset,
            open_input: String::new(),
            close_input: String::new(),
            outcome: None,
        }
    }

    /// Handle a click on "Predict Turnover".
    ///
    /// Bad input replaces the previous result with an inline error; the
    /// agent stays usable for the next attempt.
    pub fn predict_turnover(&mut self) -> &PredictionOutcome {
        let outcome = match self.service.submit(&self.open_input, &self.close_input) {
            Ok(prediction) => PredictionOutcome::Success(prediction),
            Err(e) => PredictionOutcome::Error(e.to_string()),
        };
        self.outcome.insert(outcome)
    }
}
