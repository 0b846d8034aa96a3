use super::stats::Stats;
use crate::domain::market::observation::Dataset;
use crate::domain::ml::linear_model::LinearModel;
use serde::Serialize;

/// In-sample diagnostics of a fitted model
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FitSummary {
    pub observations: usize,
    pub r_squared: f64,
    pub rmse: f64,
    pub mae: f64,
}

impl FitSummary {
    pub fn evaluate(model: &LinearModel, dataset: &Dataset) -> Self {
        let predictions: Vec<f64> = dataset
            .iter()
            .map(|o| model.predict(o.open, o.close))
            .collect();
        let actuals: Vec<f64> = dataset.iter().map(|o| o.turnover).collect();

        Self {
            observations: dataset.len(),
            r_squared: Stats::r_squared(&predictions, &actuals),
            rmse: Stats::rmse(&predictions, &actuals),
            mae: Stats::mae(&predictions, &actuals),
        }
    }
}

impl std::fmt::Display for FitSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "n={}, R²={:.4}, RMSE={:.2}, MAE={:.2}",
            self.observations, self.r_squared, self.rmse, self.mae
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::market::observation::Observation;

    #[test]
    fn test_exact_model_scores_perfectly() {
        let model = LinearModel::new(10.0, 1.0, 2.0);
        let dataset = Dataset::new(vec![
            Observation::new(1.0, 1.0, 13.0),
            Observation::new(2.0, 0.0, 12.0),
            Observation::new(0.0, 3.0, 16.0),
        ]);

        let summary = FitSummary::evaluate(&model, &dataset);
        assert_eq!(summary.observations, 3);
        assert!((summary.r_squared - 1.0).abs() < 1e-12);
        assert!(summary.rmse.abs() < 1e-12);
        assert!(summary.to_string().starts_with("n=3"));
    }
}
