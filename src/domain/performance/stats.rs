/// Shared statistics utilities for evaluating regression fits.
pub struct Stats;

impl Stats {
    pub fn mean(values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        values.iter().sum::<f64>() / values.len() as f64
    }

    /// Coefficient of determination.
    ///
    /// Returns 0.0 when the actual values have no variance.
    pub fn r_squared(predictions: &[f64], actuals: &[f64]) -> f64 {
        let n = predictions.len().min(actuals.len());
        if n == 0 {
            return 0.0;
        }

        let mean_y = Self::mean(&actuals[..n]);
        let mut ss_res = 0.0;
        let mut ss_tot = 0.0;
        for i in 0..n {
            ss_res += (actuals[i] - predictions[i]).powi(2);
            ss_tot += (actuals[i] - mean_y).powi(2);
        }

        if ss_tot > 0.0 {
            1.0 - ss_res / ss_tot
        } else {
            0.0
        }
    }

    pub fn rmse(predictions: &[f64], actuals: &[f64]) -> f64 {
        let n = predictions.len().min(actuals.len());
        if n == 0 {
            return 0.0;
        }
        let sq_err: f64 = predictions
            .iter()
            .zip(actuals.iter())
            .map(|(p, t)| (p - t).powi(2))
            .sum();
        (sq_err / n as f64).sqrt()
    }

    pub fn mae(predictions: &[f64], actuals: &[f64]) -> f64 {
        let n = predictions.len().min(actuals.len());
        if n == 0 {
            return 0.0;
        }
        predictions
            .iter()
            .zip(actuals.iter())
            .map(|(p, t)| (p - t).abs())
            .sum::<f64>()
            / n as f64
    }
}
