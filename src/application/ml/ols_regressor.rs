use super::predictor::Regressor;
use crate::domain::errors::FitError;
use crate::domain::market::observation::Observation;
use crate::domain::ml::linear_model::LinearModel;
use tracing::debug;

/// Share of the close column's variance that must remain after projecting out
/// open for the two features to count as linearly independent (1 - r^2).
const RANK_TOLERANCE: f64 = 16.0 * f64::EPSILON;

/// Means and centered cross-products of one observation set.
///
/// `s_rr`/`s_ry` describe the part of close orthogonal to open, computed row
/// by row so nearly collinear prices keep full precision.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CenteredMoments {
    mean_open: f64,
    mean_close: f64,
    mean_turnover: f64,
    s_oo: f64,
    s_cc: f64,
    s_oc: f64,
    s_oy: f64,
    s_cy: f64,
    s_rr: f64,
    s_ry: f64,
}

impl CenteredMoments {
    /// Callers guarantee `observations` is non-empty.
    pub(crate) fn compute(observations: &[Observation]) -> Self {
        let n = observations.len() as f64;
        let mean_open = observations.iter().map(|o| o.open).sum::<f64>() / n;
        let mean_close = observations.iter().map(|o| o.close).sum::<f64>() / n;
        let mean_turnover = observations.iter().map(|o| o.turnover).sum::<f64>() / n;

        let mut s_oo = 0.0;
        let mut s_cc = 0.0;
        let mut s_oc = 0.0;
        let mut s_oy = 0.0;
        let mut s_cy = 0.0;

        for o in observations {
            let d_open = o.open - mean_open;
            let d_close = o.close - mean_close;
            let d_turnover = o.turnover - mean_turnover;
            s_oo += d_open * d_open;
            s_cc += d_close * d_close;
            s_oc += d_open * d_close;
            s_oy += d_open * d_turnover;
            s_cy += d_close * d_turnover;
        }

        // Gram-Schmidt: close minus its projection on open
        let k = if s_oo > 0.0 { s_oc / s_oo } else { 0.0 };
        let mut s_rr = 0.0;
        let mut s_ry = 0.0;
        for o in observations {
            let r = (o.close - mean_close) - k * (o.open - mean_open);
            s_rr += r * r;
            s_ry += r * (o.turnover - mean_turnover);
        }

        Self {
            mean_open,
            mean_close,
            mean_turnover,
            s_oo,
            s_cc,
            s_oc,
            s_oy,
            s_cy,
            s_rr,
            s_ry,
        }
    }

    /// True when the centered open and close columns are linearly independent.
    pub(crate) fn is_full_rank(&self) -> bool {
        self.s_oo > 0.0 && self.s_rr > RANK_TOLERANCE * self.s_cc
    }
}

/// Closed-form ordinary least squares on centered data.
///
/// Features and target are centered first, close is orthogonalized against
/// open, and the intercept is recovered from the means. A rank-deficient
/// design (collinear or constant columns, fewer than three distinct rows)
/// falls back to the minimum-norm solution.
#[derive(Debug, Clone, Copy, Default)]
pub struct OlsRegressor;

impl OlsRegressor {
    pub fn new() -> Self {
        Self
    }
}

impl Regressor for OlsRegressor {
    fn fit(&self, observations: &[Observation]) -> Result<LinearModel, FitError> {
        if observations.is_empty() {
            return Err(FitError::NoData);
        }

        let m = CenteredMoments::compute(observations);

        let (coef_open, coef_close) = if m.is_full_rank() {
            let coef_close = m.s_ry / m.s_rr;
            let coef_open = m.s_oy / m.s_oo - coef_close * (m.s_oc / m.s_oo);
            (coef_open, coef_close)
        } else {
            // Rank <= 1: pinv(G) = G / trace(G)^2
            let trace = m.s_oo + m.s_cc;
            debug!(
                "Features are collinear (residual ss={:.3e}), using minimum-norm solution",
                m.s_rr
            );
            if trace > 0.0 {
                let scale = trace * trace;
                (
                    (m.s_oo * m.s_oy + m.s_oc * m.s_cy) / scale,
                    (m.s_oc * m.s_oy + m.s_cc * m.s_cy) / scale,
                )
            } else {
                (0.0, 0.0)
            }
        };

        let intercept = m.mean_turnover - coef_open * m.mean_open - coef_close * m.mean_close;
        Ok(LinearModel::new(intercept, coef_open, coef_close))
    }

    fn name(&self) -> &str {
        "Closed-form OLS"
    }
}
