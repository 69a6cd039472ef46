//! Savings forecasting by linear extrapolation.
//!
//! Each historical savings event's chronological index (0, 1, 2, ...) is
//! the independent variable, its amount the dependent one. An ordinary
//! least-squares line is fitted and evaluated at the next `horizon`
//! indices. Negative or implausible projections are reported as-is:
//! clamping would hide a genuine downward trend.

use thiserror::Error;
use tracing::debug;

use crate::ledger::Ledger;

/// Default projection horizon in months.
pub const DEFAULT_HORIZON: usize = 3;

/// Recoverable forecast failures. Reported, never thrown as control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ForecastError {
    #[error("insufficient savings history: need at least 2 points, have {have}")]
    InsufficientData { have: usize },
}

/// Project the next `horizon` savings amounts from ledger history.
///
/// Requires at least 2 historical savings events. Each projected value is
/// rounded to 2 decimal places. A fresh sequence is produced per call.
pub fn forecast_savings(ledger: &Ledger, horizon: usize) -> Result<Vec<f64>, ForecastError> {
    let amounts = ledger.savings_amounts();
    let n = amounts.len();
    if n < 2 {
        return Err(ForecastError::InsufficientData { have: n });
    }

    let (slope, intercept) = fit_line(&amounts);
    debug!(slope, intercept, points = n, "fitted savings trend");

    Ok((n..n + horizon)
        .map(|i| round2(intercept + slope * i as f64))
        .collect())
}

/// Least-squares fit of `y = intercept + slope * index` over the samples.
fn fit_line(ys: &[f64]) -> (f64, f64) {
    let n = ys.len() as f64;
    let mean_x = (n - 1.0) / 2.0;
    let mean_y = ys.iter().sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (i, y) in ys.iter().enumerate() {
        let dx = i as f64 - mean_x;
        sxx += dx * dx;
        sxy += dx * (y - mean_y);
    }

    // sxx > 0 whenever ys has 2+ points, since indices are distinct.
    let slope = sxy / sxx;
    (slope, mean_y - slope * mean_x)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
