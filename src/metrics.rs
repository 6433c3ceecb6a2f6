use log::warn;

use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Scalar loss functions over aligned y columns
// ---------------------------------------------------------------------------

/// Mean squared error: mean((y_true - y_pred)²)
pub fn mean_squared_error(y_true: &[f64], y_pred: &[f64]) -> f64 {
    sum_squared_residuals(y_true, y_pred) / y_true.len() as f64
}

/// Mean absolute error: mean(|y_true - y_pred|)
pub fn mean_absolute_error(y_true: &[f64], y_pred: &[f64]) -> f64 {
    let n = y_true.len() as f64;
    y_true
        .iter()
        .zip(y_pred)
        .map(|(t, p)| (t - p).abs())
        .sum::<f64>()
        / n
}

/// Root mean squared error: sqrt(MSE)
pub fn root_mean_squared_error(y_true: &[f64], y_pred: &[f64]) -> f64 {
    mean_squared_error(y_true, y_pred).sqrt()
}

/// Coefficient of determination: 1 - SS_res / SS_tot.
///
/// When every `y_true` value is the same, SS_tot is zero and the result is
/// `-inf` (or NaN if the prediction is also exact).  No guard is applied.
pub fn r_squared(y_true: &[f64], y_pred: &[f64]) -> f64 {
    let ss_res = sum_squared_residuals(y_true, y_pred);
    let mean = y_true.iter().sum::<f64>() / y_true.len() as f64;
    let ss_tot = y_true.iter().map(|t| (t - mean).powi(2)).sum::<f64>();
    1.0 - ss_res / ss_tot
}

fn sum_squared_residuals(y_true: &[f64], y_pred: &[f64]) -> f64 {
    y_true.iter().zip(y_pred).map(|(t, p)| (t - p).powi(2)).sum()
}

// ---------------------------------------------------------------------------
// Losses – the named results of one comparison
// ---------------------------------------------------------------------------

/// The four losses of one comparison.  Iterates in the order
/// MSE, MAE, RMSE, R-squared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Losses {
    pub mse: f64,
    pub mae: f64,
    pub rmse: f64,
    pub r_squared: f64,
}

impl Losses {
    pub const NAMES: [&'static str; 4] = ["MSE", "MAE", "RMSE", "R-squared"];

    /// `(name, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> {
        Self::NAMES
            .into_iter()
            .zip([self.mse, self.mae, self.rmse, self.r_squared])
    }

    /// Look up a loss by its display name.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }
}

/// Compare the y columns of two datasets of equal length.
pub fn calculate_losses(reference: &Dataset, obtained: &Dataset) -> Losses {
    let y_true = reference.y();
    let y_pred = obtained.y();

    let losses = Losses {
        mse: mean_squared_error(y_true, y_pred),
        mae: mean_absolute_error(y_true, y_pred),
        rmse: root_mean_squared_error(y_true, y_pred),
        r_squared: r_squared(y_true, y_pred),
    };

    if !losses.r_squared.is_finite() {
        warn!(
            "reference y values have zero variance; R-squared is {}",
            losses.r_squared
        );
    }
    losses
}
