use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of engineered features per row. The order of `FeatureRow::features`
/// is fixed and shared by fitting, evaluation, and forecasting.
pub const FEATURE_COUNT: usize = 9;

/// One trading day's quote as delivered by a market data collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceBar {
    /// Trading day.
    pub date: NaiveDate,
    /// Opening price.
    pub open: f64,
    /// Session high.
    pub high: f64,
    /// Session low.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Traded volume.
    pub volume: f64,
}

/// Engineered features for one trading day plus the next day's close label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureRow {
    /// Trading day the features describe.
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    /// Day-over-day close change, in percent.
    pub return_pct: f64,
    /// Mean news sentiment for the day, 0 when no news was scored.
    pub sentiment: f64,
    /// Close of the next trading day; None on the final row.
    pub label: Option<f64>,
}

impl FeatureRow {
    /// The fixed-order feature vector. Sentiment enters only through its
    /// interactions: aligned sentiment and price movement reinforce each
    /// other, sentiment against the move carries little weight.
    pub fn features(&self) -> [f64; FEATURE_COUNT] {
        [
            self.open,
            self.high,
            self.low,
            self.close,
            self.volume,
            self.return_pct,
            self.sentiment * self.return_pct,
            self.sentiment * self.return_pct.max(0.0),
            self.sentiment * self.volume,
        ]
    }
}

/// Coefficients of a fitted linear predictor. Immutable once produced;
/// re-fitting yields a new instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FittedModel {
    /// Constant term.
    pub intercept: f64,
    /// One weight per feature, in `FeatureRow::features` order.
    pub coefficients: Vec<f64>,
}

impl FittedModel {
    /// intercept + row . coefficients
    pub fn predict_row(&self, features: &[f64]) -> f64 {
        self.intercept
            + features
                .iter()
                .zip(self.coefficients.iter())
                .map(|(x, c)| x * c)
                .sum::<f64>()
    }
}

/// One single-step-ahead prediction in the forecast window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Target date the prediction is for.
    pub date: NaiveDate,
    /// Predicted close, computed from the previous day's features.
    pub predicted: f64,
    /// Observed close for the target date, when one exists.
    pub actual: Option<f64>,
}

/// Accuracy metrics over a forecast window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BacktestReport {
    /// Root mean squared error over points with an actual; None if there
    /// were none.
    pub rmse: Option<f64>,
    /// Mean absolute percentage error over the same points; None if there
    /// were none. May be non-finite when an actual close is exactly zero.
    pub mape: Option<f64>,
    /// Share of day-over-day moves predicted in the right direction, in
    /// percent; None when no flag was computable.
    pub directional_accuracy: Option<f64>,
    /// Per-point direction flag: None for the first point and wherever an
    /// actual close was missing.
    pub direction_correct: Vec<Option<bool>>,
}
