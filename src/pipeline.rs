use chrono::NaiveDate;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use forecast::{
    build_features, design_matrix, direction_flags, evaluate, score_backtest, split_labeled,
    walk_forward, ForecastError, LinearModel, FEATURE_COUNT,
};

use crate::sources::{MarketDataSource, NewsSource};

/// What the caller asks for: a ticker plus the analysis window.
#[derive(Debug, Clone)]
pub struct PredictionRequest {
    pub ticker: String,
    /// First calendar day of history to use.
    pub start: NaiveDate,
    /// Last day whose rows are used for fitting; later rows are held out.
    pub train_cutoff: NaiveDate,
    /// Last target day of the walk-forward window.
    pub forecast_end: NaiveDate,
}

/// Structured failure returned to the caller. Nothing in the pipeline
/// panics; collaborator failures are converted here at the boundary.
#[derive(Debug, Error)]
pub enum PredictError {
    /// The request itself was unusable.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The market collaborator failed or delivered nothing usable.
    #[error("no data available: {0}")]
    DataUnavailable(String),

    /// Estimation failure from the forecasting core.
    #[error(transparent)]
    Forecast(#[from] ForecastError),
}

impl PredictError {
    /// Stable machine-readable kind for the failure response.
    pub fn kind(&self) -> &'static str {
        match self {
            PredictError::InvalidInput(_) => "invalid_input",
            PredictError::DataUnavailable(_) => "data_unavailable",
            PredictError::Forecast(ForecastError::ModelNotFitted) => "model_not_fitted",
            PredictError::Forecast(ForecastError::NumericInstability(_)) => "numeric_instability",
        }
    }
}

/// The single immutable result record assembled at the end of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionReport {
    pub ticker: String,
    pub current_price: f64,
    pub current_time: NaiveDate,
    pub predicted_next: f64,
    /// Held-out r-squared as a percentage, unclamped.
    pub accuracy: f64,
    /// Held-out root mean squared error.
    pub rmse: f64,
    pub hist_dates: Vec<NaiveDate>,
    pub hist_close: Vec<f64>,
    /// Date the next-close prediction refers to.
    pub pred_date: NaiveDate,
    pub forecast_dates: Vec<NaiveDate>,
    pub forecast_predicted: Vec<f64>,
    pub forecast_actual: Vec<Option<f64>>,
    pub backtest_rmse: Option<f64>,
    pub backtest_mape: Option<f64>,
    pub directional_accuracy: Option<f64>,
    pub directional_flags: Vec<Option<bool>>,
}

/// Uppercase the ticker and default to the NSE suffix when the symbol names
/// no exchange.
pub fn normalize_ticker(raw: &str) -> Result<String, PredictError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PredictError::InvalidInput(
            "ticker must not be empty".to_string(),
        ));
    }
    let upper = trimmed.to_uppercase();
    if upper.contains('.') {
        Ok(upper)
    } else {
        Ok(format!("{}.NS", upper))
    }
}

/// Run the whole batch: fetch, score news, engineer features, fit, evaluate,
/// walk forward, and assemble the report.
pub fn run(
    request: &PredictionRequest,
    market: &dyn MarketDataSource,
    news: &dyn NewsSource,
) -> Result<PredictionReport, PredictError> {
    let ticker = normalize_ticker(&request.ticker)?;

    let bars = market
        .fetch(&ticker, request.start, request.forecast_end)
        .map_err(|e| PredictError::DataUnavailable(e.to_string()))?;
    if bars.is_empty() {
        return Err(PredictError::DataUnavailable("no data".to_string()));
    }

    // Best effort: a dead news source contributes zero samples, never an error
    let items = match news.fetch(request.start, request.forecast_end) {
        Ok(items) => items,
        Err(e) => {
            eprintln!("news source failed, continuing without sentiment: {}", e);
            Vec::new()
        }
    };
    let mut samples = sentiment::collect_samples(&items);
    samples.retain(|s| s.date >= request.start && s.date <= request.forecast_end);
    let daily = sentiment::aggregate_daily(&samples);
    let sentiment_by_date: FxHashMap<NaiveDate, f64> =
        daily.iter().map(|d| (d.date, d.mean_score)).collect();

    let rows = build_features(&bars, &sentiment_by_date);
    if rows.is_empty() {
        return Err(PredictError::DataUnavailable(
            "price series too short to engineer features".to_string(),
        ));
    }

    let (train_rows, test_rows) = split_labeled(&rows, request.train_cutoff);
    if train_rows.is_empty() {
        return Err(PredictError::DataUnavailable(
            "no training rows at or before the cutoff".to_string(),
        ));
    }

    let (x_train, y_train) = design_matrix(&train_rows);
    let mut model = LinearModel::new();
    model.fit(&x_train, &y_train, FEATURE_COUNT)?;

    let (x_test, y_test) = design_matrix(&test_rows);
    let y_pred = model.predict(&x_test, FEATURE_COUNT)?;
    let evaluation = evaluate(&y_test, &y_pred);

    let fitted = model.fitted().ok_or(ForecastError::ModelNotFitted)?;

    // Next close comes from the most recent row, which never carries a label
    let last = &rows[rows.len() - 1];
    let predicted_next = fitted.predict_row(&last.features());

    let points = match request.train_cutoff.succ_opt() {
        Some(window_start) if window_start <= request.forecast_end => {
            walk_forward(fitted, &rows, window_start, request.forecast_end)
        }
        _ => Vec::new(),
    };
    let flags = direction_flags(&points);
    let backtest = score_backtest(&points, &flags);

    Ok(PredictionReport {
        ticker,
        current_price: last.close,
        current_time: last.date,
        predicted_next,
        accuracy: evaluation.accuracy_percent(),
        rmse: evaluation.rmse,
        hist_dates: rows.iter().map(|r| r.date).collect(),
        hist_close: rows.iter().map(|r| r.close).collect(),
        pred_date: last.date.succ_opt().unwrap_or(last.date),
        forecast_dates: points.iter().map(|p| p.date).collect(),
        forecast_predicted: points.iter().map(|p| p.predicted).collect(),
        forecast_actual: points.iter().map(|p| p.actual).collect(),
        backtest_rmse: backtest.rmse,
        backtest_mape: backtest.mape,
        directional_accuracy: backtest.directional_accuracy,
        directional_flags: backtest.direction_correct,
    })
}
