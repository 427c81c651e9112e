use thiserror::Error;

/// Failures raised by the estimation core.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Predict was called on a model that was never fitted.
    #[error("model has not been fitted")]
    ModelNotFitted,

    /// The least-squares solve failed even after the pseudo-inverse
    /// fallback. Fatal; never retried.
    #[error("least-squares estimation failed: {0}")]
    NumericInstability(String),
}
