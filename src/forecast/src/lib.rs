pub mod error;
pub mod evaluate;
pub mod features;
pub mod models;
pub mod regression;
pub mod scorer;
pub mod walkforward;

pub use error::ForecastError;
pub use evaluate::{evaluate, Evaluation};
pub use features::{build_features, design_matrix, split_labeled};
pub use models::{BacktestReport, FeatureRow, FittedModel, ForecastPoint, PriceBar, FEATURE_COUNT};
pub use regression::LinearModel;
pub use scorer::score_backtest;
pub use walkforward::{direction_flags, walk_forward};
