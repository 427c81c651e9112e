pub mod pipeline;
pub mod sources;

pub use pipeline::{run, PredictError, PredictionReport, PredictionRequest};
pub use sources::{MarketDataSource, NewsSource, SourceError};
