use chrono::NaiveDate;
use forecast::PriceBar;
use sentiment::NewsItem;
use thiserror::Error;

/// Failure reported by a data collaborator.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct SourceError {
    pub message: String,
}

impl SourceError {
    pub fn new(message: impl Into<String>) -> Self {
        SourceError {
            message: message.into(),
        }
    }
}

/// Supplier of daily price history. An empty Ok result means "no data for
/// that window" and is not an error.
pub trait MarketDataSource {
    fn fetch(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PriceBar>, SourceError>;
}

/// Supplier of dated headlines. Implementations are expected to deliver
/// whatever they could collect; partial results are normal.
pub trait NewsSource {
    fn fetch(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<NewsItem>, SourceError>;
}
