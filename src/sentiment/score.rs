use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::lexicon::{NEGATIVE, POSITIVE};

/// One headline as delivered by a news collaborator.
///
/// `published` is None when the upstream feed entry carried no parseable
/// timestamp; such items score to nothing rather than aborting the batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub published: Option<NaiveDate>,
    pub title: String,
}

/// A single scored headline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SentimentSample {
    pub date: NaiveDate,
    pub score: f64,
}

/*
--------------------------------------------------------------------------------
   Lexicon scoring: case-insensitive substring counts over the two fixed
   word lists, normalized into [-1, 1]
--------------------------------------------------------------------------------
*/

pub fn score(text: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }

    let lower = text.to_lowercase();

    let pos = POSITIVE.iter().filter(|word| lower.contains(*word)).count() as f64;
    let neg = NEGATIVE.iter().filter(|word| lower.contains(*word)).count() as f64;

    let total = pos + neg;
    if total == 0.0 {
        return 0.0;
    }
    (pos - neg) / total.max(1.0)
}

/// Score one item; items without a publish date yield no sample.
pub fn sample(item: &NewsItem) -> Option<SentimentSample> {
    let date = item.published?;
    Some(SentimentSample {
        date,
        score: score(&item.title),
    })
}

/// Score a batch, keeping only the items that produced a sample.
pub fn collect_samples(items: &[NewsItem]) -> Vec<SentimentSample> {
    items.iter().filter_map(sample).collect()
}
