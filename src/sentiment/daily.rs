use chrono::NaiveDate;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::score::SentimentSample;

/// Mean sentiment for one calendar date.
///
/// Dates with no samples are never emitted; a missing date means "no signal",
/// not zero, and any zero-defaulting happens downstream at the feature join.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DailySentiment {
    pub date: NaiveDate,
    pub mean_score: f64,
}

/// Collapse samples into one mean score per date, ordered by date.
pub fn aggregate_daily(samples: &[SentimentSample]) -> Vec<DailySentiment> {
    let mut sums: FxHashMap<NaiveDate, (f64, usize)> = FxHashMap::default();
    for sample in samples {
        let entry = sums.entry(sample.date).or_insert((0.0, 0));
        entry.0 += sample.score;
        entry.1 += 1;
    }

    let mut daily: Vec<DailySentiment> = sums
        .into_iter()
        .map(|(date, (sum, count))| DailySentiment {
            date,
            mean_score: sum / count as f64,
        })
        .collect();
    daily.sort_by_key(|d| d.date);
    daily
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    #[test]
    fn test_mean_per_date() {
        let samples = vec![
            SentimentSample { date: day(3), score: 1.0 },
            SentimentSample { date: day(3), score: 0.0 },
            SentimentSample { date: day(4), score: -0.5 },
        ];
        let daily = aggregate_daily(&samples);
        assert_eq!(daily.len(), 2);
        assert_eq!(daily[0].date, day(3));
        assert!((daily[0].mean_score - 0.5).abs() < 1e-10);
        assert!((daily[1].mean_score + 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_empty_dates_absent() {
        let daily = aggregate_daily(&[]);
        assert!(daily.is_empty());
    }
}
