use chrono::NaiveDate;
use rustc_hash::FxHashMap;

use crate::models::{FeatureRow, PriceBar, FEATURE_COUNT};

/// Build feature rows from an ordered bar series and a date -> mean sentiment
/// map.
///
/// The first bar is dropped (no previous close), the final row carries no
/// label, and a date missing from the sentiment map contributes 0. Fewer than
/// two bars produce nothing.
pub fn build_features(bars: &[PriceBar], sentiment: &FxHashMap<NaiveDate, f64>) -> Vec<FeatureRow> {
    let mut rows = Vec::with_capacity(bars.len().saturating_sub(1));

    for i in 1..bars.len() {
        let bar = &bars[i];
        let prev_close = bars[i - 1].close;
        let return_pct = (bar.close - prev_close) / prev_close * 100.0;

        rows.push(FeatureRow {
            date: bar.date,
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.close,
            volume: bar.volume,
            return_pct,
            sentiment: sentiment.get(&bar.date).copied().unwrap_or(0.0),
            label: bars.get(i + 1).map(|next| next.close),
        });
    }

    rows
}

/// Partition the labeled rows at the training cutoff (inclusive on the
/// training side). Unlabeled rows belong to neither split.
pub fn split_labeled(rows: &[FeatureRow], cutoff: NaiveDate) -> (Vec<&FeatureRow>, Vec<&FeatureRow>) {
    let mut train = Vec::new();
    let mut test = Vec::new();
    for row in rows {
        if row.label.is_none() {
            continue;
        }
        if row.date <= cutoff {
            train.push(row);
        } else {
            test.push(row);
        }
    }
    (train, test)
}

/// Flatten labeled rows into a row-major design matrix and target vector.
pub fn design_matrix(rows: &[&FeatureRow]) -> (Vec<f64>, Vec<f64>) {
    let mut x = Vec::with_capacity(rows.len() * FEATURE_COUNT);
    let mut y = Vec::with_capacity(rows.len());
    for row in rows {
        if let Some(label) = row.label {
            x.extend_from_slice(&row.features());
            y.push(label);
        }
    }
    (x, y)
}
