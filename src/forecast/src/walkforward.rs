use chrono::NaiveDate;
use rustc_hash::FxHashMap;

use crate::models::{FeatureRow, FittedModel, ForecastPoint};

/// Single-step-ahead predictions over the calendar window [start, end].
///
/// A target date D gets a point only when a feature row exists for the exact
/// previous calendar day; dates after a weekend or holiday are silently
/// skipped, mirroring non-trading gaps. The window is not checked against the
/// training cutoff - keeping it out of sample is the caller's concern.
pub fn walk_forward(
    model: &FittedModel,
    rows: &[FeatureRow],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<ForecastPoint> {
    let by_date: FxHashMap<NaiveDate, &FeatureRow> = rows.iter().map(|r| (r.date, r)).collect();

    let mut points = Vec::new();
    let mut date = start;
    while date <= end {
        if let Some(prev) = date.pred_opt() {
            if let Some(prev_row) = by_date.get(&prev) {
                points.push(ForecastPoint {
                    date,
                    predicted: model.predict_row(&prev_row.features()),
                    actual: by_date.get(&date).map(|row| row.close),
                });
            }
        }
        match date.succ_opt() {
            Some(next) => date = next,
            None => break,
        }
    }
    points
}

/// Day-over-day direction agreement between predicted and actual closes.
///
/// Both deltas flat counts as correct, exactly one flat counts as wrong,
/// otherwise the signs must match. The first point and any point missing an
/// adjacent actual yield None.
pub fn direction_flags(points: &[ForecastPoint]) -> Vec<Option<bool>> {
    points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            if i == 0 {
                return None;
            }
            let prev = &points[i - 1];
            let prev_actual = prev.actual?;
            let actual = point.actual?;

            let pred_dir = metrics::sign(point.predicted - prev.predicted);
            let act_dir = metrics::sign(actual - prev_actual);
            Some(if pred_dir == 0 && act_dir == 0 {
                true
            } else if pred_dir == 0 || act_dir == 0 {
                false
            } else {
                pred_dir == act_dir
            })
        })
        .collect()
}
