use crate::models::{BacktestReport, ForecastPoint};

/// Score a forecast window against what actually traded.
///
/// Error metrics run over the points that have an observed close; the
/// directional figure runs over the computable flags. Each is None when its
/// input set is empty.
pub fn score_backtest(points: &[ForecastPoint], flags: &[Option<bool>]) -> BacktestReport {
    let mut pred = Vec::new();
    let mut act = Vec::new();
    for point in points {
        if let Some(actual) = point.actual {
            pred.push(point.predicted);
            act.push(actual);
        }
    }

    let (rmse, mape) = if act.is_empty() {
        (None, None)
    } else {
        (
            Some(metrics::rmse(&act, &pred)),
            Some(metrics::mape(&act, &pred)),
        )
    };

    let computable: Vec<bool> = flags.iter().filter_map(|f| *f).collect();
    let directional_accuracy = if computable.is_empty() {
        None
    } else {
        let correct = computable.iter().filter(|&&ok| ok).count();
        Some(100.0 * correct as f64 / computable.len() as f64)
    };

    BacktestReport {
        rmse,
        mape,
        directional_accuracy,
        direction_correct: flags.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn point(d: u32, predicted: f64, actual: Option<f64>) -> ForecastPoint {
        ForecastPoint {
            date: NaiveDate::from_ymd_opt(2025, 11, d).unwrap(),
            predicted,
            actual,
        }
    }

    #[test]
    fn test_empty_window_all_absent() {
        let report = score_backtest(&[], &[]);
        assert!(report.rmse.is_none());
        assert!(report.mape.is_none());
        assert!(report.directional_accuracy.is_none());
        assert!(report.direction_correct.is_empty());
    }

    #[test]
    fn test_no_actuals_all_absent() {
        let points = vec![point(1, 100.0, None), point(2, 101.0, None)];
        let flags = vec![None, None];
        let report = score_backtest(&points, &flags);
        assert!(report.rmse.is_none());
        assert!(report.mape.is_none());
        assert!(report.directional_accuracy.is_none());
        assert_eq!(report.direction_correct, vec![None, None]);
    }

    #[test]
    fn test_known_metrics() {
        let points = vec![
            point(1, 102.0, Some(100.0)),
            point(2, 99.0, Some(100.0)),
            point(3, 104.0, None),
        ];
        let flags = vec![None, Some(false), None];
        let report = score_backtest(&points, &flags);

        // Errors of +2 and -1 over the two observed points
        let expected_rmse = ((4.0 + 1.0) / 2.0f64).sqrt();
        assert!((report.rmse.unwrap() - expected_rmse).abs() < 1e-10);
        assert!((report.mape.unwrap() - 1.5).abs() < 1e-10);
        assert_eq!(report.directional_accuracy, Some(0.0));
    }

    #[test]
    fn test_directional_accuracy_bounds() {
        let points = vec![point(1, 1.0, Some(1.0)); 4];
        let flags = vec![None, Some(true), Some(false), Some(true)];
        let report = score_backtest(&points, &flags);
        let acc = report.directional_accuracy.unwrap();
        assert!((0.0..=100.0).contains(&acc));
        assert!((acc - 200.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_zero_actual_degrades_to_null_in_json() {
        // mape divides by the actual close; a zero there propagates a
        // non-finite value in-core and serializes as null at the boundary.
        let points = vec![point(1, 1.0, Some(0.0))];
        let report = score_backtest(&points, &[None]);
        assert!(!report.mape.unwrap().is_finite());

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"mape\":null"));
    }
}
