use std::fs;
use std::path::Path;

use anyhow::Result;
use stockcast::{PredictError, PredictionReport};

/// Write the full report as JSON.
pub fn write_report<P: AsRef<Path>>(path: P, report: &PredictionReport) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        fs::create_dir_all(parent)?;
    }
    let file = fs::File::create(path.as_ref())?;
    serde_json::to_writer_pretty(file, report)?;
    Ok(())
}

/// Write the structured failure response.
pub fn write_failure<P: AsRef<Path>>(path: P, error: &PredictError) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        fs::create_dir_all(parent)?;
    }
    let body = serde_json::json!({
        "error": error.kind(),
        "message": error.to_string(),
    });
    let file = fs::File::create(path.as_ref())?;
    serde_json::to_writer_pretty(file, &body)?;
    Ok(())
}

/// Print the run summary.
pub fn print_summary(report: &PredictionReport) {
    println!("\n{}", "=".repeat(60));
    println!("Prediction Summary");
    println!("{}", "=".repeat(60));
    println!("  Ticker: {}", report.ticker);
    println!(
        "  Last close: {:.2} on {}",
        report.current_price, report.current_time
    );
    println!(
        "  Predicted next close: {:.2} (for {})",
        report.predicted_next, report.pred_date
    );
    println!("  Held-out accuracy: {:.2}%", report.accuracy);
    println!("  Held-out RMSE: {:.4}", report.rmse);

    println!("\nBacktest ({} points):", report.forecast_dates.len());
    match report.backtest_rmse {
        Some(value) => println!("  RMSE: {:.4}", value),
        None => println!("  RMSE: n/a"),
    }
    match report.backtest_mape {
        Some(value) => println!("  MAPE: {:.3}%", value),
        None => println!("  MAPE: n/a"),
    }
    match report.directional_accuracy {
        Some(value) => println!("  Directional accuracy: {:.1}%", value),
        None => println!("  Directional accuracy: n/a"),
    }
}
