use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use serde::Deserialize;

/// Configuration for a prediction run
#[derive(Debug, Clone, Deserialize, Parser)]
#[command(name = "predictor")]
#[command(about = "Next-close prediction from daily bars and news sentiment")]
pub struct Config {
    /// Ticker symbol; ".NS" is assumed when no exchange suffix is given
    #[arg(value_name = "TICKER")]
    pub ticker: String,

    /// Path to the price file (YYYYMMDD open high low close volume)
    #[arg(value_name = "PRICE_FILE")]
    pub price_file: String,

    /// Path to the news file (YYYYMMDD headline); omit to run without news
    #[arg(long)]
    pub news_file: Option<String>,

    /// First day of history to use
    #[arg(long, default_value = "2025-03-01")]
    pub start: NaiveDate,

    /// Last day whose rows are used for fitting
    #[arg(long, default_value = "2025-10-10")]
    pub train_cutoff: NaiveDate,

    /// Last target day of the forecast window
    #[arg(long, default_value = "2025-11-09")]
    pub forecast_end: NaiveDate,

    /// Path to output results
    #[arg(long, default_value = "results/")]
    pub output_path: String,
}

impl Config {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.start >= self.train_cutoff {
            anyhow::bail!(
                "start ({}) must come before the training cutoff ({})",
                self.start,
                self.train_cutoff
            );
        }

        if self.train_cutoff >= self.forecast_end {
            anyhow::bail!(
                "training cutoff ({}) must come before the forecast end ({})",
                self.train_cutoff,
                self.forecast_end
            );
        }

        Ok(())
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
