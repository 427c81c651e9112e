use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use forecast::PriceBar;
use sentiment::NewsItem;
use stockcast::{MarketDataSource, NewsSource, SourceError};

/// Price history read from a local market file, one line per trading day:
/// `YYYYMMDD open high low close volume`.
pub struct FilePrices {
    path: PathBuf,
}

impl FilePrices {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FilePrices { path: path.into() }
    }
}

impl MarketDataSource for FilePrices {
    /// The file carries a single instrument, so the ticker is not consulted.
    fn fetch(
        &self,
        _ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PriceBar>, SourceError> {
        let bars = read_price_file(&self.path).map_err(SourceError::new)?;
        Ok(bars
            .into_iter()
            .filter(|bar| bar.date >= start && bar.date <= end)
            .collect())
    }
}

/// Headlines read from a local file, one line per item: `YYYYMMDD headline`.
pub struct FileNews {
    path: PathBuf,
}

impl FileNews {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileNews { path: path.into() }
    }
}

impl NewsSource for FileNews {
    fn fetch(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<NewsItem>, SourceError> {
        let items = read_news_file(&self.path).map_err(SourceError::new)?;
        Ok(items
            .into_iter()
            .filter(|item| match item.published {
                Some(date) => date >= start && date <= end,
                // Undated items pass through and are dropped at scoring
                None => true,
            })
            .collect())
    }
}

/// Stand-in news source for runs without a news file.
pub struct NoNews;

impl NewsSource for NoNews {
    fn fetch(&self, _start: NaiveDate, _end: NaiveDate) -> Result<Vec<NewsItem>, SourceError> {
        Ok(Vec::new())
    }
}

/// Read a market file, insisting on strictly increasing dates.
pub fn read_price_file(path: &Path) -> Result<Vec<PriceBar>, String> {
    let file = File::open(path).map_err(|e| format!("cannot open price file: {}", e))?;
    let reader = BufReader::new(file);
    let mut bars: Vec<PriceBar> = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result.map_err(|e| format!("error reading line {}: {}", line_num + 1, e))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(format!(
                "expected 6 fields on line {}, got {}",
                line_num + 1,
                fields.len()
            ));
        }

        let date = NaiveDate::parse_from_str(fields[0], "%Y%m%d")
            .map_err(|_| format!("invalid date on line {}", line_num + 1))?;
        if let Some(last) = bars.last() {
            if date <= last.date {
                return Err(format!("date failed to increase at line {}", line_num + 1));
            }
        }

        let mut values = [0.0f64; 5];
        for (i, field) in fields[1..].iter().enumerate() {
            values[i] = field
                .parse::<f64>()
                .map_err(|_| format!("invalid number on line {}", line_num + 1))?;
        }

        bars.push(PriceBar {
            date,
            open: values[0],
            high: values[1],
            low: values[2],
            close: values[3],
            volume: values[4],
        });
    }

    Ok(bars)
}

/// Read a news file. A line with an unparseable date still yields an item
/// (the scorer drops it later); a line with no headline is skipped. Either
/// way the batch goes on.
pub fn read_news_file(path: &Path) -> Result<Vec<NewsItem>, String> {
    let file = File::open(path).map_err(|e| format!("cannot open news file: {}", e))?;
    let reader = BufReader::new(file);
    let mut items = Vec::new();
    let mut skipped = 0usize;

    for line_result in reader.lines() {
        let line = line_result.map_err(|e| format!("error reading news file: {}", e))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match trimmed.split_once(char::is_whitespace) {
            Some((date_str, title)) if !title.trim().is_empty() => {
                items.push(NewsItem {
                    published: NaiveDate::parse_from_str(date_str, "%Y%m%d").ok(),
                    title: title.trim().to_string(),
                });
            }
            _ => skipped += 1,
        }
    }

    if skipped > 0 {
        println!("Skipped {} malformed news lines", skipped);
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_price_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "20251006 99.5 101.0 98.5 100.0 10000").unwrap();
        writeln!(file, "20251007 101.5 103.0 100.5 102.0 10100").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "20251008 100.5 102.0 99.5 101.0 10200").unwrap();

        let bars = read_price_file(file.path()).unwrap();
        assert_eq!(bars.len(), 3);
        assert_eq!(bars[0].date, NaiveDate::from_ymd_opt(2025, 10, 6).unwrap());
        assert!((bars[1].close - 102.0).abs() < 1e-10);
        assert!((bars[2].volume - 10200.0).abs() < 1e-10);
    }

    #[test]
    fn test_price_dates_must_increase() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "20251007 1 2 0.5 1.5 100").unwrap();
        writeln!(file, "20251007 1 2 0.5 1.5 100").unwrap();

        let err = read_price_file(file.path()).unwrap_err();
        assert!(err.contains("line 2"));
    }

    #[test]
    fn test_price_bad_field_count() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "20251007 1 2 0.5").unwrap();

        let err = read_price_file(file.path()).unwrap_err();
        assert!(err.contains("expected 6 fields"));
    }

    #[test]
    fn test_read_news_file_best_effort() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "20251007 shares surge on strong results").unwrap();
        writeln!(file, "notadate bearish outlook deepens").unwrap();
        writeln!(file, "justoneword").unwrap();

        let items = read_news_file(file.path()).unwrap();
        assert_eq!(items.len(), 2);
        assert!(items[0].published.is_some());
        assert!(items[1].published.is_none());
    }

    #[test]
    fn test_fetch_filters_window() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "20251006 99.5 101.0 98.5 100.0 10000").unwrap();
        writeln!(file, "20251007 101.5 103.0 100.5 102.0 10100").unwrap();
        writeln!(file, "20251110 100.5 102.0 99.5 101.0 10200").unwrap();

        let source = FilePrices::new(file.path());
        let bars = source
            .fetch(
                "TCS.NS",
                NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 10, 31).unwrap(),
            )
            .unwrap();
        assert_eq!(bars.len(), 2);
    }
}
