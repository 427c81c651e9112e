use anyhow::Result;
use clap::Parser;
use predictor::*;

fn main() -> Result<()> {
    println!("stockcast - news-aware next-close prediction\n");

    let config = Config::parse();
    config.validate()?;

    println!("Loading price history from {}...", config.price_file);
    let market = FilePrices::new(&config.price_file);

    let news: Box<dyn stockcast::NewsSource> = match &config.news_file {
        Some(path) => {
            println!("Loading news from {}...", path);
            Box::new(FileNews::new(path))
        }
        None => Box::new(NoNews),
    };

    let request = stockcast::PredictionRequest {
        ticker: config.ticker.clone(),
        start: config.start,
        train_cutoff: config.train_cutoff,
        forecast_end: config.forecast_end,
    };

    let output = format!("{}prediction.json", config.output_path);

    match stockcast::run(&request, &market, news.as_ref()) {
        Ok(report) => {
            print_summary(&report);
            write_report(&output, &report)?;
            println!("\nResults written to {}", output);
            Ok(())
        }
        Err(err) => {
            write_failure(&output, &err)?;
            eprintln!("prediction failed: {}", err);
            std::process::exit(1);
        }
    }
}
