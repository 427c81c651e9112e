pub mod config;
pub mod data;
pub mod report;

pub use config::Config;
pub use data::{read_news_file, read_price_file, FileNews, FilePrices, NoNews};
pub use report::{print_summary, write_failure, write_report};
