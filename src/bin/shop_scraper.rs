//! Shop directory scraper
//!
//! Entry point for the standalone directory crawl: index the A–Z listing
//! pages, fetch each shop's detail page sequentially, and export the
//! collected records to CSV.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::info;

use plugilo::core::Config;
use plugilo::scraper::{detail, export, listing};

/// Shop directory scraper
#[derive(Parser, Debug)]
#[command(name = "shop-scraper")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Shop listing base URL
    #[arg(long)]
    base_url: Option<String>,

    /// CSV output path
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'd')]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _guard = plugilo::logging::init("shop_scraper", args.debug);

    let mut config = Config::load();
    if let Some(base_url) = args.base_url {
        config.scraper.base_url = base_url;
    }
    if let Some(output) = args.output {
        config.scraper.output_file = output;
    }

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.scraper.request_timeout_secs))
        .build()?;

    let shops = listing::index_shops(&client, &config.scraper.base_url).await?;
    info!(count = shops.len(), "Scraping shop details");

    let records = detail::fetch_all_details(&client, &shops, config.scraper.max_products).await;

    export::write_csv(&config.scraper.output_file, &records)?;
    Ok(())
}
