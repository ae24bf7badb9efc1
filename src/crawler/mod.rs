//! Crawler module for chart fetching and extraction
//!
//! This module contains the core scraping logic, including:
//! - HTTP fetching
//! - Declarative field selectors
//! - Chart and detail page parsing
//! - The sequential extraction pipeline

mod fetcher;
mod movie;
mod parser;
mod pipeline;
pub mod selectors;

pub use fetcher::{build_http_client, fetch_page};
pub use movie::Movie;
pub use parser::{parse_detail, parse_listing, resolve_link, ListingEntry, MovieDetails};
pub use pipeline::ChartScraper;

use crate::config::Config;
use crate::ChartError;

/// Runs a complete extraction
///
/// This is the main entry point for a one-shot run. It will:
/// 1. Build the scraper from the configuration
/// 2. Fetch and parse the chart page
/// 3. Fetch and parse every entry's detail page
/// 4. Return the collected records
///
/// # Arguments
///
/// * `config` - The scraper configuration
///
/// # Returns
///
/// * `Ok(Vec<Movie>)` - Every chart entry, in chart order
/// * `Err(ChartError)` - The run failed
pub async fn crawl(config: &Config) -> Result<Vec<Movie>, ChartError> {
    let mut scraper = ChartScraper::from_config(config)?;
    scraper.extract().await?;
    Ok(scraper.output().to_vec())
}
