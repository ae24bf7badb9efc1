//! Chart extraction pipeline
//!
//! Runs the two-level crawl: the chart page first, then one detail page per
//! chart row, strictly one request at a time and in chart order.

use crate::config::Config;
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::crawler::movie::Movie;
use crate::crawler::parser::{parse_detail, parse_listing, MovieDetails};
use crate::crawler::selectors::ChartRules;
use crate::output::{NoopSink, RecordSink};
use crate::{ChartError, Result};
use reqwest::Client;
use std::collections::BTreeMap;
use url::Url;

/// Scrapes one chart page and the detail page of every entry on it
pub struct ChartScraper {
    start_url: Url,
    params: BTreeMap<String, String>,
    client: Client,
    rules: ChartRules,
    output: Vec<Movie>,
    sink: Box<dyn RecordSink + Send>,
}

impl ChartScraper {
    /// Creates a scraper for the given chart URL
    ///
    /// # Arguments
    ///
    /// * `start_url` - Absolute chart URL, also the base for detail links
    /// * `params` - Query parameters sent with the chart request
    ///
    /// # Returns
    ///
    /// * `Ok(ChartScraper)` - Ready to run
    /// * `Err(ChartError)` - The URL did not parse or the client failed to build
    pub fn new(start_url: &str, params: BTreeMap<String, String>) -> Result<Self> {
        let start_url = Url::parse(start_url)?;
        let client = build_http_client().map_err(|e| crate::FetchError {
            url: start_url.to_string(),
            status: None,
            message: format!("Failed to build HTTP client: {}", e),
        })?;

        Ok(Self {
            start_url,
            params,
            client,
            rules: ChartRules::compile()?,
            output: Vec::new(),
            sink: Box::new(NoopSink),
        })
    }

    /// Creates a scraper from a loaded configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.chart.start_url, config.chart.params.clone())
    }

    /// Replaces the sink used by [`ChartScraper::save_output`]
    pub fn with_sink(mut self, sink: Box<dyn RecordSink + Send>) -> Self {
        self.sink = sink;
        self
    }

    pub fn start_url(&self) -> &Url {
        &self.start_url
    }

    pub fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }

    /// Records collected by the last run, in chart order
    ///
    /// After a failed run this holds the entries completed before the failure.
    pub fn output(&self) -> &[Movie] {
        &self.output
    }

    /// Records collected by the last run as plain mappings
    pub fn output_maps(&self) -> Vec<BTreeMap<&'static str, String>> {
        self.output.iter().map(Movie::to_map).collect()
    }

    /// Runs the extraction
    ///
    /// # Flow
    ///
    /// 1. Fetch the chart page with the configured query parameters
    /// 2. Read title, rating and detail link from every row
    /// 3. For each row in order, fetch its detail page and read the description
    /// 4. Append the assembled record to the output
    ///
    /// The first failure ends the run. Records appended before it stay in
    /// [`ChartScraper::output`].
    pub async fn extract(&mut self) -> Result<&[Movie]> {
        self.output.clear();

        tracing::info!("Fetching chart from {}", self.start_url);
        let content = fetch_page(&self.client, &self.start_url, Some(&self.params)).await?;
        let entries = parse_listing(&content, &self.start_url, &self.rules);
        tracing::info!("Found {} chart entries", entries.len());

        for (index, entry) in entries.into_iter().enumerate() {
            let entry = entry?;
            tracing::debug!(
                "Entry {}: {} -> {}",
                index + 1,
                entry.title.trim(),
                entry.details_url
            );

            let details = self.extract_movie_details(&entry.details_url).await?;
            self.output.push(Movie {
                title: entry.title,
                imdb_rating: entry.imdb_rating,
                description: details.description,
            });
        }

        tracing::info!("Extracted {} movies", self.output.len());
        Ok(&self.output)
    }

    /// Fetches a detail page and extracts its description
    pub async fn extract_movie_details(&self, details_url: &Url) -> Result<MovieDetails> {
        let content = fetch_page(&self.client, details_url, None).await?;
        parse_detail(&content, details_url, &self.rules).map_err(ChartError::from)
    }

    /// Hands the collected records to the configured sink
    pub fn save_output(&mut self) -> Result<()> {
        tracing::debug!("Saving {} records", self.output.len());
        self.sink.save(&self.output)?;
        Ok(())
    }
}
