//! Chart-Ripple: a ranked chart scraper
//!
//! This crate fetches a ranked movie chart page, follows every entry's link to
//! its detail page and assembles a flat list of movie records.

pub mod config;
pub mod crawler;
pub mod output;

use thiserror::Error;

/// Main error type for Chart-Ripple operations
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Output error: {0}")]
    Sink(#[from] output::SinkError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),
}

/// A page could not be retrieved
///
/// Network failures and unsuccessful HTTP statuses both end up here.
#[derive(Debug, Error)]
#[error("Could not retrieve page from {url}: {message}")]
pub struct FetchError {
    /// The requested URL (without query parameters)
    pub url: String,

    /// HTTP status code, when a response was received
    pub status: Option<u16>,

    /// Error description
    pub message: String,
}

/// A required node or attribute was missing from a page
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("No element matches '{selector}' for field '{field}' on {url}")]
    MissingElement {
        field: &'static str,
        selector: String,
        url: String,
    },

    #[error("Element for field '{field}' has no '{attribute}' attribute on {url}")]
    MissingAttribute {
        field: &'static str,
        attribute: &'static str,
        url: String,
    },

    #[error("Invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    #[error("Cannot resolve link '{href}': {source}")]
    InvalidLink {
        href: String,
        source: ::url::ParseError,
    },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Chart-Ripple operations
pub type Result<T> = std::result::Result<T, ChartError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{ChartScraper, Movie};
pub use output::{JsonLinesSink, NoopSink, RecordSink};
