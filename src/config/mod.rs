//! Configuration module for Chart-Ripple
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! A missing file is not an error for the CLI: [`Config::default`] points at the
//! IMDb top chart.
//!
//! # Example
//!
//! ```no_run
//! use chart_ripple::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("chart.toml")).unwrap();
//! println!("Scraping: {}", config.chart.start_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{ChartConfig, Config, DEFAULT_PARAMS, DEFAULT_START_URL};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::validate;
