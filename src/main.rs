//! Chart-Ripple main entry point
//!
//! This is the command-line interface for the Chart-Ripple chart scraper.

use chart_ripple::config::{load_config_with_hash, validate, Config};
use chart_ripple::{ChartScraper, JsonLinesSink};
use chrono::Utc;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Chart-Ripple: a ranked chart scraper
///
/// Chart-Ripple fetches a ranked movie chart, follows every entry to its
/// detail page and collects title, rating and description for each one.
#[derive(Parser, Debug)]
#[command(name = "chart-ripple")]
#[command(version = "1.0.0")]
#[command(about = "A ranked chart scraper", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults to the IMDb top chart)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Override the chart URL
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Add or override a chart query parameter
    #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_key_val)]
    params: Vec<(String, String)>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be scraped without fetching anything
    #[arg(long, conflicts_with = "print")]
    dry_run: bool,

    /// Write the scraped records to stdout as JSON lines
    #[arg(long)]
    print: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            match load_config_with_hash(path) {
                Ok((cfg, hash)) => {
                    tracing::info!("Configuration loaded successfully (hash: {})", hash);
                    cfg
                }
                Err(e) => {
                    tracing::error!("Failed to load configuration: {}", e);
                    return Err(e.into());
                }
            }
        }
        None => Config::default(),
    };

    // Command-line overrides win over the file
    if let Some(url) = cli.url {
        config.chart.start_url = url;
    }
    config.chart.params.extend(cli.params);
    validate(&config)?;

    if cli.dry_run {
        handle_dry_run(&config);
    } else {
        handle_scrape(&config, cli.print).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("chart_ripple=info,warn"),
            1 => EnvFilter::new("chart_ripple=debug,info"),
            2 => EnvFilter::new("chart_ripple=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    // Logs go to stderr so --print output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Parses a `KEY=VALUE` argument
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))?;
    if key.is_empty() {
        return Err(format!("empty parameter name in '{}'", s));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Handles the --dry-run mode: shows the effective configuration
fn handle_dry_run(config: &Config) {
    println!("=== Chart-Ripple Dry Run ===\n");

    println!("Chart:");
    println!("  Start URL: {}", config.chart.start_url);

    println!("\nQuery Parameters ({}):", config.chart.params.len());
    for (key, value) in &config.chart.params {
        println!("  - {} = {}", key, value);
    }

    println!("\n✓ Configuration is valid");
}

/// Handles the main scrape operation
async fn handle_scrape(config: &Config, print: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut scraper = ChartScraper::from_config(config)?;
    if print {
        scraper = scraper.with_sink(Box::new(JsonLinesSink::new(std::io::stdout())));
    }

    let started_at = Utc::now();
    tracing::info!("Starting extraction at {}", started_at.to_rfc3339());

    let result = scraper.extract().await.map(|movies| movies.len());
    let elapsed = Utc::now() - started_at;

    match result {
        Ok(count) => {
            tracing::info!(
                "Extraction completed: {} movies in {:.2}s",
                count,
                elapsed.num_milliseconds() as f64 / 1000.0
            );
        }
        Err(e) => {
            tracing::error!(
                "Extraction failed after {} movies: {}",
                scraper.output().len(),
                e
            );
            return Err(e.into());
        }
    }

    if print {
        scraper.save_output()?;
    }

    Ok(())
}
