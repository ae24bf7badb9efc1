use crate::config::types::{ChartConfig, Config};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_chart_config(&config.chart)
}

/// Validates the chart section
fn validate_chart_config(config: &ChartConfig) -> Result<(), ConfigError> {
    validate_start_url(&config.start_url)?;

    for name in config.params.keys() {
        if name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "query parameter names cannot be empty".to_string(),
            ));
        }
    }

    Ok(())
}

/// The start URL is also the base for detail links, so it must be absolute
fn validate_start_url(start_url: &str) -> Result<(), ConfigError> {
    let url = Url::parse(start_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid start-url '{}': {}", start_url, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "start-url '{}' must use HTTP or HTTPS scheme",
            start_url
        )));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::Validation(format!(
            "start-url '{}' has no host",
            start_url
        )));
    }

    Ok(())
}
