use serde::Deserialize;
use std::collections::BTreeMap;

/// Start URL used when no configuration overrides it
pub const DEFAULT_START_URL: &str = "https://www.imdb.com/chart/top/";

/// Query parameters sent with the default start URL
pub const DEFAULT_PARAMS: &[(&str, &str)] = &[("ref_", "nv_mv_250")];

/// Main configuration structure for Chart-Ripple
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub chart: ChartConfig,
}

/// Which chart page to scrape
#[derive(Debug, Clone, Deserialize)]
pub struct ChartConfig {
    /// Absolute URL of the listing page; detail links resolve against it
    #[serde(rename = "start-url", default = "default_start_url")]
    pub start_url: String,

    /// Query parameters attached to the listing request only
    #[serde(default)]
    pub params: BTreeMap<String, String>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            start_url: default_start_url(),
            params: default_params(),
        }
    }
}

fn default_start_url() -> String {
    DEFAULT_START_URL.to_string()
}

fn default_params() -> BTreeMap<String, String> {
    DEFAULT_PARAMS
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
