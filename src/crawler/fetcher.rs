//! HTTP fetcher implementation
//!
//! One GET per page, no retries. Anything other than a usable response
//! becomes a [`FetchError`] carrying the requested URL.

use crate::FetchError;
use reqwest::Client;
use std::collections::BTreeMap;
use url::Url;

/// Builds the HTTP client shared by the listing and detail fetches
///
/// No custom headers and no timeout are configured; redirects follow the
/// client's default policy.
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder().gzip(true).brotli(true).build()
}

/// Fetches a page and returns its body as text
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The page URL
/// * `params` - Query parameters to attach, if any
///
/// # Returns
///
/// * `Ok(String)` - The decoded response body
/// * `Err(FetchError)` - Network failure or a status >= 400
pub async fn fetch_page(
    client: &Client,
    url: &Url,
    params: Option<&BTreeMap<String, String>>,
) -> Result<String, FetchError> {
    let mut request = client.get(url.clone());
    if let Some(params) = params.filter(|p| !p.is_empty()) {
        request = request.query(params);
    }

    tracing::debug!("GET {}", url);

    let response = request
        .send()
        .await
        .map_err(|e| network_error(url, &e))?;

    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        return Err(FetchError {
            url: url.to_string(),
            status: Some(status.as_u16()),
            message: format!("HTTP {}", status),
        });
    }

    response.text().await.map_err(|e| FetchError {
        url: url.to_string(),
        status: Some(status.as_u16()),
        message: e.to_string(),
    })
}

/// Classifies a transport-level failure
fn network_error(url: &Url, error: &reqwest::Error) -> FetchError {
    let message = if error.is_timeout() {
        "Request timeout".to_string()
    } else if error.is_connect() {
        "Connection refused".to_string()
    } else {
        error.to_string()
    };

    FetchError {
        url: url.to_string(),
        status: None,
        message,
    }
}
