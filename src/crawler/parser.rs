//! HTML parser for chart and detail pages
//!
//! Each call parses its own document and drops it before returning, so no
//! parsed page outlives the function that read it.

use crate::crawler::selectors::ChartRules;
use crate::ExtractionError;
use scraper::Html;
use url::Url;

/// Fields read from one chart row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub title: String,
    pub imdb_rating: String,
    /// Absolute detail page URL
    pub details_url: Url,
}

/// Fields read from a detail page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieDetails {
    pub description: String,
}

/// Parses the chart page into one result per matched row
///
/// Rows are returned in document order. A row with a missing field yields an
/// `Err` in its slot rather than failing the whole page, so the caller decides
/// when to stop. No matching rows is an empty vector.
///
/// # Arguments
///
/// * `html` - The chart page content
/// * `start_url` - The chart URL; relative detail links resolve against it
/// * `rules` - Compiled extraction rules
pub fn parse_listing(
    html: &str,
    start_url: &Url,
    rules: &ChartRules,
) -> Vec<Result<ListingEntry, ExtractionError>> {
    let document = Html::parse_document(html);
    let page_url = start_url.as_str();

    document
        .select(&rules.row)
        .map(|row| {
            let title = rules.title.select_field(row, page_url)?;
            let imdb_rating = rules.rating.select_field(row, page_url)?;
            let href = rules.details_link.select_field(row, page_url)?;
            let details_url = resolve_link(&href, start_url)?;

            Ok(ListingEntry {
                title,
                imdb_rating,
                details_url,
            })
        })
        .collect()
}

/// Parses a detail page and extracts the plot description
pub fn parse_detail(
    html: &str,
    page_url: &Url,
    rules: &ChartRules,
) -> Result<MovieDetails, ExtractionError> {
    let document = Html::parse_document(html);
    let description = rules
        .description
        .select_field(document.root_element(), page_url.as_str())?;

    Ok(MovieDetails { description })
}

/// Resolves a link href against a base URL
///
/// Absolute hrefs are kept as-is, relative ones are joined the way a browser
/// would.
pub fn resolve_link(href: &str, base_url: &Url) -> Result<Url, ExtractionError> {
    base_url
        .join(href)
        .map_err(|source| ExtractionError::InvalidLink {
            href: href.to_string(),
            source,
        })
}
