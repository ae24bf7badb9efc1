//! Integration tests for Chart-Ripple
//!
//! These tests use wiremock to serve chart and detail pages and run the
//! full extraction end-to-end.

mod sink_tests;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// One chart row: rank, title, rating, detail href
pub struct Row<'a>(pub u32, pub &'a str, pub &'a str, pub &'a str);

/// Renders a chart page in the shape of the IMDb top chart
pub fn chart_html(rows: &[Row<'_>]) -> String {
    let rows: String = rows
        .iter()
        .map(|Row(rank, title, rating, href)| {
            format!(
                r#"<tr>
  <td class="posterColumn"><img src="/poster.jpg"></td>
  <td class="titleColumn">{rank}. <a href="{href}" title="Director">{title}</a></td>
  <td class="ratingColumn imdbRating"><strong title="rating">{rating}</strong></td>
</tr>"#
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html><html><head><title>Top 250</title></head><body>
<table class="chart full-width"><thead><tr><th>Rank &amp; Title</th></tr></thead>
<tbody class="lister-list">{rows}</tbody></table></body></html>"#
    )
}

/// Renders a detail page whose plot container holds the given description
pub fn detail_html(description: &str) -> String {
    format!(
        r#"<!DOCTYPE html><html><body>
<div class="GenresAndPlot__ContentParent-cum89p-8">
  <div class="ipc-chip-list">Drama</div>
  <p class="GenresAndPlot__Plot-cum89p-6"><span class="GenresAndPlot__TextContainerBreakpointXS_TO_M">{description}</span><span class="GenresAndPlot__TextContainerBreakpointL">{description} (long)</span></p>
</div></body></html>"#
    )
}

/// Mounts a GET mock returning an HTML body
pub async fn mount_page(server: &MockServer, page_path: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

/// Chart URL on the mock server
pub fn chart_url(server: &MockServer) -> String {
    format!("{}/chart/top/", server.uri())
}
