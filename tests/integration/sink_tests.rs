use crate::{chart_html, chart_url, detail_html, mount_page, Row};
use chart_ripple::output::{RecordSink, SinkResult};
use chart_ripple::{ChartScraper, JsonLinesSink, Movie};
use std::collections::BTreeMap;
use std::io::Write;
use std::sync::{Arc, Mutex};
use wiremock::MockServer;

/// Sink that remembers every batch it was handed
#[derive(Clone, Default)]
struct RecordingSink {
    batches: Arc<Mutex<Vec<Vec<Movie>>>>,
}

impl RecordSink for RecordingSink {
    fn save(&mut self, records: &[Movie]) -> SinkResult<()> {
        self.batches.lock().unwrap().push(records.to_vec());
        Ok(())
    }
}

/// Writer shared with the test so the output can be read back
#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

async fn two_entry_server() -> MockServer {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/chart/top/",
        chart_html(&[
            Row(1, "The Shawshank Redemption", "9.3", "/title/tt0111161/"),
            Row(2, "The Godfather", "9.2", "/title/tt0068646/"),
        ]),
    )
    .await;
    mount_page(&server, "/title/tt0111161/", detail_html("Shawshank plot")).await;
    mount_page(&server, "/title/tt0068646/", detail_html("Godfather plot")).await;
    server
}

#[tokio::test]
async fn test_extract_does_not_call_sink() {
    let server = two_entry_server().await;
    let sink = RecordingSink::default();

    let mut scraper = ChartScraper::new(&chart_url(&server), BTreeMap::new())
        .unwrap()
        .with_sink(Box::new(sink.clone()));
    scraper.extract().await.expect("Extraction failed");

    assert!(sink.batches.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_save_output_hands_records_to_sink() {
    let server = two_entry_server().await;
    let sink = RecordingSink::default();

    let mut scraper = ChartScraper::new(&chart_url(&server), BTreeMap::new())
        .unwrap()
        .with_sink(Box::new(sink.clone()));
    scraper.extract().await.expect("Extraction failed");
    scraper.save_output().expect("Save failed");

    let batches = sink.batches.lock().unwrap();
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0], scraper.output());
}

#[tokio::test]
async fn test_json_lines_sink_output() {
    let server = two_entry_server().await;
    let buffer = SharedBuffer::default();

    let mut scraper = ChartScraper::new(&chart_url(&server), BTreeMap::new())
        .unwrap()
        .with_sink(Box::new(JsonLinesSink::new(buffer.clone())));
    scraper.extract().await.expect("Extraction failed");
    scraper.save_output().expect("Save failed");

    let text = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
    let lines: Vec<serde_json::Value> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["title"], "1. The Shawshank Redemption");
    assert_eq!(lines[1]["imdb_rating"], "9.2");
    assert_eq!(lines[1]["description"], "Godfather plot");
}
