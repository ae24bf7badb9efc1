//! JSON lines output
//!
//! Writes one JSON object per record, e.g.
//! `{"title":"1. The Shawshank Redemption","imdb_rating":"9.3","description":"..."}`

use crate::crawler::Movie;
use crate::output::traits::{RecordSink, SinkResult};
use std::io::Write;

/// Sink that writes records as JSON lines to any writer
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RecordSink for JsonLinesSink<W> {
    fn save(&mut self, records: &[Movie]) -> SinkResult<()> {
        for record in records {
            serde_json::to_writer(&mut self.writer, record)?;
            self.writer.write_all(b"\n")?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
