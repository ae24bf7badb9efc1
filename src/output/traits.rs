//! Output sink traits and types

use crate::crawler::Movie;
use thiserror::Error;

/// Errors that can occur while saving records
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for sink operations
pub type SinkResult<T> = Result<T, SinkError>;

/// Destination for the records of a finished run
pub trait RecordSink {
    /// Saves the given records, in order
    fn save(&mut self, records: &[Movie]) -> SinkResult<()>;
}

/// Sink that discards everything
///
/// This is the default: a run keeps its records in memory only.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl RecordSink for NoopSink {
    fn save(&mut self, _records: &[Movie]) -> SinkResult<()> {
        Ok(())
    }
}
