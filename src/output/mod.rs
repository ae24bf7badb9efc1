//! Output module for handing scraped records to their destination
//!
//! This module handles:
//! - The [`RecordSink`] extension point invoked after extraction
//! - A no-op default sink
//! - JSON lines output for inspecting a run

mod json;
mod traits;

pub use json::JsonLinesSink;
pub use traits::{NoopSink, RecordSink, SinkError, SinkResult};
