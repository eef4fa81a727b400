//! Event Sink Implementations
//!
//! Concrete implementations of SyncEventSink:
//! - JsonEventSink: NDJSON output for automation
//! - LogEventSink: forwards to the `log` facade
//!
//! The terminal renderer lives with the binary's UI.

mod json;
mod log_sink;

pub use json::JsonEventSink;
pub use log_sink::LogEventSink;
