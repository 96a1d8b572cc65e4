//! Log parsing, filtering, and summarization pipeline for logsift.
//!
//! Ingests newline-delimited application log text in the fixed
//! `YYYY-MM-DD HH:MM:SS LEVEL UserID:<id> message` shape, extracts structured
//! records, applies severity/time-range filters, and produces a CSV export,
//! a statistical summary, and an optional batch write to a record sink.

pub mod error;
pub mod export;
pub mod filter;
pub mod mock;
pub mod parser;
pub mod pipeline;
pub mod sink;
pub mod source;
pub mod summary;
pub mod types;

// Re-export key types for convenience
pub use error::{SiftError, SiftResult};
pub use filter::FilterCriteria;
pub use mock::{MemorySink, MockLogSource};
pub use parser::{parse_line, parse_lines};
pub use pipeline::{Pipeline, PipelineOptions, RunReport};
pub use sink::{JsonLinesSink, RecordSink};
pub use source::{FileLogSource, LogSource};
pub use summary::{SeverityCounts, Span, SpanMode, Summary, summarize, summarize_with};
pub use types::{LogRecord, ParseFailure, Severity, TIMESTAMP_FORMAT};
