//! Batch pipeline driver: read → parse → filter → export / summarize / sink.

use std::path::PathBuf;

use crate::error::SiftResult;
use crate::export;
use crate::filter::FilterCriteria;
use crate::parser;
use crate::sink::RecordSink;
use crate::source::LogSource;
use crate::summary::{self, SpanMode, Summary};
use crate::types::ParseFailure;

/// Per-run options for the optional pipeline branches.
#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    /// Write the filtered records as CSV to this path.
    pub export_path: Option<PathBuf>,
    /// Compute a summary of the filtered records.
    pub summarize: bool,
    /// Span semantics for the summary.
    pub span_mode: SpanMode,
}

/// Outcome of one pipeline run.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Records successfully parsed (before filtering).
    pub parsed: usize,
    /// Lines that failed to parse; excluded from every downstream stage.
    pub skipped: Vec<ParseFailure>,
    /// Records surviving the filter.
    pub filtered: usize,
    /// Summary, when requested.
    pub summary: Option<Summary>,
    /// Records written to the sink, when one is attached.
    pub sunk: usize,
}

/// One-shot batch driver over an injected source and optional sink.
///
/// Each run is independent: the whole input is read and parsed in one pass,
/// nothing is shared between invocations, and all handles are scoped to the
/// call.
pub struct Pipeline<'a> {
    source: &'a dyn LogSource,
    sink: Option<&'a dyn RecordSink>,
}

impl<'a> Pipeline<'a> {
    pub fn new(source: &'a dyn LogSource) -> Self {
        Self { source, sink: None }
    }

    pub fn with_sink(mut self, sink: &'a dyn RecordSink) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Run the pipeline over `input`.
    ///
    /// An unopenable source is fatal. Malformed lines are not: each is
    /// logged, collected into the report, and processing continues. The CSV
    /// export happens only after the filter pass completes, so a fatal error
    /// never leaves a partial output file. A sink failure propagates but
    /// does not invalidate an export already written.
    pub async fn run(
        &self,
        input: &str,
        criteria: &FilterCriteria,
        options: &PipelineOptions,
    ) -> SiftResult<RunReport> {
        let lines = self.source.read_lines(input).await?;
        tracing::info!(input, total_lines = lines.len(), "pipeline run started");

        let (records, skipped) = parser::parse_lines(&lines);
        for failure in &skipped {
            tracing::warn!(
                line = failure.line_number,
                raw = %failure.raw,
                "skipping malformed log line"
            );
        }
        let parsed = records.len();

        let filtered_records = criteria.apply(records);
        let filtered = filtered_records.len();
        tracing::info!(parsed, skipped = skipped.len(), filtered, "filter pass complete");

        if let Some(path) = &options.export_path {
            export::export_csv(path, &filtered_records)?;
            tracing::info!(path = %path.display(), rows = filtered, "CSV export written");
        }

        let summary = options
            .summarize
            .then(|| summary::summarize_with(&filtered_records, options.span_mode));

        let mut sunk = 0;
        if let Some(sink) = self.sink {
            sunk = sink.write_batch(&filtered_records).await?;
            tracing::info!(records = sunk, "batch written to sink");
        }

        Ok(RunReport {
            parsed,
            skipped,
            filtered,
            summary,
            sunk,
        })
    }
}
