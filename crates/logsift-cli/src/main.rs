//! logsift — batch log analyzer.
//!
//! Reads a line-oriented log file, filters records by severity and time
//! range, writes a CSV report, and optionally prints a summary and writes
//! the batch to a JSON-lines sink.

use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use logsift_core::{
    FileLogSource, FilterCriteria, JsonLinesSink, Pipeline, PipelineOptions, Severity, SiftError,
    SpanMode, TIMESTAMP_FORMAT,
};

#[derive(Debug, Parser)]
#[command(name = "logsift", version, about = "Filter, export, and summarize application logs")]
struct Cli {
    /// Path to the input log file
    #[arg(long)]
    logfile: String,

    /// Path for the generated CSV report
    #[arg(long)]
    output: PathBuf,

    /// Keep only records with this severity (INFO, ERROR, or WARN)
    #[arg(long)]
    level: Option<Severity>,

    /// Keep only records at or after this timestamp (YYYY-MM-DD HH:MM:SS)
    #[arg(long, value_parser = parse_timestamp)]
    start: Option<NaiveDateTime>,

    /// Keep only records at or before this timestamp (YYYY-MM-DD HH:MM:SS)
    #[arg(long, value_parser = parse_timestamp)]
    end: Option<NaiveDateTime>,

    /// Print a summary of the filtered records
    #[arg(long)]
    summarize: bool,

    /// Report the summary time span as true earliest/latest instead of
    /// first/last in arrival order
    #[arg(long, requires = "summarize")]
    chronological_span: bool,

    /// Also append the filtered records to this JSON-lines file
    #[arg(long)]
    sink: Option<PathBuf>,
}

fn parse_timestamp(s: &str) -> Result<NaiveDateTime, SiftError> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
        .map_err(|_| SiftError::InvalidTimestamp { value: s.to_string() })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    tracing::info!(logfile = %cli.logfile, "logsift starting");

    let criteria = FilterCriteria {
        level: cli.level.clone(),
        start: cli.start,
        end: cli.end,
    };
    let options = PipelineOptions {
        export_path: Some(cli.output.clone()),
        summarize: cli.summarize,
        span_mode: if cli.chronological_span {
            SpanMode::Chronological
        } else {
            SpanMode::Arrival
        },
    };

    let source = FileLogSource;
    let sink = cli.sink.as_ref().map(JsonLinesSink::new);
    let mut pipeline = Pipeline::new(&source);
    if let Some(sink) = &sink {
        pipeline = pipeline.with_sink(sink);
    }

    let report = pipeline.run(&cli.logfile, &criteria, &options).await?;

    println!(
        "Wrote {} records to {} ({} malformed lines skipped)",
        report.filtered,
        cli.output.display(),
        report.skipped.len()
    );
    if let Some(summary) = &report.summary {
        println!("Summary:");
        println!("{summary}");
    }
    if cli.sink.is_some() {
        println!("Inserted {} records into sink", report.sunk);
    }

    Ok(())
}
