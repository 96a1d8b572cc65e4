//! Record sink abstraction — hand a filtered batch to a persistence backend.

use async_trait::async_trait;
use std::path::PathBuf;

use crate::error::{SiftError, SiftResult};
use crate::types::LogRecord;

/// Capability to durably store a batch of records. Injected into the
/// pipeline driver rather than constructed as process-wide state, so test
/// runs never share a connection.
#[async_trait]
pub trait RecordSink: Send + Sync {
    /// Write the batch, returning how many records were stored. A failure
    /// carries the attempted count for diagnostics.
    async fn write_batch(&self, records: &[LogRecord]) -> SiftResult<usize>;
}

/// Appends one JSON object per record to a file. Stands in for the
/// document-store collaborator: records cross this boundary fully typed.
pub struct JsonLinesSink {
    path: PathBuf,
}

impl JsonLinesSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RecordSink for JsonLinesSink {
    async fn write_batch(&self, records: &[LogRecord]) -> SiftResult<usize> {
        let attempted = records.len();
        let sink_err = |message: String| SiftError::Sink { attempted, message };

        let mut buf = String::new();
        for record in records {
            let line = serde_json::to_string(record).map_err(|e| sink_err(e.to_string()))?;
            buf.push_str(&line);
            buf.push('\n');
        }

        let mut contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(existing) => existing,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(sink_err(format!("{}: {e}", self.path.display()))),
        };
        contents.push_str(&buf);
        tokio::fs::write(&self.path, contents)
            .await
            .map_err(|e| sink_err(format!("{}: {e}", self.path.display())))?;
        Ok(attempted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_line;

    fn sample_records() -> Vec<LogRecord> {
        vec![
            parse_line("2024-01-01 10:00:00 INFO UserID:u1 login ok", 1).unwrap(),
            parse_line("2024-01-01 10:05:00 ERROR UserID:u2 timeout", 2).unwrap(),
        ]
    }

    #[tokio::test]
    async fn json_lines_sink_writes_one_object_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.jsonl");
        let sink = JsonLinesSink::new(&path);
        let written = sink.write_batch(&sample_records()).await.unwrap();
        assert_eq!(written, 2);

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["severity"], "INFO");
        assert_eq!(first["actor_id"], "u1");
        assert_eq!(first["message"], "login ok");
    }

    #[tokio::test]
    async fn json_lines_sink_appends_across_batches() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.jsonl");
        let sink = JsonLinesSink::new(&path);
        sink.write_batch(&sample_records()).await.unwrap();
        sink.write_batch(&sample_records()).await.unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 4);
    }

    #[tokio::test]
    async fn sink_failure_reports_attempted_count() {
        let sink = JsonLinesSink::new("/nonexistent-dir/records.jsonl");
        let err = sink.write_batch(&sample_records()).await.unwrap_err();
        match err {
            SiftError::Sink { attempted, .. } => assert_eq!(attempted, 2),
            other => panic!("expected sink error, got {other}"),
        }
    }
}
