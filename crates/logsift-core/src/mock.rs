//! Test doubles — in-memory log source and record sink.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{SiftError, SiftResult};
use crate::sink::RecordSink;
use crate::source::LogSource;
use crate::types::LogRecord;

/// A mock log source that serves pre-loaded content by path.
pub struct MockLogSource {
    files: HashMap<String, Vec<String>>,
}

impl MockLogSource {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
        }
    }

    /// Add a file with the given lines.
    pub fn add_file(&mut self, path: impl Into<String>, lines: Vec<String>) {
        self.files.insert(path.into(), lines);
    }

    /// Create a mock with a sample application log: well-formed lines in the
    /// canonical shape plus two malformed ones.
    pub fn with_app_sample() -> Self {
        let mut m = Self::new();
        m.add_file(
            "/var/log/app.log",
            vec![
                "2024-03-07 09:15:02 INFO UserID:alice session opened".into(),
                "2024-03-07 09:15:40 WARN UserID:bob quota at 85%".into(),
                "2024-03-07 09:16:11 ERROR UserID:alice payment gateway timeout".into(),
                "2024-03-07 09:17:03 INFO UserID:carol profile updated".into(),
                "corrupted entry without structure".into(),
                "2024-03-07 09:18:27 INFO UserID:alice session closed".into(),
                "2024-03-07 09:19:00 ERROR UserID:bob upload failed: disk full".into(),
                "09:20:00 INFO UserID:dave missing date".into(),
            ],
        );
        m
    }
}

impl Default for MockLogSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LogSource for MockLogSource {
    async fn read_lines(&self, path: &str) -> SiftResult<Vec<String>> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| SiftError::NotFound(path.to_string()))
    }

    async fn exists(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }
}

/// A record sink that collects batches in memory.
pub struct MemorySink {
    records: Mutex<Vec<LogRecord>>,
    /// When set, every write fails with this message.
    fail_with: Option<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            fail_with: None,
        }
    }

    /// Create a sink whose writes always fail, for error-path tests.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            fail_with: Some(message.into()),
        }
    }

    /// Snapshot of everything written so far.
    pub fn stored(&self) -> Vec<LogRecord> {
        self.records.lock().expect("sink mutex poisoned").clone()
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordSink for MemorySink {
    async fn write_batch(&self, records: &[LogRecord]) -> SiftResult<usize> {
        if let Some(message) = &self.fail_with {
            return Err(SiftError::Sink {
                attempted: records.len(),
                message: message.clone(),
            });
        }
        let mut stored = self.records.lock().expect("sink mutex poisoned");
        stored.extend_from_slice(records);
        Ok(records.len())
    }
}
