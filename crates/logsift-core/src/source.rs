//! Log source abstraction — read raw lines from files or other backends.

use async_trait::async_trait;

use crate::error::{SiftError, SiftResult};

/// Abstraction for reading raw log lines. Enables mocking in tests and
/// swappable backends without touching the pipeline.
#[async_trait]
pub trait LogSource: Send + Sync {
    /// Read all lines from the given path/identifier.
    async fn read_lines(&self, path: &str) -> SiftResult<Vec<String>>;

    /// Check if a source path exists and is readable.
    async fn exists(&self, path: &str) -> bool;
}

/// Reads logs from the local filesystem.
pub struct FileLogSource;

#[async_trait]
impl LogSource for FileLogSource {
    async fn read_lines(&self, path: &str) -> SiftResult<Vec<String>> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SiftError::NotFound(path.to_string())
            } else {
                SiftError::Io(format!("{path}: {e}"))
            }
        })?;
        Ok(content.lines().map(String::from).collect())
    }

    async fn exists(&self, path: &str) -> bool {
        tokio::fs::metadata(path).await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn file_source_reads_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "2024-01-01 10:00:00 INFO UserID:u1 login ok").unwrap();
        writeln!(file, "bad line").unwrap();
        let source = FileLogSource;
        let lines = source
            .read_lines(file.path().to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "bad line");
    }

    #[tokio::test]
    async fn file_source_missing_path_is_not_found() {
        let source = FileLogSource;
        let err = source.read_lines("/nonexistent/app.log").await.unwrap_err();
        assert!(matches!(err, SiftError::NotFound(_)));
    }

    #[tokio::test]
    async fn file_source_exists() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let source = FileLogSource;
        assert!(source.exists(file.path().to_str().unwrap()).await);
        assert!(!source.exists("/nonexistent/app.log").await);
    }
}
