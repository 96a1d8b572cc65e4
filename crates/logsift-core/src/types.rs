//! Core record types shared across the pipeline.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::SiftError;

/// The one timestamp format accepted on input and produced on output.
/// No timezone, second precision.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ── Severity ──────────────────────────────────────────────────

/// Log severity. The canonical set is INFO, ERROR, WARN; the parser keeps
/// any other token verbatim in [`Severity::Other`] rather than rejecting the
/// line, so an off-set value surfaces in the summary's `other` bucket instead
/// of vanishing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    #[serde(rename = "INFO")]
    Info,
    #[serde(rename = "ERROR")]
    Error,
    #[serde(rename = "WARN")]
    Warn,
    /// Token outside the canonical set, preserved as parsed.
    #[serde(untagged)]
    Other(String),
}

impl Severity {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Info => "INFO",
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Other(token) => token,
        }
    }

    /// Parse a token from a log line. Never fails — unrecognized tokens
    /// become [`Severity::Other`].
    pub fn from_token(token: &str) -> Self {
        match token {
            "INFO" => Self::Info,
            "ERROR" => Self::Error,
            "WARN" => Self::Warn,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn is_canonical(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

/// Strict parse for filter arguments — only the canonical three are valid.
impl FromStr for Severity {
    type Err = SiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INFO" => Ok(Self::Info),
            "ERROR" => Ok(Self::Error),
            "WARN" => Ok(Self::Warn),
            other => Err(SiftError::UnknownLevel(other.to_string())),
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Log Record ────────────────────────────────────────────────

/// A fully parsed log line. Constructed only when all four fields are
/// present — partial records do not exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Event instant, second precision, no timezone.
    pub timestamp: NaiveDateTime,
    /// Severity level.
    pub severity: Severity,
    /// Identifier of the user or subject the line refers to. Never empty.
    pub actor_id: String,
    /// Free-form message text. May be empty.
    pub message: String,
}

impl LogRecord {
    /// Timestamp rendered in the canonical input format.
    pub fn timestamp_str(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

// ── Parse Failure ─────────────────────────────────────────────

/// A line that could not be parsed, kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseFailure {
    /// 1-based line number in the source.
    pub line_number: usize,
    /// The original raw line.
    pub raw: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_token_round_trip() {
        assert_eq!(Severity::from_token("INFO"), Severity::Info);
        assert_eq!(Severity::from_token("ERROR"), Severity::Error);
        assert_eq!(Severity::from_token("WARN"), Severity::Warn);
        assert_eq!(Severity::from_token("INFO").as_str(), "INFO");
    }

    #[test]
    fn severity_unrecognized_preserved_verbatim() {
        let sev = Severity::from_token("TRACE");
        assert_eq!(sev, Severity::Other("TRACE".to_string()));
        assert_eq!(sev.as_str(), "TRACE");
        assert!(!sev.is_canonical());
    }

    #[test]
    fn severity_strict_parse_rejects_unknown() {
        assert!("INFO".parse::<Severity>().is_ok());
        assert!("DEBUG".parse::<Severity>().is_err());
        assert!("info".parse::<Severity>().is_err());
    }

    #[test]
    fn severity_serializes_as_plain_token() {
        assert_eq!(serde_json::to_string(&Severity::Warn).unwrap(), "\"WARN\"");
        assert_eq!(
            serde_json::to_string(&Severity::Other("TRACE".into())).unwrap(),
            "\"TRACE\""
        );
    }

    #[test]
    fn record_timestamp_render() {
        let record = LogRecord {
            timestamp: chrono::NaiveDateTime::parse_from_str(
                "2024-01-01 10:00:00",
                TIMESTAMP_FORMAT,
            )
            .unwrap(),
            severity: Severity::Info,
            actor_id: "u1".into(),
            message: "login ok".into(),
        };
        assert_eq!(record.timestamp_str(), "2024-01-01 10:00:00");
    }
}
