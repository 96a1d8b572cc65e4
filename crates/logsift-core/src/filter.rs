//! Severity and time-range filtering over record sequences.

use chrono::NaiveDateTime;

use crate::types::{LogRecord, Severity};

/// Compound filter criteria. Every field is optional and independent;
/// an absent field passes all records.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Exact severity to keep.
    pub level: Option<Severity>,
    /// Inclusive lower timestamp bound.
    pub start: Option<NaiveDateTime>,
    /// Inclusive upper timestamp bound.
    pub end: Option<NaiveDateTime>,
}

impl FilterCriteria {
    /// Single-record predicate. Shared with any query surface so the
    /// matching logic lives in one place.
    pub fn matches(&self, record: &LogRecord) -> bool {
        if let Some(level) = &self.level
            && record.severity != *level
        {
            return false;
        }
        if let Some(start) = self.start
            && record.timestamp < start
        {
            return false;
        }
        if let Some(end) = self.end
            && record.timestamp > end
        {
            return false;
        }
        true
    }

    /// Keep matching records, preserving input order.
    pub fn apply(&self, records: Vec<LogRecord>) -> Vec<LogRecord> {
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}
