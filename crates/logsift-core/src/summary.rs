//! Aggregate statistics over a filtered record sequence.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::types::{LogRecord, Severity, TIMESTAMP_FORMAT};

/// How the summary time span is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpanMode {
    /// First and last timestamp in arrival order. Matches the historical
    /// behavior: an unsorted input reports its sequence boundaries, not the
    /// chronological extremes.
    #[default]
    Arrival,
    /// True minimum and maximum timestamps.
    Chronological,
}

/// Reported (first, last) timestamp pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub first: NaiveDateTime,
    pub last: NaiveDateTime,
}

/// Per-severity record counts. The three canonical severities are always
/// present; records with a non-canonical severity are tallied under `other`
/// rather than dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SeverityCounts {
    pub info: u64,
    pub error: u64,
    pub warn: u64,
    pub other: u64,
}

/// Derived statistics for a record sequence. Recomputed on demand, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// `None` for an empty sequence (rendered as "N/A").
    pub span: Option<Span>,
    pub counts: SeverityCounts,
    /// Actor with the most records; ties go to the first-seen actor.
    /// `None` for an empty sequence (rendered as "N/A").
    pub most_active_actor: Option<String>,
}

/// Summarize with the default arrival-order span.
pub fn summarize(records: &[LogRecord]) -> Summary {
    summarize_with(records, SpanMode::Arrival)
}

/// Summarize a record sequence. Empty input returns the sentinel summary
/// (no span, zero counts, no actor) rather than an error.
pub fn summarize_with(records: &[LogRecord], mode: SpanMode) -> Summary {
    let span = match mode {
        SpanMode::Arrival => match (records.first(), records.last()) {
            (Some(first), Some(last)) => Some(Span {
                first: first.timestamp,
                last: last.timestamp,
            }),
            _ => None,
        },
        SpanMode::Chronological => {
            let min = records.iter().map(|r| r.timestamp).min();
            let max = records.iter().map(|r| r.timestamp).max();
            match (min, max) {
                (Some(first), Some(last)) => Some(Span { first, last }),
                _ => None,
            }
        }
    };

    let mut counts = SeverityCounts::default();
    for record in records {
        match &record.severity {
            Severity::Info => counts.info += 1,
            Severity::Error => counts.error += 1,
            Severity::Warn => counts.warn += 1,
            Severity::Other(_) => counts.other += 1,
        }
    }

    Summary {
        span,
        counts,
        most_active_actor: most_active_actor(records),
    }
}

/// Pick the actor with the highest record count. The tally is kept in
/// first-seen order and only a strictly greater count displaces the current
/// maximum, so ties resolve to the earliest-seen actor deterministically.
fn most_active_actor(records: &[LogRecord]) -> Option<String> {
    let mut tallies: Vec<(&str, u64)> = Vec::new();
    for record in records {
        match tallies.iter_mut().find(|(id, _)| *id == record.actor_id) {
            Some((_, count)) => *count += 1,
            None => tallies.push((&record.actor_id, 1)),
        }
    }

    let mut best: Option<(&str, u64)> = None;
    for &(id, count) in &tallies {
        if best.is_none_or(|(_, max)| count > max) {
            best = Some((id, count));
        }
    }
    best.map(|(id, _)| id.to_string())
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.span {
            Some(span) => writeln!(
                f,
                "Time Duration: {} - {}",
                span.first.format(TIMESTAMP_FORMAT),
                span.last.format(TIMESTAMP_FORMAT)
            )?,
            None => writeln!(f, "Time Duration: N/A")?,
        }
        write!(
            f,
            "Logs by Category: INFO={} ERROR={} WARN={}",
            self.counts.info, self.counts.error, self.counts.warn
        )?;
        if self.counts.other > 0 {
            write!(f, " OTHER={}", self.counts.other)?;
        }
        writeln!(f)?;
        write!(
            f,
            "Most Active User: {}",
            self.most_active_actor.as_deref().unwrap_or("N/A")
        )
    }
}
