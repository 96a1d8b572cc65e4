//! Fixed-format log line parser.
//!
//! Expected shape: `YYYY-MM-DD HH:MM:SS LEVEL UserID:<id> message...`
//! The first three fields are positional; the actor tag is the first token of
//! the remainder and the message is everything after it. Parsing either
//! yields a complete [`LogRecord`] or a [`ParseFailure`] carrying the raw
//! line — never a panic, never a partial record.

use chrono::NaiveDateTime;

use crate::types::{LogRecord, ParseFailure, Severity, TIMESTAMP_FORMAT};

/// Parse a single log line.
///
/// The severity token is taken verbatim (no closed-set validation here —
/// see [`Severity::from_token`]). The actor id is the substring of the
/// remainder's first token after its first `:`; a missing colon or empty id
/// fails the line. An empty remainder after the actor token yields a record
/// with an empty message.
pub fn parse_line(line: &str, line_number: usize) -> Result<LogRecord, ParseFailure> {
    let fail = || ParseFailure {
        line_number,
        raw: line.to_string(),
    };

    let mut parts = line.splitn(4, ' ');
    let (Some(date), Some(time), Some(level), Some(rest)) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(fail());
    };

    let timestamp = NaiveDateTime::parse_from_str(&format!("{date} {time}"), TIMESTAMP_FORMAT)
        .map_err(|_| fail())?;
    let severity = Severity::from_token(level);

    // First token of the remainder carries the actor tag, e.g. "UserID:u1".
    let actor_token = match rest.find(' ') {
        Some(idx) => &rest[..idx],
        None => rest,
    };
    let colon = actor_token.find(':').ok_or_else(fail)?;
    let actor_id = &actor_token[colon + 1..];
    if actor_id.is_empty() {
        return Err(fail());
    }

    // Everything past the actor token and one separating space.
    let message = rest.get(actor_token.len() + 1..).unwrap_or("");

    Ok(LogRecord {
        timestamp,
        severity,
        actor_id: actor_id.to_string(),
        message: message.to_string(),
    })
}

/// Parse every line of a source, splitting results into records and
/// failures. Blank lines are skipped; line numbers are 1-based.
pub fn parse_lines(lines: &[String]) -> (Vec<LogRecord>, Vec<ParseFailure>) {
    let mut records = Vec::new();
    let mut failures = Vec::new();
    for (idx, line) in lines.iter().enumerate() {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line, idx + 1) {
            Ok(record) => records.push(record),
            Err(failure) => failures.push(failure),
        }
    }
    (records, failures)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_well_formed_line() {
        let record = parse_line("2024-01-01 10:00:00 INFO UserID:u1 login ok", 1).unwrap();
        assert_eq!(record.timestamp_str(), "2024-01-01 10:00:00");
        assert_eq!(record.severity, Severity::Info);
        assert_eq!(record.actor_id, "u1");
        assert_eq!(record.message, "login ok");
    }

    #[test]
    fn parse_is_deterministic() {
        let line = "2024-01-01 10:05:00 ERROR UserID:u2 timeout";
        let first = parse_line(line, 1).unwrap();
        let second = parse_line(line, 1).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn parse_empty_message() {
        // Exactly four tokens — the remainder is the bare actor tag.
        let record = parse_line("2024-01-01 10:00:00 INFO UserID:u1", 1).unwrap();
        assert_eq!(record.actor_id, "u1");
        assert_eq!(record.message, "");
    }

    #[test]
    fn parse_message_with_punctuation() {
        let record = parse_line(
            "2024-01-01 10:00:00 WARN UserID:u3 disk 91% full, path=/var: check!",
            1,
        )
        .unwrap();
        assert_eq!(record.message, "disk 91% full, path=/var: check!");
    }

    #[test]
    fn parse_too_few_tokens_fails() {
        let err = parse_line("bad line", 3).unwrap_err();
        assert_eq!(err.line_number, 3);
        assert_eq!(err.raw, "bad line");
    }

    #[test]
    fn parse_missing_colon_fails() {
        assert!(parse_line("2024-01-01 10:00:00 INFO u1 login ok", 1).is_err());
    }

    #[test]
    fn parse_empty_actor_id_fails() {
        assert!(parse_line("2024-01-01 10:00:00 INFO UserID: login ok", 1).is_err());
    }

    #[test]
    fn parse_bad_timestamp_fails() {
        assert!(parse_line("2024-13-01 10:00:00 INFO UserID:u1 x", 1).is_err());
        assert!(parse_line("2024-01-01 10:00 INFO UserID:u1 x", 1).is_err());
        assert!(parse_line("01/01/2024 10:00:00 INFO UserID:u1 x", 1).is_err());
    }

    #[test]
    fn parse_unrecognized_severity_is_kept() {
        let record = parse_line("2024-01-01 10:00:00 TRACE UserID:u1 probe", 1).unwrap();
        assert_eq!(record.severity, Severity::Other("TRACE".to_string()));
    }

    #[test]
    fn parse_lines_splits_records_and_failures() {
        let lines = vec![
            "2024-01-01 10:00:00 INFO UserID:u1 login ok".to_string(),
            "2024-01-01 10:05:00 ERROR UserID:u2 timeout".to_string(),
            "bad line".to_string(),
        ];
        let (records, failures) = parse_lines(&lines);
        assert_eq!(records.len(), 2);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].line_number, 3);
        assert_eq!(failures[0].raw, "bad line");
    }

    #[test]
    fn parse_lines_skips_blank_lines() {
        let lines = vec![
            "2024-01-01 10:00:00 INFO UserID:u1 a".to_string(),
            String::new(),
            "   ".to_string(),
            "2024-01-01 10:01:00 INFO UserID:u1 b".to_string(),
        ];
        let (records, failures) = parse_lines(&lines);
        assert_eq!(records.len(), 2);
        assert!(failures.is_empty());
    }
}
