//! Roster parser for `name,score1,score2,...` text files.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, error, warn};

use crate::error::RosterError;
use crate::record::{ClassSnapshot, MalformedScore, StudentRecord};

/// Parses a roster from any reader.
///
/// Lines with fewer than two fields are skipped. Score tokens that are not
/// non-negative finite numbers are dropped with a warning, and a line left
/// with no scores produces no record.
pub fn parse_roster<R: Read>(reader: R) -> ClassSnapshot {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut snapshot = ClassSnapshot::default();
    let mut row = StringRecord::new();

    loop {
        match rdr.read_record(&mut row) {
            Ok(false) => break,
            Ok(true) => {
                let line = row.position().map_or(0, |p| p.line());
                parse_line(line, &row, &mut snapshot);
            }
            Err(e) if e.is_io_error() => {
                error!(error = %e, "Roster read interrupted");
                break;
            }
            Err(e) => {
                warn!(error = %e, "Skipping undecodable roster line");
            }
        }
    }

    debug!(
        records = snapshot.records.len(),
        warnings = snapshot.warnings.len(),
        "Roster parsed"
    );
    snapshot
}

fn parse_line(line: u64, row: &StringRecord, snapshot: &mut ClassSnapshot) {
    if row.len() < 2 {
        return;
    }

    let name = row[0].trim_start();
    let mut scores = Vec::with_capacity(row.len() - 1);

    for raw in row.iter().skip(1) {
        let token = raw.trim();
        match parse_score(token) {
            Some(score) => scores.push(score),
            None => {
                warn!(line, student = %name, token = %token, "Invalid score, skipping");
                snapshot.warnings.push(MalformedScore {
                    line,
                    name: name.to_string(),
                    token: token.to_string(),
                });
            }
        }
    }

    if let Some(record) = StudentRecord::new(name, scores) {
        snapshot.records.push(record);
    }
}

fn parse_score(token: &str) -> Option<f64> {
    token
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// Opens and parses the roster at `path`.
///
/// # Errors
///
/// Returns [`RosterError::MissingSource`] if the file cannot be opened.
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn try_load_roster(path: &Path) -> Result<ClassSnapshot, RosterError> {
    let file = File::open(path).map_err(|source| RosterError::MissingSource {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_roster(file))
}

/// Like [`try_load_roster`], but reports a missing file and yields an empty
/// snapshot.
pub fn load_roster(path: &Path) -> ClassSnapshot {
    try_load_roster(path).unwrap_or_else(|e| {
        error!(error = %e, "Roster unavailable, continuing with no records");
        ClassSnapshot::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn parse(text: &str) -> ClassSnapshot {
        parse_roster(text.as_bytes())
    }

    #[test]
    fn test_parse_valid_line() {
        let snapshot = parse("Alice,90,85,95\n");

        assert_eq!(snapshot.records.len(), 1);
        let alice = &snapshot.records[0];
        assert_eq!(alice.name(), "Alice");
        assert_eq!(alice.scores(), &[90.0, 85.0, 95.0]);
        assert_eq!(alice.average(), 90.0);
        assert!(snapshot.warnings.is_empty());
    }

    #[test]
    fn test_parse_drops_malformed_token() {
        let snapshot = parse("Bob,abc,70\n");

        assert_eq!(snapshot.records.len(), 1);
        assert_eq!(snapshot.records[0].name(), "Bob");
        assert_eq!(snapshot.records[0].scores(), &[70.0]);
        assert_eq!(
            snapshot.warnings,
            vec![MalformedScore {
                line: 1,
                name: "Bob".to_string(),
                token: "abc".to_string(),
            }]
        );
    }

    #[test]
    fn test_parse_fully_malformed_line_yields_no_record() {
        let snapshot = parse("Carol,xx,yy\n");

        assert!(snapshot.records.is_empty());
        assert_eq!(snapshot.warnings.len(), 2);
    }

    #[test]
    fn test_parse_skips_short_and_blank_lines() {
        let snapshot = parse("Dave\n\n   \nEve,80\n");

        assert_eq!(snapshot.records.len(), 1);
        assert_eq!(snapshot.records[0].name(), "Eve");
        assert!(snapshot.warnings.is_empty());
    }

    #[test]
    fn test_parse_trims_whitespace_and_crlf() {
        let snapshot = parse("  Frank , 88 ,92\r\nGina,75\r\n");

        assert_eq!(snapshot.records.len(), 2);
        assert_eq!(snapshot.records[0].name(), "Frank ");
        assert_eq!(snapshot.records[0].scores(), &[88.0, 92.0]);
        assert_eq!(snapshot.records[1].scores(), &[75.0]);
    }

    #[test]
    fn test_parse_rejects_negative_and_non_finite() {
        let snapshot = parse("Hal,-5,NaN,inf,60\n");

        assert_eq!(snapshot.records[0].scores(), &[60.0]);
        let tokens: Vec<_> = snapshot.warnings.iter().map(|w| w.token.as_str()).collect();
        assert_eq!(tokens, vec!["-5", "NaN", "inf"]);
    }

    #[test]
    fn test_parse_trailing_comma_warns_on_empty_token() {
        let snapshot = parse("Ivy,90,\n");

        assert_eq!(snapshot.records[0].scores(), &[90.0]);
        assert_eq!(snapshot.warnings[0].token, "");
    }

    #[test]
    fn test_parse_keeps_duplicate_names() {
        let snapshot = parse("Jo,70\nJo,80\n");
        assert_eq!(snapshot.records.len(), 2);
    }

    #[test]
    fn test_warning_line_numbers() {
        let snapshot = parse("A,1\nB,x,2\n");
        assert_eq!(snapshot.warnings[0].line, 2);
    }

    #[test]
    fn test_try_load_missing_file() {
        let path = env::temp_dir().join("gradebook_test_definitely_missing.txt");
        let _ = fs::remove_file(&path);

        let err = try_load_roster(&path).unwrap_err();
        assert!(matches!(err, RosterError::MissingSource { .. }));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_load_missing_file_recovers_empty() {
        let path = env::temp_dir().join("gradebook_test_also_missing.txt");
        let _ = fs::remove_file(&path);

        assert!(load_roster(&path).is_empty());
    }

    #[test]
    fn test_load_reads_file() {
        let path = env::temp_dir().join("gradebook_test_load.txt");
        fs::write(&path, "Alice,90,85,95\nBob,abc,70\n").unwrap();

        let snapshot = load_roster(&path);
        assert_eq!(snapshot.records.len(), 2);

        fs::remove_file(&path).unwrap();
    }
}
