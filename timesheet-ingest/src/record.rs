//! Record validation: raw log fields into an attributed effort entry.

use chrono::NaiveDate;
use timesheet_core::{EffortEntry, ProjectAttributor};

use crate::types::{RawRecord, RecordError, RecordIssue, MIN_FIELDS};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Split a tag field on commas. Pieces are trimmed; empty pieces are dropped.
///
/// Unlike a raw split, `"alpha, beta"` yields `beta` rather than `" beta"`, and
/// a field of only commas or spaces yields no tags (the catch-all project).
pub fn split_tags(field: &str) -> Vec<String> {
    field
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a strict `YYYY-MM-DD` date: zero-padded, unsigned, nothing around it.
pub fn parse_log_date(text: &str) -> Option<NaiveDate> {
    let bytes = text.as_bytes();
    let shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shaped {
        return None;
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT).ok()
}

/// Validate one record.
///
/// Structure is checked first. Date and effort are then both checked so the
/// error names every bad field. Effort is taken as-is: zero and negative
/// values are accepted.
pub fn validate_record(
    record: &RawRecord,
    attributor: &ProjectAttributor,
) -> Result<EffortEntry, RecordError> {
    let fields = &record.fields;
    if fields.len() < MIN_FIELDS {
        return Err(RecordError {
            issues: vec![RecordIssue::TooFewFields { found: fields.len() }],
        });
    }

    let date_text = fields[0].trim();
    let effort_text = fields[1].trim();

    let date = parse_log_date(date_text);
    let effort = effort_text.parse::<f64>().ok();

    let (date, amount) = match (date, effort) {
        (Some(d), Some(e)) => (d, e),
        (date, effort) => {
            let mut issues = Vec::new();
            if date.is_none() {
                issues.push(RecordIssue::MalformedDate(date_text.to_string()));
            }
            if effort.is_none() {
                issues.push(RecordIssue::MalformedEffort(effort_text.to_string()));
            }
            return Err(RecordError { issues });
        }
    };

    Ok(EffortEntry::attributed(
        attributor,
        date,
        amount,
        fields[2].trim(),
        split_tags(&fields[3]),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(fields: &[&str]) -> Result<EffortEntry, RecordError> {
        validate_record(&RawRecord::new(fields.iter().copied()), &ProjectAttributor::default())
    }

    #[test]
    fn test_valid_record() {
        let e = validate(&["2024-01-10", "1.0", "standup", "alpha"]).unwrap();
        assert_eq!(e.date, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
        assert_eq!(e.amount, 1.0);
        assert_eq!(e.project, "alpha");
        assert_eq!(e.label, "standup");
    }

    #[test]
    fn test_too_few_fields() {
        let err = validate(&["2024-01-10", "1.0", "x"]).unwrap_err();
        assert_eq!(err.issues, vec![RecordIssue::TooFewFields { found: 3 }]);
    }

    #[test]
    fn test_both_bad_fields_reported() {
        let err = validate(&["not-a-date", "abc", "", "alpha"]).unwrap_err();
        assert_eq!(
            err.issues,
            vec![
                RecordIssue::MalformedDate("not-a-date".to_string()),
                RecordIssue::MalformedEffort("abc".to_string()),
            ]
        );
        assert!(err.to_string().contains("not-a-date"));
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn test_single_bad_field() {
        let err = validate(&["2024-13-01", "1", "", ""]).unwrap_err();
        assert_eq!(err.issues.len(), 1);
        let err = validate(&["2024-01-01", "one", "", ""]).unwrap_err();
        assert_eq!(err.issues, vec![RecordIssue::MalformedEffort("one".to_string())]);
    }

    #[test]
    fn test_date_must_be_zero_padded_and_unsigned() {
        for bad in ["2024-1-5", "+2024-01-05", "2024-01-5", "2024/01/05", "20240-1-05"] {
            let err = validate(&[bad, "1.0", "", "alpha"]).unwrap_err();
            assert_eq!(err.issues, vec![RecordIssue::MalformedDate(bad.to_string())], "{bad}");
        }
        assert_eq!(
            parse_log_date("2024-02-29"),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
        assert_eq!(parse_log_date("2023-02-29"), None);
    }

    #[test]
    fn test_empty_tags_go_to_catch_all() {
        let e = validate(&["2024-01-10", "0.5", "", ""]).unwrap();
        assert_eq!(e.project, "unassigned");
        assert!(e.tags.is_empty());
    }

    #[test]
    fn test_tags_split_and_trimmed() {
        let e = validate(&["2024-01-10", "0.5", "", "alpha, beta ,,gamma"]).unwrap();
        assert_eq!(e.tags, vec!["alpha", "beta", "gamma"]);
        assert_eq!(e.project, "alpha");
    }

    #[test]
    fn test_negative_and_zero_effort_pass_through() {
        assert_eq!(validate(&["2024-01-10", "-0.5", "", "a"]).unwrap().amount, -0.5);
        assert_eq!(validate(&["2024-01-10", "0", "", "a"]).unwrap().amount, 0.0);
    }
}
