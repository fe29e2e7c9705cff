//! CSV writers for the "Validations" and "Summary" tables.

use std::io::Write;
use std::path::Path;

use csv::Writer;

use pan_model::{Summary, ValidatedRecord};

use crate::error::{ReportError, Result};

/// Header row of the per-record output.
pub const VALIDATION_HEADERS: [&str; 3] = ["Pan_Numbers", "Status", "Failed_Rule"];

/// Header row of the summary output.
pub const SUMMARY_HEADERS: [&str; 4] = [
    "TOTAL PROCESSED RECORDS",
    "TOTAL VALID COUNT",
    "TOTAL INVALID COUNT",
    "TOTAL MISSING COUNT",
];

/// Write one row per validated record. Valid rows leave `Failed_Rule` empty.
pub fn write_validations<W: Write>(writer: W, records: &[ValidatedRecord]) -> csv::Result<()> {
    let mut csv = Writer::from_writer(writer);
    csv.write_record(VALIDATION_HEADERS)?;
    for record in records {
        let failed_rule = record
            .verdict
            .failed_rule()
            .map(|rule| rule.name())
            .unwrap_or("");
        csv.write_record([record.pan.as_str(), record.status().label(), failed_rule])?;
    }
    csv.flush()?;
    Ok(())
}

/// Write the single-row summary table.
pub fn write_summary<W: Write>(writer: W, summary: &Summary) -> csv::Result<()> {
    let mut csv = Writer::from_writer(writer);
    csv.write_record(SUMMARY_HEADERS)?;
    csv.write_record([
        summary.total_processed.to_string(),
        summary.valid_count.to_string(),
        summary.invalid_count.to_string(),
        summary.missing_count.to_string(),
    ])?;
    csv.flush()?;
    Ok(())
}

pub fn write_validations_csv(path: &Path, records: &[ValidatedRecord]) -> Result<()> {
    let file = create_file(path)?;
    write_validations(file, records).map_err(|source| ReportError::Csv {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_summary_csv(path: &Path, summary: &Summary) -> Result<()> {
    let file = create_file(path)?;
    write_summary(file, summary).map_err(|source| ReportError::Csv {
        path: path.to_path_buf(),
        source,
    })
}

fn create_file(path: &Path) -> Result<std::fs::File> {
    std::fs::File::create(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pan_model::{Rule, Verdict};

    fn render_validations(records: &[ValidatedRecord]) -> String {
        let mut buffer = Vec::new();
        write_validations(&mut buffer, records).expect("write validations");
        String::from_utf8(buffer).expect("utf8")
    }

    #[test]
    fn validations_table() {
        let records = vec![
            ValidatedRecord::new("ABCDE1234F", Verdict::valid()),
            ValidatedRecord::new("QQWER1234T", Verdict::invalid(Rule::AdjacentRepetition)),
            ValidatedRecord::new("AB,CD", Verdict::invalid(Rule::Length)),
        ];
        insta::assert_snapshot!(render_validations(&records), @r#"
        Pan_Numbers,Status,Failed_Rule
        ABCDE1234F,Valid,
        QQWER1234T,Invalid,adjacent-repetition
        "AB,CD",Invalid,length
        "#);
    }

    #[test]
    fn empty_validations_table_has_header_only() {
        assert_eq!(render_validations(&[]), "Pan_Numbers,Status,Failed_Rule\n");
    }

    #[test]
    fn summary_table() {
        let mut buffer = Vec::new();
        write_summary(&mut buffer, &Summary::from_counts(5, 1, 0)).expect("write summary");
        insta::assert_snapshot!(String::from_utf8(buffer).expect("utf8"), @r"
        TOTAL PROCESSED RECORDS,TOTAL VALID COUNT,TOTAL INVALID COUNT,TOTAL MISSING COUNT
        5,1,0,4
        ");
    }
}
