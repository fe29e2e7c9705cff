use std::collections::BTreeMap;
use std::path::Path;

use chrono::Utc;
use serde::Serialize;

use pan_model::{Rule, Status, Summary, ValidationOptions, ValidationOutcome};
use pan_validate::failures_by_rule;

use crate::error::{ReportError, Result};

pub const REPORT_SCHEMA: &str = "pan-validator/validation-report";
pub const REPORT_SCHEMA_VERSION: u32 = 1;

/// Machine-readable report of a validation run.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub source: String,
    pub column: &'a str,
    pub options: &'a ValidationOptions,
    pub summary: Summary,
    pub failures_by_rule: BTreeMap<&'static str, usize>,
    pub records: Vec<JsonRecord<'a>>,
}

#[derive(Debug, Serialize)]
pub struct JsonRecord<'a> {
    pub pan: &'a str,
    pub status: Status,
    pub failed_rule: Option<Rule>,
    pub rule_id: Option<&'static str>,
}

impl<'a> JsonReport<'a> {
    pub fn new(
        source: &Path,
        column: &'a str,
        options: &'a ValidationOptions,
        outcome: &'a ValidationOutcome,
    ) -> Self {
        let failures = failures_by_rule(&outcome.records)
            .into_iter()
            .map(|(rule, count)| (rule.id(), count))
            .collect();
        let records = outcome
            .records
            .iter()
            .map(|record| JsonRecord {
                pan: &record.pan,
                status: record.status(),
                failed_rule: record.verdict.failed_rule(),
                rule_id: record.verdict.failed_rule().map(|rule| rule.id()),
            })
            .collect();
        Self {
            schema: REPORT_SCHEMA,
            schema_version: REPORT_SCHEMA_VERSION,
            generated_at: Utc::now().to_rfc3339(),
            source: source.display().to_string(),
            column,
            options,
            summary: outcome.summary,
            failures_by_rule: failures,
            records,
        }
    }
}

pub fn write_report_json(path: &Path, report: &JsonReport<'_>) -> Result<()> {
    let json = serde_json::to_string_pretty(report).map_err(|source| ReportError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, format!("{json}\n")).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })
}
