//! Output writers for PAN validation runs.
//!
//! A run produces two tabular outputs, one row per validated identifier and a
//! one-row summary, plus an optional JSON report carrying both.

pub mod csv_output;
pub mod error;
pub mod json;
pub mod output;

pub use csv_output::{
    SUMMARY_HEADERS, VALIDATION_HEADERS, write_summary, write_summary_csv, write_validations,
    write_validations_csv,
};
pub use error::{ReportError, Result};
pub use json::{JsonReport, REPORT_SCHEMA, REPORT_SCHEMA_VERSION, write_report_json};
pub use output::{
    JSON_REPORT_FILE_NAME, OutputConfig, SUMMARY_FILE_NAME, VALIDATIONS_FILE_NAME, write_outputs,
};
