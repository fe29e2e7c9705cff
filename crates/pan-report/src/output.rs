use std::path::Path;
use std::time::Instant;

use tracing::{info, info_span};

use pan_model::{OutputFormat, OutputPaths, ValidationOptions, ValidationOutcome};

use crate::csv_output::{write_summary_csv, write_validations_csv};
use crate::error::{ReportError, Result};
use crate::json::{JsonReport, write_report_json};

pub const VALIDATIONS_FILE_NAME: &str = "pan_validations.csv";
pub const SUMMARY_FILE_NAME: &str = "summary.csv";
pub const JSON_REPORT_FILE_NAME: &str = "pan_validation_report.json";

/// Everything needed to write the outputs of one run.
#[derive(Debug, Clone, Copy)]
pub struct OutputConfig<'a> {
    pub output_dir: &'a Path,
    pub source: &'a Path,
    pub column: &'a str,
    pub options: &'a ValidationOptions,
    pub outcome: &'a ValidationOutcome,
    pub formats: &'a [OutputFormat],
    pub dry_run: bool,
}

/// Write the requested formats into the output directory.
///
/// A dry run writes nothing and returns empty paths.
pub fn write_outputs(config: OutputConfig<'_>) -> Result<OutputPaths> {
    let output_span = info_span!("output", output_dir = %config.output_dir.display());
    let _output_guard = output_span.enter();
    let output_start = Instant::now();
    let mut paths = OutputPaths::default();

    if config.dry_run {
        info!(
            record_count = config.outcome.records.len(),
            duration_ms = output_start.elapsed().as_millis(),
            "output skipped (dry run)"
        );
        return Ok(paths);
    }

    std::fs::create_dir_all(config.output_dir).map_err(|source| ReportError::Io {
        path: config.output_dir.to_path_buf(),
        source,
    })?;

    let want_csv = config
        .formats
        .iter()
        .any(|f| matches!(f, OutputFormat::Csv));
    let want_json = config
        .formats
        .iter()
        .any(|f| matches!(f, OutputFormat::Json));

    if want_csv {
        let validations = config.output_dir.join(VALIDATIONS_FILE_NAME);
        write_validations_csv(&validations, &config.outcome.records)?;
        paths.validations = Some(validations);

        let summary = config.output_dir.join(SUMMARY_FILE_NAME);
        write_summary_csv(&summary, &config.outcome.summary)?;
        paths.summary = Some(summary);
    }

    if want_json {
        let json = config.output_dir.join(JSON_REPORT_FILE_NAME);
        let report = JsonReport::new(
            config.source,
            config.column,
            config.options,
            config.outcome,
        );
        write_report_json(&json, &report)?;
        paths.json = Some(json);
    }

    info!(
        record_count = config.outcome.records.len(),
        csv = want_csv,
        json = want_json,
        duration_ms = output_start.elapsed().as_millis(),
        "output complete"
    );
    Ok(paths)
}
