//! PAN validation pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: read the identifier column from the input CSV
//! 2. **Clean**: normalize, drop blanks and duplicates
//! 3. **Validate**: classify every surviving identifier and summarize
//! 4. **Output**: write the validations and summary tables (and JSON report)
//!
//! Each stage takes the output of the previous stage and returns typed results.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, trace};

use pan_clean::clean;
use pan_ingest::{IngestOptions, read_pan_column, read_pan_column_from_reader};
use pan_model::{
    CleanedDataset, Dataset, OutputFormat, OutputPaths, ValidationOptions, ValidationOutcome,
};
use pan_report::{OutputConfig, write_outputs};
use pan_validate::validate_dataset;

use crate::logging::redact_value;

/// Inputs for one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub ingest: IngestOptions,
    pub validation: ValidationOptions,
    pub formats: Vec<OutputFormat>,
    pub dry_run: bool,
}

/// Input path that reads from standard input.
pub const STDIN_PATH: &str = "-";

/// Everything a run produced.
#[derive(Debug)]
pub struct PipelineResult {
    pub source: PathBuf,
    pub column: String,
    pub output_dir: PathBuf,
    pub dropped_empty: usize,
    pub dropped_duplicates: usize,
    pub outcome: ValidationOutcome,
    pub outputs: OutputPaths,
}

impl PipelineResult {
    /// Whether the run should end with a failing exit code.
    pub fn fails(&self, fail_on_invalid: bool) -> bool {
        fail_on_invalid && self.outcome.summary.invalid_count > 0
    }
}

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// Load the identifier column from a file, or from stdin for `-`.
pub fn ingest(input: &Path, options: &IngestOptions) -> Result<Dataset> {
    let ingest_span = info_span!("ingest", source = %input.display());
    let _ingest_guard = ingest_span.enter();
    let ingest_start = Instant::now();

    let dataset = if is_stdin(input) {
        read_pan_column_from_reader(io::stdin().lock(), options)
    } else {
        read_pan_column(input, options)
    }
    .with_context(|| format!("read identifier column from {}", input.display()))?;
    info!(
        column = %dataset.column(),
        total_records = dataset.total_count(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(dataset)
}

// ============================================================================
// Stage 2: Clean
// ============================================================================

/// Normalize, drop blanks and deduplicate.
pub fn clean_stage(dataset: &Dataset) -> CleanedDataset {
    let clean_span = info_span!("clean", column = %dataset.column());
    let _clean_guard = clean_span.enter();
    let clean_start = Instant::now();

    let cleaned = clean(dataset);
    info!(
        total_records = cleaned.total_count(),
        unique_records = cleaned.len(),
        dropped_empty = cleaned.dropped_empty(),
        dropped_duplicates = cleaned.dropped_duplicates(),
        duration_ms = clean_start.elapsed().as_millis(),
        "clean complete"
    );
    cleaned
}

// ============================================================================
// Stage 3: Validate
// ============================================================================

/// Classify the cleaned records.
pub fn validate(cleaned: &CleanedDataset, options: &ValidationOptions) -> ValidationOutcome {
    let validation_span = info_span!("validate", sequential_check = %options.sequential_check);
    let _validation_guard = validation_span.enter();
    let validation_start = Instant::now();

    let outcome = validate_dataset(cleaned, options);
    for record in outcome.invalid() {
        trace!(
            pan = %redact_value(&record.pan),
            rule = ?record.verdict.failed_rule(),
            "invalid identifier"
        );
    }
    let summary = outcome.summary;
    info!(
        total_processed = summary.total_processed,
        valid_count = summary.valid_count,
        invalid_count = summary.invalid_count,
        missing_count = summary.missing_count,
        duration_ms = validation_start.elapsed().as_millis(),
        "validation complete"
    );
    outcome
}

// ============================================================================
// Stage 4: Output
// ============================================================================

/// Write the requested outputs (nothing on a dry run).
pub fn output(
    config: &PipelineConfig,
    column: &str,
    outcome: &ValidationOutcome,
) -> Result<OutputPaths> {
    write_outputs(OutputConfig {
        output_dir: &config.output_dir,
        source: &config.input,
        column,
        options: &config.validation,
        outcome,
        formats: &config.formats,
        dry_run: config.dry_run,
    })
    .with_context(|| format!("write outputs to {}", config.output_dir.display()))
}

/// Run every stage in order.
pub fn run(config: &PipelineConfig) -> Result<PipelineResult> {
    let dataset = ingest(&config.input, &config.ingest)?;
    let cleaned = clean_stage(&dataset);
    let outcome = validate(&cleaned, &config.validation);
    let outputs = output(config, dataset.column(), &outcome)?;
    Ok(PipelineResult {
        source: config.input.clone(),
        column: dataset.column().to_string(),
        output_dir: config.output_dir.clone(),
        dropped_empty: cleaned.dropped_empty(),
        dropped_duplicates: cleaned.dropped_duplicates(),
        outcome,
        outputs,
    })
}

pub fn is_stdin(input: &Path) -> bool {
    input.as_os_str() == STDIN_PATH
}

/// Default output directory: `output` next to the input file.
pub fn default_output_dir(input: &Path) -> PathBuf {
    input
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("output"), |parent| parent.join("output"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_dir_sits_next_to_input() {
        assert_eq!(
            default_output_dir(Path::new("data/pans.csv")),
            PathBuf::from("data/output")
        );
        assert_eq!(
            default_output_dir(Path::new("pans.csv")),
            PathBuf::from("output")
        );
        assert_eq!(
            default_output_dir(Path::new(STDIN_PATH)),
            PathBuf::from("output")
        );
    }

    #[test]
    fn dash_means_stdin() {
        assert!(is_stdin(Path::new("-")));
        assert!(!is_stdin(Path::new("./-")));
        assert!(!is_stdin(Path::new("pans.csv")));
    }
}
