use anyhow::{Result, bail};
use comfy_table::Table;
use tracing::info_span;

use pan_cli::check::{CheckRow, check_values};
use pan_cli::pipeline::{PipelineConfig, PipelineResult, default_output_dir, run};
use pan_ingest::IngestOptions;
use pan_model::{OutputFormat, ValidationOptions};
use pan_validate::rule_catalog;

use crate::cli::{CheckArgs, OutputFormatArg, ValidateArgs};
use crate::summary::{apply_table_style, header_cell};

pub fn run_validate(args: &ValidateArgs) -> Result<PipelineResult> {
    let config = pipeline_config(args)?;
    let validate_span = info_span!("run", input = %config.input.display());
    let _validate_guard = validate_span.enter();
    run(&config)
}

pub fn run_check(args: &CheckArgs) -> Vec<CheckRow> {
    let options = ValidationOptions::new().with_sequential_check(args.sequential_check);
    check_values(&args.pans, &options)
}

pub fn run_rules() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Order"),
        header_cell("ID"),
        header_cell("Rule"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    for (index, rule) in rule_catalog().iter().enumerate() {
        table.add_row(vec![
            (index + 1).to_string(),
            rule.id().to_string(),
            rule.name().to_string(),
            rule.description().to_string(),
        ]);
    }
    println!("{table}");
}

fn pipeline_config(args: &ValidateArgs) -> Result<PipelineConfig> {
    if !args.delimiter.is_ascii() {
        bail!(
            "delimiter must be a single ASCII character, got '{}'",
            args.delimiter
        );
    }
    let mut ingest = IngestOptions::new()
        .with_column(args.column.clone())
        .with_delimiter(args.delimiter as u8);
    ingest
        .missing_markers
        .extend(args.missing_markers.iter().cloned());

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| default_output_dir(&args.input));

    Ok(PipelineConfig {
        input: args.input.clone(),
        output_dir,
        ingest,
        validation: ValidationOptions::new().with_sequential_check(args.sequential_check),
        formats: format_outputs(args.format),
        dry_run: args.dry_run,
    })
}

fn format_outputs(format: OutputFormatArg) -> Vec<OutputFormat> {
    match format {
        OutputFormatArg::Csv => vec![OutputFormat::Csv],
        OutputFormatArg::Json => vec![OutputFormat::Json],
        OutputFormatArg::Both => vec![OutputFormat::Csv, OutputFormat::Json],
    }
}
