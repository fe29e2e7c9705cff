//! CLI argument definitions for the PAN validator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use pan_ingest::DEFAULT_PAN_COLUMN;
use pan_model::SequentialCheck;

#[derive(Parser)]
#[command(
    name = "pan-validator",
    version,
    about = "PAN validator - Clean, deduplicate and validate PAN identifiers",
    long_about = "Clean, deduplicate and validate Indian Permanent Account Numbers.\n\n\
                  Reads one column of a CSV file, normalizes and deduplicates it, then \
                  classifies every identifier as Valid or Invalid.\n\
                  Writes a per-record table, a summary table and an optional JSON report."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Show the emitting module in log lines.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,

    /// Include identifier values in log events.
    ///
    /// PAN values are personal data and are redacted from logs by default.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean, deduplicate and validate the identifier column of a CSV file.
    Validate(ValidateArgs),

    /// Validate identifiers given on the command line.
    Check(CheckArgs),

    /// List the validation rules in evaluation order.
    Rules,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Path to the input CSV file, or `-` to read from stdin.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Header of the identifier column (matched case-insensitively).
    #[arg(long = "column", value_name = "NAME", default_value = DEFAULT_PAN_COLUMN)]
    pub column: String,

    /// Field delimiter of the input file.
    #[arg(long = "delimiter", value_name = "CHAR", default_value_t = ',')]
    pub delimiter: char,

    /// Output directory for generated files (default: <INPUT dir>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Output format to generate.
    #[arg(long = "format", value_enum, default_value = "csv")]
    pub format: OutputFormatArg,

    /// How the sequential rule reads an identifier (whole or segments).
    #[arg(long = "sequential-check", value_name = "MODE", default_value = "whole")]
    pub sequential_check: SequentialCheck,

    /// Number of validated records to print.
    #[arg(long = "preview", value_name = "N", default_value_t = 10)]
    pub preview: usize,

    /// Validate and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Exit with code 1 when any identifier is invalid.
    #[arg(long = "fail-on-invalid")]
    pub fail_on_invalid: bool,

    /// Extra cell value to read as missing (repeatable).
    ///
    /// Added to the built-in markers such as `NA`, `N/A` and `null`.
    #[arg(long = "missing-marker", value_name = "TEXT")]
    pub missing_markers: Vec<String>,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Identifiers to validate.
    #[arg(value_name = "PAN", required = true)]
    pub pans: Vec<String>,

    /// How the sequential rule reads an identifier (whole or segments).
    #[arg(long = "sequential-check", value_name = "MODE", default_value = "whole")]
    pub sequential_check: SequentialCheck,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Csv,
    Json,
    Both,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
