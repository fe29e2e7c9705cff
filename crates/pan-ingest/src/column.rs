use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use pan_model::Dataset;

use crate::error::{IngestError, Result};
use crate::options::IngestOptions;

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn find_column(headers: &[String], column: &str) -> Option<usize> {
    let wanted = normalize_header(column);
    headers
        .iter()
        .position(|header| header.eq_ignore_ascii_case(&wanted))
}

/// Read the identifier column of a CSV file into a [`Dataset`].
///
/// Cells are kept verbatim apart from missing markers, which load as `None`.
/// Rows shorter than the header also yield `None` for the column.
pub fn read_pan_column(path: &Path, options: &IngestOptions) -> Result<Dataset> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    read_column(file, path, options)
}

/// Read the identifier column from any reader (stdin, in-memory buffers).
pub fn read_pan_column_from_reader<R: Read>(
    reader: R,
    options: &IngestOptions,
) -> Result<Dataset> {
    read_column(reader, Path::new("<input>"), options)
}

fn read_column<R: Read>(source: R, path: &Path, options: &IngestOptions) -> Result<Dataset> {
    let csv_error = |source: csv::Error| IngestError::CsvParse {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(options.delimiter)
        .from_reader(source);
    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(normalize_header)
        .collect();
    if headers.is_empty() || headers.iter().all(String::is_empty) {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    let Some(index) = find_column(&headers, &options.column) else {
        return Err(IngestError::ColumnNotFound {
            column: options.column.clone(),
            path: path.to_path_buf(),
            available: headers.join(", "),
        });
    };

    let mut values = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        let value = match record.get(index) {
            Some(raw) if !options.is_missing_marker(raw) => Some(raw.to_string()),
            _ => None,
        };
        values.push(value);
    }
    let dataset = Dataset::new(headers[index].clone(), values);
    debug!(
        source = %path.display(),
        column = %dataset.column(),
        row_count = dataset.total_count(),
        "read identifier column"
    );
    Ok(dataset)
}
