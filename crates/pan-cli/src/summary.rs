use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use pan_cli::check::CheckRow;
use pan_cli::pipeline::PipelineResult;
use pan_model::{Status, ValidatedRecord};
use pan_validate::failures_by_rule;

pub fn print_summary(result: &PipelineResult, preview: usize) {
    println!("Input: {}", result.source.display());
    println!("Column: {}", result.column);
    print_output_paths(result);

    if preview > 0 && !result.outcome.records.is_empty() {
        print_preview_table(&result.outcome.records, preview);
    }

    let summary = result.outcome.summary;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Total processed records").add_attribute(Attribute::Bold),
        Cell::new(summary.total_processed).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Valid"),
        count_cell(summary.valid_count, Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Invalid"),
        count_cell(summary.invalid_count, Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Missing"),
        count_cell(summary.missing_count, Color::Yellow),
    ]);
    table.add_row(vec![
        dim_cell("  empty values"),
        dim_cell(result.dropped_empty),
    ]);
    table.add_row(vec![
        dim_cell("  duplicates"),
        dim_cell(result.dropped_duplicates),
    ]);
    println!("{table}");
    print_rule_table(&result.outcome.records);
}

fn print_output_paths(result: &PipelineResult) {
    let outputs = &result.outputs;
    if outputs.is_empty() {
        println!("Output: none (dry run)");
        return;
    }
    println!("Output: {}", result.output_dir.display());
    for path in [&outputs.validations, &outputs.summary, &outputs.json]
        .into_iter()
        .flatten()
    {
        println!("  {}", file_label(path));
    }
}

fn file_label(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

fn print_preview_table(records: &[ValidatedRecord], limit: usize) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("PAN"),
        header_cell("Status"),
        header_cell("Failed rule"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    for (index, record) in records.iter().take(limit).enumerate() {
        table.add_row(vec![
            dim_cell(index + 1),
            Cell::new(&record.pan),
            status_cell(record.status()),
            rule_cell(record.verdict.failed_rule().map(|rule| rule.name())),
        ]);
    }
    println!("{table}");
    if records.len() > limit {
        println!("... {} more records", records.len() - limit);
    }
}

fn print_rule_table(records: &[ValidatedRecord]) {
    let failures = failures_by_rule(records);
    if failures.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Rule"),
        header_cell("Failures"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for (rule, count) in failures {
        table.add_row(vec![
            Cell::new(rule.id()),
            Cell::new(rule.name()),
            count_cell(count, Color::Red),
        ]);
    }
    println!("{table}");
}

pub fn print_check_table(rows: &[CheckRow]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Input"),
        header_cell("PAN"),
        header_cell("Status"),
        header_cell("Failed rule"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    for row in rows {
        let (pan_cell, status, rule) = match (&row.normalized, row.verdict) {
            (Some(pan), Some(verdict)) => (
                Cell::new(pan),
                status_cell(verdict.status()),
                rule_cell(verdict.failed_rule().map(|rule| rule.name())),
            ),
            _ => (
                dim_cell("-"),
                Cell::new("Missing").fg(Color::Yellow),
                dim_cell("empty"),
            ),
        };
        table.add_row(vec![Cell::new(&row.input), pan_cell, status, rule]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn status_cell(status: Status) -> Cell {
    let color = match status {
        Status::Valid => Color::Green,
        Status::Invalid => Color::Red,
    };
    Cell::new(status.label())
        .fg(color)
        .add_attribute(Attribute::Bold)
}

fn rule_cell(rule: Option<&str>) -> Cell {
    match rule {
        Some(name) => Cell::new(name),
        None => dim_cell("-"),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count).fg(color)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
