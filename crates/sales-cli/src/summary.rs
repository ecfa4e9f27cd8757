use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::pipeline::{CleanOutcome, ColumnMapping};

/// Render the per-stage row counts of a run.
pub fn render_summary(outcome: &CleanOutcome) -> String {
    let mut lines = vec![format!("Input: {}", outcome.input.display())];
    match &outcome.output {
        Some(path) => lines.push(format!("Output: {}", path.display())),
        None => lines.push("Output: - (dry run)".to_string()),
    }
    if let Some(path) = &outcome.report_path {
        lines.push(format!("Report: {}", path.display()));
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Stage"),
        header_cell("Rows in"),
        header_cell("Rows out"),
        header_cell("Dropped"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for record in &outcome.report.stages {
        table.add_row(vec![
            Cell::new(record.stage.as_str()).fg(Color::Blue),
            Cell::new(record.rows_in),
            Cell::new(record.rows_out),
            dropped_cell(record.dropped()),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(outcome.report.input_rows()).add_attribute(Attribute::Bold),
        Cell::new(outcome.report.output_rows()).add_attribute(Attribute::Bold),
        dropped_cell(outcome.report.dropped_rows()).add_attribute(Attribute::Bold),
    ]);
    lines.push(table.to_string());
    lines.join("\n")
}

pub fn print_summary(outcome: &CleanOutcome) {
    println!("{}", render_summary(outcome));
}

/// Render the raw → normalized header mapping.
pub fn render_columns(mappings: &[ColumnMapping]) -> String {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Raw header"),
        header_cell("Normalized"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    for mapping in mappings {
        let status = if mapping.collides {
            Cell::new("DUPLICATE")
                .fg(Color::Red)
                .add_attribute(Attribute::Bold)
        } else if mapping.raw == mapping.normalized {
            dim_cell("-")
        } else {
            Cell::new("renamed").fg(Color::Yellow)
        };
        table.add_row(vec![
            // Quote so surrounding whitespace stays visible.
            Cell::new(format!("{:?}", mapping.raw)),
            Cell::new(&mapping.normalized),
            status,
        ]);
    }
    table.to_string()
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
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn dropped_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
