use std::path::Path;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use qset_cli::commands::{CheckReport, FmtOutcome, ShowReport};
use qset_model::QuestionKind;

pub fn print_check(report: &CheckReport) {
    if let Some(issue) = &report.issue {
        println!("{}: {issue}", issue.class().label());
    } else if let Some(set) = &report.set {
        println!("ok: \"{}\" with {} question(s)", set.name, set.questions.len());
    }
}

pub fn print_fmt(path: &Path, outcome: &FmtOutcome, check: bool) {
    if check {
        if outcome.changed {
            println!("would rewrite {}", path.display());
        } else {
            println!("{} is canonical", path.display());
        }
    } else if outcome.changed {
        println!("rewrote {}", path.display());
    }
}

pub fn print_show(report: &ShowReport) {
    println!("Name: {}", report.set.name);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Id"),
        header_cell("Question"),
        header_cell("Type"),
        header_cell("Options"),
        header_cell("Note"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (position, question) in report.set.questions.iter().enumerate() {
        table.add_row(vec![
            Cell::new(position + 1),
            Cell::new(&question.id),
            Cell::new(&question.question),
            kind_cell(&question.kind),
            options_cell(question.options.as_deref()),
            text_cell(&question.note),
        ]);
    }
    println!("{table}");
    println!("{} question(s)", report.set.questions.len());
    if let Some(issue) = &report.issue {
        eprintln!("warning: {issue}");
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Unknown kinds render as plain text inputs downstream, so flag them.
fn kind_cell(kind: &str) -> Cell {
    if QuestionKind::parse(kind).is_some() {
        Cell::new(kind)
    } else {
        Cell::new(kind).fg(Color::Yellow)
    }
}

fn options_cell(options: Option<&[String]>) -> Cell {
    match options {
        Some(list) => Cell::new(list.join(", ")),
        None => dim_cell("-"),
    }
}

fn text_cell(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
