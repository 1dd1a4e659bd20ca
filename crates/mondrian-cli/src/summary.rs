use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use mondrian_model::Strategy;

use crate::types::RunSummary;

pub fn print_summary(summary: &RunSummary) {
    let strategy = strategy_name(summary.strategy);
    match &summary.output {
        Some(path) => println!(
            "Successful {strategy} anonymization. Output to: {}",
            path.display()
        ),
        None => println!("Successful {strategy} anonymization (dry run, no output written)."),
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_table_style(&mut table);
    add_metric(&mut table, "Strategy", strategy);
    add_metric(&mut table, "K", summary.k);
    add_metric(&mut table, "Records", summary.records);
    add_metric(&mut table, "Equivalence classes", summary.groups);
    add_metric(&mut table, "Smallest class", summary.smallest_group);
    add_metric(&mut table, "Largest class", summary.largest_group);
    add_metric(&mut table, "Elapsed", format!("{:.2?}", summary.elapsed));
    println!("{table}");
}

fn strategy_name(strategy: Strategy) -> &'static str {
    match strategy {
        Strategy::Strict => "strict",
        Strategy::Relaxed => "relaxed",
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn add_metric(table: &mut Table, name: &str, value: impl ToString) {
    table.add_row(vec![
        Cell::new(name),
        Cell::new(value.to_string()).set_alignment(CellAlignment::Right),
    ]);
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}
