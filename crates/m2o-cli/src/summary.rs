//! Terminal rendering of matrices and run results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use m2o_catalog::Matrix;
use m2o_model::NOT_APPLICABLE;

use crate::commands::RunResult;

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

/// Render the family's selection grid: one row per product, one column
/// per (upholstery type, color), a check mark where a variant exists.
pub fn print_matrix(matrix: &Matrix) {
    println!("Family: {}", matrix.family);
    let mut table = Table::new();
    apply_table_style(&mut table);
    let mut header = vec![header_cell("Product")];
    for column in &matrix.columns {
        header.push(header_cell(&format!(
            "{}\n{}",
            column.upholstery_type, column.upholstery_color
        )));
    }
    table.set_header(header);
    for (row_idx, product) in matrix.products.iter().enumerate() {
        let mut row = vec![Cell::new(product)];
        for col_idx in 0..matrix.columns.len() {
            let mark = if matrix.is_present(row_idx, col_idx) {
                "x"
            } else {
                ""
            };
            row.push(Cell::new(mark).set_alignment(CellAlignment::Center));
        }
        table.add_row(row);
    }
    println!("{table}");
}

/// Render the result of a plan run: notices first, then the resolved
/// items and where they went.
pub fn print_run_summary(result: &RunResult) {
    for notice in &result.notices {
        println!("note: {notice}");
    }
    println!("Family: {}", result.family);
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("Description"),
        header_cell("Item No"),
        header_cell("Article No"),
        header_cell("Base"),
    ]);
    for item in &result.items {
        table.add_row(vec![
            Cell::new(&item.description),
            Cell::new(&item.item_number),
            Cell::new(item.article_number.as_deref().unwrap_or("")),
            Cell::new(item.base_color.as_deref().unwrap_or(NOT_APPLICABLE)),
        ]);
    }
    println!("{table}");
    println!("Resolved items: {}", result.items.len());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run)"),
    }
}
