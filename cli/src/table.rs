//! Plain-text rendering of the product table: one column per property, one row per product.

use sieve_core::{Product, Property};
use std::fmt::Write;

/// Render `products` under a header of capitalised property names, followed by an `N of M products`
/// footer. Cells are looked up by property id, so absent values leave an empty cell.
pub fn render_table(properties: &[Property], products: &[&Product], total: usize) -> String {
    let header: Vec<String> = properties.iter().map(Property::display_name).collect();
    let rows: Vec<Vec<String>> = products
        .iter()
        .map(|product| properties.iter().map(|p| product.value(p.id).map(|v| v.to_string()).unwrap_or_default()).collect())
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &rule, &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    let _ = writeln!(out, "{} of {} products", products.len(), total);
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells.iter().zip(widths).map(|(cell, width)| format!("{:<width$}", cell, width = *width)).collect();
    let _ = writeln!(out, "{}", line.join("  ").trim_end());
}
