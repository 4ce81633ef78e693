//! Listing formatting: aligned text table and JSON.

use crate::listing::DirectoryListing;

/// Extra spaces after the widest cell of each column.
pub const TABLE_SPACING: usize = 5;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
}

/// Format a directory listing in the specified output format.
#[must_use]
pub fn format_listing(listing: &DirectoryListing, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => format_json(listing),
        OutputFormat::Table => format_table(listing),
    }
}

fn format_json(listing: &DirectoryListing) -> String {
    serde_json::to_string_pretty(listing).unwrap_or_else(|_| "{}".to_string())
}

fn format_table(listing: &DirectoryListing) -> String {
    if listing.rows.is_empty() {
        return "(no files)\n".to_string();
    }

    let headers: Vec<&str> = std::iter::once("Filenames")
        .chain(listing.columns.iter().map(|c| c.header()))
        .collect();
    let rows: Vec<Vec<&str>> = listing
        .rows
        .iter()
        .map(|row| {
            std::iter::once(row.name.as_str())
                .chain(row.stats.iter().map(String::as_str))
                .collect()
        })
        .collect();

    // Column widths: widest cell (header included) plus spacing
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }
    for w in &mut widths {
        *w += TABLE_SPACING;
    }

    let mut output = String::new();

    // Header
    for (i, header) in headers.iter().enumerate() {
        output.push_str(&format!("{:<width$}", header, width = widths[i]));
    }
    output.push('\n');

    // Separator
    output.push_str(&"-".repeat(widths.iter().sum()));
    output.push('\n');

    // Rows
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            output.push_str(&format!("{:<width$}", cell, width = widths[i]));
        }
        output.push('\n');
    }

    output
}
