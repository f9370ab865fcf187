//! Table formatting utilities

use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, *};

/// Table formatter
pub struct TableFormatter;

impl TableFormatter {
    /// Create a new table with default styling
    pub fn new() -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic);
        table
    }

    /// Create a table with headers and rows, right-aligning the listed columns
    pub fn simple(headers: &[&str], rows: Vec<Vec<String>>, numeric_columns: &[usize]) -> String {
        let mut table = Self::new();
        table.set_header(headers.to_vec());

        for row in rows {
            table.add_row(row);
        }

        for &index in numeric_columns {
            if let Some(column) = table.column_mut(index) {
                column.set_cell_alignment(CellAlignment::Right);
            }
        }

        table.to_string()
    }
}
