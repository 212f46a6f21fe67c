//! Table rendering utilities for CLI outputs.

use crate::utils::colors::strip_ansi;
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

/// Pad a cell to a display width, accounting for wide characters.
/// Escape codes are stripped before measuring so colored cells line up.
fn pad(cell: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(strip_ansi(cell).as_str());
    let fill = width.saturating_sub(w);
    format!("{}{}", cell, " ".repeat(fill))
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        self.render_inner(None)
    }

    /// Render with a separator line between header and rows, built from the
    /// configured separator character.
    pub fn render_with_separator(&self, sep: &str) -> String {
        self.render_inner(Some(sep))
    }

    fn render_inner(&self, sep: Option<&str>) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad(&col.header, col.width));
            out.push(' ');
        }
        out.push('\n');

        if let Some(sep) = sep {
            let total: usize = self.columns.iter().map(|c| c.width + 1).sum();
            out.push_str(&sep.repeat(total.max(1)));
            out.push('\n');
        }

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                out.push_str(&pad(&row[i], col.width));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}
