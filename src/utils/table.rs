//! Table rendering utilities for CLI outputs.

pub struct Column {
    pub header: String,
    pub min_width: usize,
}

impl Column {
    pub fn new(header: &str, min_width: usize) -> Self {
        Self {
            header: header.to_string(),
            min_width,
        }
    }
}

/// Plain-text table. Cell widths are measured on the visible text, so
/// callers must colorize after layout (see [`Table::render_with`]).
pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
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

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| c.chars().count())
                    .chain([col.header.chars().count(), col.min_width])
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        self.render_with(|_, _, cell| cell.to_string())
    }

    /// Render, letting `decorate(row, col, padded_cell)` wrap each body cell
    /// (e.g. with ANSI colors) after padding has been applied.
    pub fn render_with<F>(&self, decorate: F) -> String
    where
        F: Fn(usize, usize, &str) -> String,
    {
        let widths = self.widths();
        let mut out = String::new();

        let header: Vec<String> = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{:<w$}", c.header, w = *w))
            .collect();
        out.push_str(header.join(" ").trim_end());
        out.push('\n');

        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push_str(&rule.join(" "));
        out.push('\n');

        for (r, row) in self.rows.iter().enumerate() {
            let cells: Vec<String> = widths
                .iter()
                .enumerate()
                .map(|(c, w)| {
                    let raw = row.get(c).map(String::as_str).unwrap_or("");
                    decorate(r, c, &format!("{:<w$}", raw, w = *w))
                })
                .collect();
            out.push_str(cells.join(" ").trim_end());
            out.push('\n');
        }

        out
    }
}
