//! Table rendering for CLI outputs. Widths are computed on display width so
//! CJK memo text keeps the columns aligned.

use unicode_width::UnicodeWidthStr;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.width()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.width());
                }
            }
        }
        widths
    }

    fn pad(cell: &str, width: usize) -> String {
        let fill = width.saturating_sub(cell.width());
        format!("{}{}", cell, " ".repeat(fill))
    }

    /// Render plain rows; callers apply per-line coloring themselves.
    pub fn render_lines(&self) -> Vec<String> {
        let widths = self.widths();

        let mut lines = Vec::with_capacity(self.rows.len() + 2);

        let header = self
            .headers
            .iter()
            .enumerate()
            .map(|(i, h)| Self::pad(h, widths[i]))
            .collect::<Vec<_>>()
            .join("  ");
        let separator = "-".repeat(header.width());
        lines.push(header);
        lines.push(separator);

        for row in &self.rows {
            let line = row
                .iter()
                .enumerate()
                .map(|(i, cell)| Self::pad(cell, widths.get(i).copied().unwrap_or(0)))
                .collect::<Vec<_>>()
                .join("  ");
            lines.push(line.trim_end().to_string());
        }

        lines
    }
}
