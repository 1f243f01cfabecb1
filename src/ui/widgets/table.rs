//! Left-aligned column layout for register listings

use crate::ui::primitives::text::ColoredText;

use super::visible_width;

#[derive(Debug, Clone, Default)]
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

    /// Cells may already carry ANSI styling
    pub fn add_row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn render(&self, supports_color: bool) -> String {
        let columns = self.headers.len();
        let mut widths: Vec<usize> = self.headers.iter().map(|h| visible_width(h)).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate().take(columns) {
                widths[i] = widths[i].max(visible_width(cell));
            }
        }

        let mut out = String::new();
        let header: Vec<String> = self.headers.iter().map(String::clone).collect();
        let header = layout(&header, &widths);
        out.push_str(&ColoredText::dim(header).render(supports_color));
        out.push('\n');

        for row in &self.rows {
            out.push_str(&layout(row, &widths));
            out.push('\n');
        }
        out
    }
}

fn layout(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::new();
    for (i, width) in widths.iter().enumerate() {
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        line.push_str(cell);
        if i + 1 < widths.len() {
            line.push_str(&" ".repeat(width.saturating_sub(visible_width(cell)) + 2));
        }
    }
    line.trim_end().to_string()
}
