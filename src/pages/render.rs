//! Text rendering primitives
//!
//! Plain-text building blocks shared by the pages: stat lines, aligned
//! tables and banners.

use std::fmt::Write;

/// Column alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// A simple aligned text table
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<(String, Align)>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new() -> Self {
        Self {
            headers: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Add a left-aligned column
    pub fn column(mut self, header: impl Into<String>) -> Self {
        self.headers.push((header.into(), Align::Left));
        self
    }

    /// Add a right-aligned (numeric) column
    pub fn numeric(mut self, header: impl Into<String>) -> Self {
        self.headers.push((header.into(), Align::Right));
        self
    }

    pub fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn render(&self) -> String {
        let widths: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(i, (header, _))| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();
        let header_cells: Vec<String> = self.headers.iter().map(|(h, _)| h.clone()).collect();
        self.write_line(&mut out, &header_cells, &widths);

        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        self.write_line(&mut out, &rule, &widths);

        for row in &self.rows {
            self.write_line(&mut out, row, &widths);
        }
        out
    }

    fn write_line(&self, out: &mut String, cells: &[String], widths: &[usize]) {
        let line: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, width)| {
                let cell = cells.get(i).map(String::as_str).unwrap_or("");
                let pad = width.saturating_sub(cell.chars().count());
                match self.headers[i].1 {
                    Align::Left => format!("{}{}", cell, " ".repeat(pad)),
                    Align::Right => format!("{}{}", " ".repeat(pad), cell),
                }
            })
            .collect();
        let _ = writeln!(out, "{}", line.join("  ").trim_end());
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

/// `label: value` pairs on one line, e.g. `Activities: 4 | Minutes: 175`
pub fn stat_line(stats: &[(&str, String)]) -> String {
    stats
        .iter()
        .map(|(label, value)| format!("{}: {}", label, value))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Page heading with underline
pub fn heading(title: &str) -> String {
    format!("{}\n{}\n", title, "=".repeat(title.chars().count()))
}

/// Section heading inside a page
pub fn section(title: &str) -> String {
    format!("\n{}\n{}\n", title, "-".repeat(title.chars().count()))
}

/// Error banner naming the failure reason
pub fn error_banner(message: &str) -> String {
    format!("[!] Error loading data: {}\n", message)
}

/// Whole number, rounded half away from zero. Non-finite input renders `0`.
pub fn whole(value: f64) -> String {
    if value.is_finite() {
        format!("{}", value.round() as i64)
    } else {
        "0".to_string()
    }
}

/// Optional number: whole values without decimals, others with one
pub fn number_or_dash(value: Option<f64>) -> String {
    match value {
        Some(v) if v.fract() == 0.0 => whole(v),
        Some(v) => format!("{:.1}", v),
        None => "-".to_string(),
    }
}

/// Optional text or a dash
pub fn text_or_dash(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_alignment() {
        let mut table = Table::new().column("Team").numeric("Points");
        table.row(vec!["DC".to_string(), "800".to_string()]);
        table.row(vec!["Marvel".to_string(), "75".to_string()]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Team    Points");
        assert_eq!(lines[1], "------  ------");
        assert_eq!(lines[2], "DC         800");
        assert_eq!(lines[3], "Marvel      75");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_whole_rounding() {
        assert_eq!(whole(0.0), "0");
        assert_eq!(whole(2.5), "3");
        assert_eq!(whole(374.4), "374");
        assert_eq!(whole(f64::NAN), "0");
    }

    #[test]
    fn test_number_or_dash() {
        assert_eq!(number_or_dash(Some(30.0)), "30");
        assert_eq!(number_or_dash(Some(12.34)), "12.3");
        assert_eq!(number_or_dash(None), "-");
    }

    #[test]
    fn test_stat_line() {
        let line = stat_line(&[("Activities", "4".to_string()), ("Minutes", "175".to_string())]);
        assert_eq!(line, "Activities: 4 | Minutes: 175");
    }
}
