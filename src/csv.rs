// src/csv.rs
use std::io::{self, Write};
use std::mem::take;
use std::path::Path;

use crate::error::LoadError;

/* ---------------- Parsing ---------------- */

/// One parsed row plus the (1-based) line it started on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub line: usize,
    pub cells: Vec<String>,
}

/// Minimal CSV/TSV parser (quotes + CRLF tolerant).
/// Blank lines are dropped; an unterminated quote swallows the rest of the text.
pub fn parse_records(text: &str, sep: char) -> Vec<Record> {
    let mut records = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut line = 1usize;
    let mut row_start = 1usize;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    records.push(Record { line: row_start, cells: take(&mut row) });
                } else {
                    row.clear();
                }
                line += 1;
                row_start = line;
            }
            '\n' => {
                // newline inside quotes stays in the field
                field.push(ch);
                line += 1;
            }
            _ => field.push(ch),
        }
    }

    // Flush any trailing field/row even if quotes were unterminated.
    row.push(field);
    if !(row.len() == 1 && row[0].is_empty()) {
        records.push(Record { line: row_start, cells: row });
    }

    records
}

/// Cells only, no line numbers.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    parse_records(text, sep).into_iter().map(|r| r.cells).collect()
}

fn normalize_header(cell: &str) -> String {
    cell.trim_start_matches('\u{feff}').trim().to_ascii_lowercase()
}

/// Header-addressed table. Line 1 is the header row, always.
#[derive(Clone, Debug, Default)]
pub struct Table {
    pub headers: Vec<String>,
    /// Line the header row was read from; anything but 1 fails `require`.
    pub header_line: usize,
    pub rows: Vec<Record>,
}

impl Table {
    pub fn parse(text: &str, sep: char) -> Option<Self> {
        let mut records = parse_records(text, sep).into_iter();
        let header = records.next()?;
        Some(Self {
            headers: header.cells.iter().map(|c| normalize_header(c)).collect(),
            header_line: header.line,
            rows: records.collect(),
        })
    }

    /// Index of a column by (case-insensitive) name.
    pub fn column(&self, name: &str) -> Option<usize> {
        let want = normalize_header(name);
        self.headers.iter().position(|h| *h == want)
    }

    /// Resolve every required column or explain why not. If line 1 lacks them
    /// but some later row carries all of them, the header was displaced.
    pub fn require(&self, path: &Path, names: &[&str]) -> Result<Vec<usize>, LoadError> {
        // Blank lines above the header are dropped by the parser.
        if self.header_line != 1 {
            return Err(LoadError::DisplacedHeader { path: path.to_path_buf(), line: self.header_line });
        }
        let mut out = Vec::with_capacity(names.len());
        for name in names {
            match self.column(name) {
                Some(ix) => out.push(ix),
                None => {
                    if let Some(line) = self.displaced_header_line(names) {
                        return Err(LoadError::DisplacedHeader { path: path.to_path_buf(), line });
                    }
                    return Err(LoadError::MissingColumn { path: path.to_path_buf(), column: s!(*name) });
                }
            }
        }
        Ok(out)
    }

    fn displaced_header_line(&self, names: &[&str]) -> Option<usize> {
        let wanted: Vec<String> = names.iter().map(|n| normalize_header(n)).collect();
        self.rows
            .iter()
            .find(|r| {
                let cells: Vec<String> = r.cells.iter().map(|c| normalize_header(c)).collect();
                wanted.iter().all(|w| cells.contains(w))
            })
            .map(|r| r.line)
    }
}

/// Trimmed cell; missing columns and short rows read as "".
pub fn cell<'a>(record: &'a Record, col: Option<usize>) -> &'a str {
    col.and_then(|c| record.cells.get(c)).map(|s| s.trim()).unwrap_or("")
}

/// Like `cell`, but blank is `None`.
pub fn opt_cell(record: &Record, col: Option<usize>) -> Option<String> {
    let v = cell(record, col);
    if v.is_empty() { None } else { Some(s!(v)) }
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_fields_and_crlf() {
        let rows = parse_rows("a,\"b,c\",\"say \"\"hi\"\"\"\r\n1,2,3\r\n", ',');
        assert_eq!(rows, vec![
            vec![s!("a"), s!("b,c"), s!("say \"hi\"")],
            vec![s!("1"), s!("2"), s!("3")],
        ]);
    }

    #[test]
    fn blank_lines_dropped_and_lines_tracked() {
        let recs = parse_records("h1,h2\n\nx,\"multi\nline\"\ny,z", ',');
        let lines: Vec<usize> = recs.iter().map(|r| r.line).collect();
        assert_eq!(lines, vec![1, 3, 5]);
        assert_eq!(recs[1].cells[1], "multi\nline");
    }

    #[test]
    fn header_lookup_ignores_case_and_bom() {
        let t = Table::parse("\u{feff}Plot_ID, Section_Name\nCYA1,Church Yard\n", ',').unwrap();
        assert_eq!(t.column("plot_id"), Some(0));
        assert_eq!(t.column("section_name"), Some(1));
        assert_eq!(cell(&t.rows[0], t.column("section_name")), "Church Yard");
        assert_eq!(cell(&t.rows[0], t.column("purchaser")), "");
    }

    #[test]
    fn displaced_header_is_reported_with_its_line() {
        let t = Table::parse("CYA2,Church Yard\nplot_id,section_name\nCYA1,Church Yard\n", ',').unwrap();
        let err = t.require(Path::new("plots.csv"), &["plot_id"]).unwrap_err();
        assert!(matches!(err, LoadError::DisplacedHeader { line: 2, .. }));
    }

    #[test]
    fn blank_first_line_is_a_displaced_header() {
        let t = Table::parse("\nplot_id,section_name\nCYA1,Church Yard\n", ',').unwrap();
        assert_eq!(t.header_line, 2);
        let err = t.require(Path::new("plots.csv"), &["plot_id"]).unwrap_err();
        assert!(matches!(err, LoadError::DisplacedHeader { line: 2, .. }));
    }

    #[test]
    fn write_row_quotes_only_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, &["CYA1", "Smith, John", "plain"], ',').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "CYA1,\"Smith, John\",plain\n");
    }
}
