//! JSON Lines record input: one `UrlRecord` object per line.
//!
//! ```text
//! {"loc":"https://example.com/a","lastmod":"2024-01-01T00:00:00Z","changefreq":"weekly","priority":0.8}
//! {"loc":"https://example.com/b","images":["https://cdn.example.com/b.jpg"]}
//! ```
//!
//! Only `loc` is required; see [`UrlRecord`] for the defaults.

use anyhow::{Context, Result};
use std::io::{BufRead, Lines};

use crate::record::UrlRecord;

/// Iterator over records read from `reader`. Blank lines are skipped.
pub fn read_records<R: BufRead>(reader: R) -> RecordLines<R> {
    RecordLines {
        lines: reader.lines(),
        line_no: 0,
    }
}

pub struct RecordLines<R> {
    lines: Lines<R>,
    line_no: usize,
}

impl<R: BufRead> Iterator for RecordLines<R> {
    type Item = Result<UrlRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.lines.next()?;
            self.line_no += 1;
            let line_no = self.line_no;
            let parsed = line
                .with_context(|| format!("failed to read input line {line_no}"))
                .and_then(|text| {
                    if text.trim().is_empty() {
                        return Ok(None);
                    }
                    serde_json::from_str::<UrlRecord>(&text)
                        .map(Some)
                        .with_context(|| format!("invalid record on line {line_no}"))
                });
            match parsed {
                Ok(Some(record)) => return Some(Ok(record)),
                Ok(None) => continue,
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
