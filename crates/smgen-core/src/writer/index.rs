//! `sitemap-index.xml` output.

use chrono::{DateTime, Utc};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::encode::{encode_index_entry, INDEX_END, INDEX_START};
use crate::error::{Result, SitemapError};

/// Write the index listing `files` in order, each at `base_url/<file>`.
/// `base_url` is joined verbatim with a single `/`. Every I/O failure here,
/// including opening the file, is `IndexWrite`.
pub(super) fn write_index_file(
    path: &Path,
    base_url: &str,
    files: &[String],
    now: &DateTime<Utc>,
) -> Result<()> {
    let write_err = |source: io::Error| SitemapError::IndexWrite {
        path: path.to_path_buf(),
        source,
    };
    let file = File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(write_err)?;
    let mut out = BufWriter::new(file);

    out.write_all(INDEX_START.as_bytes()).map_err(write_err)?;
    for name in files {
        let entry = encode_index_entry(&format!("{base_url}/{name}"), now)?;
        out.write_all(&entry).map_err(write_err)?;
    }
    out.write_all(INDEX_END.as_bytes()).map_err(write_err)?;
    out.flush().map_err(write_err)?;
    Ok(())
}
