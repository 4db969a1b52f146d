//! Per-file lifecycle: `NoFile` → `Open` → closed.

use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::encode::{URLSET_END, URLSET_START};
use crate::error::{Result, SitemapError};

/// File state owned by the writer. `Open` always has `links < limit`; a file
/// that reaches the limit is finished immediately instead of stored.
pub(super) enum FileState<W: Write = File> {
    NoFile,
    Open(OpenFile<W>),
}

impl<W: Write> Default for FileState<W> {
    fn default() -> Self {
        FileState::NoFile
    }
}

/// A data file in progress: gzip stream over the sink, plus the number of
/// `<url>` entries written to it.
pub(super) struct OpenFile<W: Write = File> {
    encoder: GzEncoder<W>,
    name: String,
    path: PathBuf,
    links: usize,
}

impl OpenFile {
    /// Create (or truncate) `dir/name`, start the gzip stream and write the
    /// urlset header. On error the handle is dropped and nothing is kept.
    pub(super) fn create(dir: &Path, name: String, level: Compression) -> Result<Self> {
        let path = dir.join(&name);
        let file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .map_err(|source| SitemapError::FileOpen {
                path: path.clone(),
                source,
            })?;
        OpenFile::start(file, name, path, level)
    }
}

impl<W: Write> OpenFile<W> {
    /// Wrap `sink` in a gzip stream and write the urlset header.
    fn start(sink: W, name: String, path: PathBuf, level: Compression) -> Result<Self> {
        let mut encoder = GzEncoder::new(sink, level);
        if let Err(source) = encoder.write_all(URLSET_START.as_bytes()) {
            return Err(SitemapError::HeaderWrite { path, source });
        }

        Ok(OpenFile {
            encoder,
            name,
            path,
            links: 0,
        })
    }

    pub(super) fn name(&self) -> &str {
        &self.name
    }

    pub(super) fn links(&self) -> usize {
        self.links
    }

    /// Write one encoded entry and count it.
    pub(super) fn record_link(&mut self, entry: &[u8]) -> Result<()> {
        self.encoder
            .write_all(entry)
            .map_err(|source| SitemapError::BodyWrite {
                path: self.path.clone(),
                source,
            })?;
        self.links += 1;
        Ok(())
    }

    /// Write the closing tag and finish the gzip stream (trailer + flush).
    /// The sink is released when this returns, on success or error.
    pub(super) fn finish(mut self) -> Result<()> {
        let path = self.path;
        let close_err = |source: io::Error| SitemapError::StreamClose {
            path: path.clone(),
            source,
        };
        self.encoder
            .write_all(URLSET_END.as_bytes())
            .map_err(close_err)?;
        let mut sink = self.encoder.finish().map_err(close_err)?;
        sink.flush().map_err(close_err)?;
        Ok(())
    }
}

/// `Open` → `Open` or, at `limit` entries, `Open` → closed → `NoFile`.
///
/// Consumes the file: if the entry cannot be written the stream is dropped
/// here, so the caller is left in `NoFile` and the next entry starts a new
/// file.
pub(super) fn append_entry<W: Write>(
    mut file: OpenFile<W>,
    entry: &[u8],
    limit: usize,
) -> Result<FileState<W>> {
    if let Err(err) = file.record_link(entry) {
        tracing::warn!(file = file.name(), error = %err, "abandoning sitemap file after write failure");
        return Err(err);
    }

    if file.links() == limit {
        tracing::debug!(file = file.name(), links = file.links(), "link limit reached, rotating");
        file.finish()?;
        return Ok(FileState::NoFile);
    }

    Ok(FileState::Open(file))
}
