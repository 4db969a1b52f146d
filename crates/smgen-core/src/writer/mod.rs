//! Rotating sitemap writer.
//!
//! Opens `file-1.gz` lazily on the first `add_url`, streams each encoded entry
//! into it, and rotates to `file-2.gz`, `file-3.gz`, ... whenever the per-file
//! link limit is reached. `write_index` finishes the current file and lists
//! every produced file in `sitemap-index.xml`.
//!
//! Single-threaded and blocking. A failed run is not rolled back; callers
//! that need atomic output should write to a scratch directory and rename it.

mod index;
mod state;

use chrono::{DateTime, Utc};
use flate2::Compression;
use std::fs;
use std::path::{Path, PathBuf};

use crate::encode::encode_url;
use crate::error::{Result, SitemapError};
use crate::record::UrlRecord;

use state::{FileState, OpenFile};

/// Name of the index file written into the output directory.
pub const INDEX_FILENAME: &str = "sitemap-index.xml";

/// Name of the `n`th data file (1-based).
pub fn data_filename(n: usize) -> String {
    format!("file-{n}.gz")
}

/// Streams `<url>` entries into gzip data files and writes the sitemap index.
pub struct SitemapWriter {
    output_dir: PathBuf,
    links_per_file: usize,
    compression: Compression,
    files: Vec<String>,
    state: FileState,
}

impl SitemapWriter {
    /// Writer for `output_dir` with at most `links_per_file` entries per data
    /// file. Nothing touches the filesystem until the first `add_url`.
    pub fn new(output_dir: impl Into<PathBuf>, links_per_file: usize) -> Result<Self> {
        if links_per_file == 0 {
            return Err(SitemapError::InvalidLinkLimit);
        }
        Ok(SitemapWriter {
            output_dir: output_dir.into(),
            links_per_file,
            compression: Compression::default(),
            files: Vec::new(),
            state: FileState::NoFile,
        })
    }

    /// Gzip level for data files opened from now on.
    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn links_per_file(&self) -> usize {
        self.links_per_file
    }

    /// Data files produced so far, in creation order. Includes the file in
    /// progress, if any.
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// True while a data file is open and accepting entries.
    pub fn is_open(&self) -> bool {
        matches!(self.state, FileState::Open(_))
    }

    /// Append one entry, opening a new data file first if none is open and
    /// rotating once the file holds `links_per_file` entries.
    ///
    /// An encode error has no side effects. If writing the entry fails, the
    /// current file is abandoned (handle released, file left truncated on
    /// disk) and the next call starts a new file.
    pub fn add_url(&mut self, record: &UrlRecord) -> Result<()> {
        let entry = encode_url(record)?;

        let file = match std::mem::take(&mut self.state) {
            FileState::Open(file) => file,
            FileState::NoFile => self.open_next()?,
        };
        self.state = state::append_entry(file, &entry, self.links_per_file)?;
        Ok(())
    }

    /// Finish the data file in progress. No-op when none is open, so it is
    /// safe to call repeatedly.
    pub fn close(&mut self) -> Result<()> {
        match std::mem::take(&mut self.state) {
            FileState::NoFile => Ok(()),
            FileState::Open(file) => {
                tracing::debug!(file = file.name(), links = file.links(), "closing sitemap file");
                file.finish()
            }
        }
    }

    /// Close the current file and write `sitemap-index.xml`, stamping every
    /// entry with the current time (read once per call).
    pub fn write_index(&mut self, base_url: &str) -> Result<()> {
        self.write_index_at(base_url, Utc::now())
    }

    /// Same as `write_index`, with an explicit `<lastmod>` for every entry.
    pub fn write_index_at(&mut self, base_url: &str, now: DateTime<Utc>) -> Result<()> {
        self.close()?;
        self.ensure_output_dir()?;
        let path = self.index_path();
        index::write_index_file(&path, base_url, &self.files, &now)?;
        tracing::info!(path = %path.display(), files = self.files.len(), "wrote sitemap index");
        Ok(())
    }

    /// Full path of `sitemap-index.xml`.
    pub fn index_path(&self) -> PathBuf {
        self.output_dir.join(INDEX_FILENAME)
    }

    /// `NoFile` → `Open`: register the next filename only once the header is
    /// on its way to disk.
    fn open_next(&mut self) -> Result<OpenFile> {
        self.ensure_output_dir()?;
        let name = data_filename(self.files.len() + 1);
        let file = OpenFile::create(&self.output_dir, name, self.compression)?;
        tracing::debug!(file = file.name(), dir = %self.output_dir.display(), "opened sitemap file");
        self.files.push(file.name().to_string());
        Ok(file)
    }

    fn ensure_output_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.output_dir).map_err(|source| SitemapError::CreateDir {
            path: self.output_dir.clone(),
            source,
        })
    }
}
