//! Error type for sitemap writing.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of a sitemap writer operation. Nothing is retried or rolled back:
/// a failed run may leave a truncated `file-N.gz` or index on disk.
#[derive(Debug, Error)]
pub enum SitemapError {
    /// The writer was configured with a per-file link limit of zero.
    #[error("per-file link limit must be at least 1")]
    InvalidLinkLimit,

    #[error("failed to create output directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Opening a data file failed.
    #[error("failed to open {}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write urlset header to {}", .path.display())]
    HeaderWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// XML serialization of a single entry failed.
    #[error("failed to encode sitemap entry: {0}")]
    Encode(String),

    #[error("failed to write entry to {}", .path.display())]
    BodyWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing the closing tag or finishing the gzip stream failed.
    #[error("failed to close {}", .path.display())]
    StreamClose {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Opening or writing `sitemap-index.xml` failed.
    #[error("failed to write sitemap index {}", .path.display())]
    IndexWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SitemapError>;
