pub mod config;
pub mod logging;

pub mod encode;
pub mod error;
pub mod input;
pub mod record;
pub mod writer;

pub use error::{Result, SitemapError};
pub use record::{ChangeFreq, UrlRecord};
pub use writer::{SitemapWriter, INDEX_FILENAME};
