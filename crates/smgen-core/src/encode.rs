//! XML encoding of sitemap entries.
//!
//! Entries are emitted as compact fragments (no declaration, no indentation)
//! so they can be streamed between the fixed set/index headers below.

use chrono::{DateTime, SecondsFormat, Utc};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::{Result, SitemapError};
use crate::record::UrlRecord;

/// Opening of every `file-N.gz`.
pub const URLSET_START: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8"?>"#,
    r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9""#,
    r#" xmlns:image="http://www.google.com/schemas/sitemap-image/1.1">"#,
);
pub const URLSET_END: &str = "</urlset>";

/// Opening of `sitemap-index.xml`.
pub const INDEX_START: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8"?>"#,
    r#"<sitemapindex xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#,
);
pub const INDEX_END: &str = "</sitemapindex>";

/// RFC 3339 with a `Z` suffix; fractional seconds only when non-zero.
pub fn format_lastmod(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Encode one `<url>` element.
///
/// Child order: `loc`, `lastmod`, `changefreq`, `priority`, then one
/// `<image:image><image:loc>` per image. Text is escaped by quick-xml; nothing
/// is validated.
pub fn encode_url(record: &UrlRecord) -> Result<Vec<u8>> {
    let mut xml = Fragment::new();
    xml.start("url")?;
    xml.text_element("loc", &record.loc)?;
    xml.text_element("lastmod", &format_lastmod(&record.lastmod))?;
    xml.text_element("changefreq", record.changefreq.as_str())?;
    xml.text_element("priority", &record.priority.to_string())?;
    for image in &record.images {
        xml.start("image:image")?;
        xml.text_element("image:loc", image)?;
        xml.end("image:image")?;
    }
    xml.end("url")?;
    Ok(xml.into_bytes())
}

/// Encode one `<sitemap>` element of the index.
pub fn encode_index_entry(loc: &str, lastmod: &DateTime<Utc>) -> Result<Vec<u8>> {
    let mut xml = Fragment::new();
    xml.start("sitemap")?;
    xml.text_element("loc", loc)?;
    xml.text_element("lastmod", &format_lastmod(lastmod))?;
    xml.end("sitemap")?;
    Ok(xml.into_bytes())
}

/// In-memory quick-xml writer for a single fragment.
struct Fragment {
    writer: Writer<Vec<u8>>,
}

impl Fragment {
    fn new() -> Self {
        Self {
            writer: Writer::new(Vec::new()),
        }
    }

    fn start(&mut self, name: &str) -> Result<()> {
        self.event(Event::Start(BytesStart::new(name)))
    }

    fn end(&mut self, name: &str) -> Result<()> {
        self.event(Event::End(BytesEnd::new(name)))
    }

    fn text_element(&mut self, name: &str, text: &str) -> Result<()> {
        self.start(name)?;
        self.event(Event::Text(BytesText::new(text)))?;
        self.end(name)
    }

    fn event(&mut self, event: Event<'_>) -> Result<()> {
        self.writer
            .write_event(event)
            .map_err(|e| SitemapError::Encode(format!("XML write error: {e}")))
    }

    fn into_bytes(self) -> Vec<u8> {
        self.writer.into_inner()
    }
}
