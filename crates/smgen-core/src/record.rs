//! URL records: one logical page to be listed in a sitemap.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How often a page is expected to change (`<changefreq>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    #[default]
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    /// Protocol value written inside `<changefreq>`.
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFreq::Always => "always",
            ChangeFreq::Hourly => "hourly",
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
            ChangeFreq::Yearly => "yearly",
            ChangeFreq::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single `<url>` entry.
///
/// Neither `loc` nor `priority` is validated; `loc` is expected to be an
/// absolute URL and `priority` to lie in `0.0..=1.0`, but any value is written
/// as given.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UrlRecord {
    pub loc: String,
    #[serde(default = "Utc::now")]
    pub lastmod: DateTime<Utc>,
    #[serde(default)]
    pub changefreq: ChangeFreq,
    #[serde(default = "default_priority")]
    pub priority: f64,
    /// Image locations, written as `<image:image>` children in this order.
    #[serde(default)]
    pub images: Vec<String>,
}

fn default_priority() -> f64 {
    0.5
}

impl UrlRecord {
    /// Record with the given location and defaults for everything else
    /// (`lastmod` = now, `daily`, priority 0.5, no images).
    pub fn new(loc: impl Into<String>) -> Self {
        Self {
            loc: loc.into(),
            lastmod: Utc::now(),
            changefreq: ChangeFreq::default(),
            priority: default_priority(),
            images: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changefreq_names_are_lowercase() {
        let all = [
            ChangeFreq::Always,
            ChangeFreq::Hourly,
            ChangeFreq::Daily,
            ChangeFreq::Weekly,
            ChangeFreq::Monthly,
            ChangeFreq::Yearly,
            ChangeFreq::Never,
        ];
        let names: Vec<&str> = all.iter().map(|c| c.as_str()).collect();
        assert_eq!(
            names,
            ["always", "hourly", "daily", "weekly", "monthly", "yearly", "never"]
        );
        assert_eq!(ChangeFreq::Weekly.to_string(), "weekly");
    }

    #[test]
    fn record_json_with_all_fields() {
        let json = r#"{
            "loc": "https://www.example.com/article1",
            "lastmod": "2024-03-01T12:00:00Z",
            "changefreq": "monthly",
            "priority": 0.8,
            "images": ["https://cdn.example.com/1.jpg", "https://cdn.example.com/2.jpg"]
        }"#;
        let rec: UrlRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.loc, "https://www.example.com/article1");
        assert_eq!(rec.lastmod.to_rfc3339(), "2024-03-01T12:00:00+00:00");
        assert_eq!(rec.changefreq, ChangeFreq::Monthly);
        assert!((rec.priority - 0.8).abs() < 1e-9);
        assert_eq!(rec.images.len(), 2);
    }

    #[test]
    fn record_json_defaults() {
        let rec: UrlRecord = serde_json::from_str(r#"{"loc":"https://x.com/a"}"#).unwrap();
        assert_eq!(rec.changefreq, ChangeFreq::Daily);
        assert!((rec.priority - 0.5).abs() < 1e-9);
        assert!(rec.images.is_empty());
    }

    #[test]
    fn record_json_rejects_unknown_changefreq() {
        let res: Result<UrlRecord, _> =
            serde_json::from_str(r#"{"loc":"https://x.com/a","changefreq":"sometimes"}"#);
        assert!(res.is_err());
    }
}
