use anyhow::{bail, Context, Result};
use flate2::Compression;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Protocol maximum number of URLs in one sitemap file.
pub const MAX_LINKS_PER_FILE: usize = 50_000;

/// Global configuration loaded from `~/.config/smgen/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmgenConfig {
    /// Directory receiving `file-N.gz` and `sitemap-index.xml`.
    pub output_dir: PathBuf,
    /// Maximum `<url>` entries per data file before rotating.
    pub links_per_file: usize,
    /// Public URL under which the output directory is served; index entries
    /// are `<base_url>/<file>`.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Gzip level 0-9 (None = flate2 default).
    #[serde(default)]
    pub compression_level: Option<u32>,
}

impl Default for SmgenConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("sitemap"),
            links_per_file: MAX_LINKS_PER_FILE,
            base_url: None,
            compression_level: None,
        }
    }
}

impl SmgenConfig {
    /// Reject values the writer cannot use.
    pub fn validate(&self) -> Result<()> {
        if self.links_per_file == 0 {
            bail!("links_per_file must be at least 1");
        }
        if let Some(level) = self.compression_level {
            if level > 9 {
                bail!("compression_level must be 0-9, got {level}");
            }
        }
        Ok(())
    }

    pub fn compression(&self) -> Compression {
        self.compression_level
            .map(Compression::new)
            .unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("smgen")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SmgenConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SmgenConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load and validate configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<SmgenConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let cfg: SmgenConfig = toml::from_str(&data)
        .with_context(|| format!("invalid config: {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = SmgenConfig::default();
        assert_eq!(cfg.output_dir, PathBuf::from("sitemap"));
        assert_eq!(cfg.links_per_file, 50_000);
        assert!(cfg.base_url.is_none());
        assert_eq!(cfg.compression().level(), Compression::default().level());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = SmgenConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: SmgenConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.output_dir, cfg.output_dir);
        assert_eq!(parsed.links_per_file, cfg.links_per_file);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            output_dir = "/var/www/sitemap"
            links_per_file = 5000
            base_url = "https://cdn.example.com"
            compression_level = 9
        "#;
        let cfg: SmgenConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.output_dir, PathBuf::from("/var/www/sitemap"));
        assert_eq!(cfg.links_per_file, 5000);
        assert_eq!(cfg.base_url.as_deref(), Some("https://cdn.example.com"));
        assert_eq!(cfg.compression().level(), 9);
        cfg.validate().unwrap();
    }

    #[test]
    fn validate_rejects_bad_values() {
        let mut cfg = SmgenConfig::default();
        cfg.links_per_file = 0;
        assert!(cfg.validate().is_err());

        let mut cfg = SmgenConfig::default();
        cfg.compression_level = Some(12);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "output_dir = \"out\"\nlinks_per_file = 2\n").unwrap();
        let cfg = load_from(&path).unwrap();
        assert_eq!(cfg.links_per_file, 2);

        fs::write(&path, "output_dir = \"out\"\nlinks_per_file = 0\n").unwrap();
        assert!(load_from(&path).is_err());
    }
}
