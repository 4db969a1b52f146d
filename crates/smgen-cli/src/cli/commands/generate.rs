//! `smgen generate [input]` – stream records into rotating sitemap files and
//! write the index.

use anyhow::{Context, Result};
use smgen_core::config::SmgenConfig;
use smgen_core::input::read_records;
use smgen_core::SitemapWriter;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Command-line overrides for `generate`.
#[derive(Debug, Default)]
pub struct GenerateArgs {
    pub input: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub base_url: Option<String>,
    pub links_per_file: Option<usize>,
}

/// What a generation run produced.
#[derive(Debug)]
pub struct GenerateSummary {
    pub records: usize,
    pub files: usize,
    pub index_path: PathBuf,
}

pub fn run_generate(cfg: &SmgenConfig, args: GenerateArgs) -> Result<()> {
    let summary = match args.input.as_deref() {
        None => generate(cfg, &args, io::stdin().lock())?,
        Some(p) if p == Path::new("-") => generate(cfg, &args, io::stdin().lock())?,
        Some(p) => {
            let f = File::open(p).with_context(|| format!("open {}", p.display()))?;
            generate(cfg, &args, BufReader::new(f))?
        }
    };
    println!(
        "Wrote {} URLs into {} file(s); index: {}",
        summary.records,
        summary.files,
        summary.index_path.display()
    );
    Ok(())
}

/// Run one generation from `input`, with `args` taking precedence over `cfg`.
pub fn generate<R: BufRead>(
    cfg: &SmgenConfig,
    args: &GenerateArgs,
    input: R,
) -> Result<GenerateSummary> {
    let output_dir = args.output_dir.as_ref().unwrap_or(&cfg.output_dir);
    let links_per_file = args.links_per_file.unwrap_or(cfg.links_per_file);
    let base_url = args
        .base_url
        .as_deref()
        .or(cfg.base_url.as_deref())
        .context("no base URL: pass --base-url or set base_url in the config file")?
        .trim_end_matches('/');

    let mut writer =
        SitemapWriter::new(output_dir, links_per_file)?.with_compression(cfg.compression());
    tracing::info!(
        dir = %output_dir.display(),
        links_per_file,
        "generating sitemap"
    );

    let mut records = 0usize;
    for record in read_records(input) {
        let record = record?;
        writer
            .add_url(&record)
            .with_context(|| format!("failed to add {}", record.loc))?;
        records += 1;
    }
    writer.write_index(base_url)?;

    Ok(GenerateSummary {
        records,
        files: writer.files().len(),
        index_path: writer.index_path(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const INPUT: &str = r#"{"loc":"https://x.com/a"}
{"loc":"https://x.com/b","changefreq":"weekly"}
{"loc":"https://x.com/c","images":["https://x.com/c.jpg"]}
"#;

    #[test]
    fn generate_rotates_and_writes_index() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = SmgenConfig::default();
        let args = GenerateArgs {
            output_dir: Some(dir.path().to_path_buf()),
            base_url: Some("https://cdn.example.com/".to_string()),
            links_per_file: Some(2),
            ..Default::default()
        };
        let summary = generate(&cfg, &args, Cursor::new(INPUT)).unwrap();
        assert_eq!(summary.records, 3);
        assert_eq!(summary.files, 2);
        assert!(dir.path().join("file-1.gz").exists());
        assert!(dir.path().join("file-2.gz").exists());

        let index = std::fs::read_to_string(&summary.index_path).unwrap();
        assert!(index.contains("<loc>https://cdn.example.com/file-2.gz</loc>"));
    }

    #[test]
    fn generate_uses_config_base_url() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = SmgenConfig {
            output_dir: dir.path().to_path_buf(),
            base_url: Some("https://x.com".to_string()),
            ..Default::default()
        };
        let summary = generate(&cfg, &GenerateArgs::default(), Cursor::new("")).unwrap();
        assert_eq!(summary.records, 0);
        assert_eq!(summary.files, 0);
        assert!(summary.index_path.exists());
    }

    #[test]
    fn generate_requires_base_url() {
        let dir = tempfile::tempdir().unwrap();
        let args = GenerateArgs {
            output_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        let err = generate(&SmgenConfig::default(), &args, Cursor::new(INPUT)).unwrap_err();
        assert!(err.to_string().contains("no base URL"));
    }

    #[test]
    fn generate_stops_on_bad_record() {
        let dir = tempfile::tempdir().unwrap();
        let args = GenerateArgs {
            output_dir: Some(dir.path().to_path_buf()),
            base_url: Some("https://x.com".to_string()),
            ..Default::default()
        };
        let input = "{\"loc\":\"https://x.com/a\"}\nnot json\n";
        let err = generate(&SmgenConfig::default(), &args, Cursor::new(input)).unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));
        assert!(!dir.path().join("sitemap-index.xml").exists());
    }
}
