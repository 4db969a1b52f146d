//! Helpers for reading writer output back.

use flate2::read::GzDecoder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use smgen_core::UrlRecord;

/// Decompressed contents of a `file-N.gz`.
pub fn read_gz(path: &Path) -> String {
    let mut out = String::new();
    GzDecoder::new(File::open(path).unwrap())
        .read_to_string(&mut out)
        .unwrap();
    out
}

/// `<loc>` values in document order.
pub fn locs(xml: &str) -> Vec<String> {
    xml.split("<loc>")
        .skip(1)
        .map(|rest| rest.split("</loc>").next().unwrap().to_string())
        .collect()
}

/// Names of `file-*.gz` in `dir`, sorted by index.
pub fn data_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|n| n.starts_with("file-") && n.ends_with(".gz"))
        .collect();
    names.sort_by_key(|n| {
        n.trim_start_matches("file-")
            .trim_end_matches(".gz")
            .parse::<usize>()
            .unwrap()
    });
    names
}

pub fn page(i: usize) -> UrlRecord {
    UrlRecord::new(format!("https://www.example.com/page/{i}"))
}
