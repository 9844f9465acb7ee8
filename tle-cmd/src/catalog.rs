use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;
use tle::{source::read_lines, OrbitalRecord, Reader};
use tracing::debug;

/// Read and decode every record in the file at `path`.
pub fn load(path: &Path, reference_year: Option<i32>) -> Result<Vec<OrbitalRecord>> {
    let lines = read_lines(path).with_context(|| format!("reading {path:?}"))?;
    let reader = match reference_year {
        Some(year) => Reader::builder().reference_year(year).build(),
        None => Reader::default(),
    };
    let records = reader
        .decode_catalog(&lines)
        .with_context(|| format!("decoding {path:?}"))?;
    debug!("decoded {} records from {path:?}", records.len());
    Ok(records)
}

pub fn by_catalog_number(records: &[OrbitalRecord], num: u32) -> Option<&OrbitalRecord> {
    records.iter().find(|r| r.catalog_number() == num)
}

pub fn by_name<'a>(records: &'a [OrbitalRecord], pattern: &Regex) -> Vec<&'a OrbitalRecord> {
    records.iter().filter(|r| pattern.is_match(r.name())).collect()
}

pub fn name_pattern(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).with_context(|| format!("invalid name pattern {pattern:?}"))
}
