//! Per-file size analysis.

use std::fs;
use std::path::{Path, PathBuf};

use cshdr_codec::table_size;
use cshdr_elf::SectionTable;
use tracing::debug;

use crate::Result;

/// Default zstd level for the compressed baseline.
pub const DEFAULT_ZSTD_LEVEL: i32 = 3;

/// Size figures for one object file's section header table.
#[derive(Clone, Debug)]
pub struct FileReport {
    pub path: PathBuf,
    /// Number of section header entries.
    pub section_count: usize,
    /// Raw on-disk table size.
    pub table_bytes: usize,
    /// Estimated size in the compact encoding.
    pub compact_bytes: usize,
    /// Size of the raw table after zstd compression.
    pub zstd_bytes: usize,
}

impl FileReport {
    /// Build a report from an already decoded section table.
    pub fn from_table(path: PathBuf, table: &SectionTable, zstd_level: i32) -> Result<Self> {
        let zstd_bytes = if table.raw.is_empty() {
            0
        } else {
            zstd::bulk::compress(&table.raw, zstd_level)?.len()
        };

        Ok(Self {
            path,
            section_count: table.records.len(),
            table_bytes: table.raw.len(),
            compact_bytes: table_size(&table.records),
            zstd_bytes,
        })
    }
}

/// Analyze one object file.
///
/// Reads the file, decodes its section header table, and produces the raw,
/// compact, and zstd-baseline sizes.
pub fn analyze_file(path: &Path, zstd_level: i32) -> Result<FileReport> {
    let data = fs::read(path)?;
    let table = SectionTable::parse(&data)?;
    let report = FileReport::from_table(path.to_path_buf(), &table, zstd_level)?;
    debug!(
        path = %report.path.display(),
        sections = report.section_count,
        raw = report.table_bytes,
        compact = report.compact_bytes,
        "analyzed"
    );
    Ok(report)
}
