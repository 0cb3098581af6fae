//! cshdr - compact section header size analysis.
//!
//! Estimates how large each ELF object's section header table would be in
//! the compact (varint, default-eliding) cshdr encoding, and compares that
//! against the raw table and a zstd-compressed baseline.
//!
//! # Example
//!
//! ```ignore
//! let report = cshdr::analyze_file(Path::new("program.o"), 3)?;
//! println!("{} raw -> {} compact", report.table_bytes, report.compact_bytes);
//! ```

// Re-export from sub-crates
pub use cshdr_codec::{
    DEFAULT_SH_TYPE, MAX_VARINT_BYTES, SectionHeader, record_size, table_size, varint_size,
};
pub use cshdr_elf::{ElfError, SectionTable, is_elf};

mod analyze;
mod corpus;

pub use analyze::{DEFAULT_ZSTD_LEVEL, FileReport, analyze_file};
pub use corpus::{
    CorpusReport, ScanOptions, Summary, collect_object_files, scan_corpus, scan_files,
};

use thiserror::Error;

/// Analysis errors.
#[derive(Error, Debug)]
pub enum Error {
    #[error("ELF error: {0}")]
    Elf(#[from] cshdr_elf::ElfError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Thread pool error: {0}")]
    ThreadPool(String),
}

pub type Result<T> = std::result::Result<T, Error>;
