//! Section header table reader.
//!
//! Reads just enough of an ELF image to locate and decode its section
//! header table: the identification bytes plus the `e_sh*` header fields.
//! String tables, symbols, segments and section contents are never touched;
//! the output is the table as [`cshdr_codec::SectionHeader`] records plus
//! the raw table byte region for compression baselines.

mod constants;
mod table;

pub use constants::*;
pub use table::{SectionTable, is_elf};

use thiserror::Error;

/// Section table reading errors.
#[derive(Error, Debug)]
pub enum ElfError {
    #[error("ELF data too small")]
    TooSmall,
    #[error("Invalid ELF magic number")]
    InvalidMagic,
    #[error("Only little-endian ELF supported")]
    NotLittleEndian,
    #[error("Unsupported ELF class: {0}")]
    UnsupportedClass(u8),
    #[error("Section header entry size too small: {actual} < {expected}")]
    EntrySizeTooSmall { expected: u16, actual: u16 },
    #[error("Section header table out of bounds")]
    TableOutOfBounds,
}

pub type Result<T> = std::result::Result<T, ElfError>;
