//! Section header table decoding.

use cshdr_codec::SectionHeader;

use crate::constants::*;
use crate::{ElfError, Result};

/// Read little-endian u16 from bytes.
#[inline]
fn read_le16(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([data[offset], data[offset + 1]])
}

/// Read little-endian u32 from bytes.
#[inline]
fn read_le32(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

/// Read little-endian u64 from bytes.
#[inline]
fn read_le64(data: &[u8], offset: usize) -> u64 {
    u64::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
        data[offset + 4],
        data[offset + 5],
        data[offset + 6],
        data[offset + 7],
    ])
}

/// Check whether data starts with the ELF magic.
#[must_use]
pub fn is_elf(data: &[u8]) -> bool {
    data.len() >= 4 && read_le32(data, 0) == ELF_MAGIC
}

/// A decoded section header table.
#[derive(Clone, Debug)]
pub struct SectionTable {
    /// ELF class byte (`ELF_CLASS_32` or `ELF_CLASS_64`).
    pub class: u8,
    /// One record per table entry, ELF32 fields widened to ELF64 widths.
    pub records: Vec<SectionHeader>,
    /// The raw on-disk table region, as stored in the file.
    pub raw: Vec<u8>,
}

impl SectionTable {
    /// Decode the section header table of an ELF image.
    ///
    /// A file without a section header table (`e_shoff == 0` or
    /// `e_shnum == 0`) decodes to an empty table.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < 6 {
            return Err(ElfError::TooSmall);
        }
        if !is_elf(data) {
            return Err(ElfError::InvalidMagic);
        }
        if data[EI_DATA] != ELF_DATA_LSB {
            return Err(ElfError::NotLittleEndian);
        }

        let class = data[EI_CLASS];
        let (min_ehsize, min_shentsize) = match class {
            ELF_CLASS_32 => (52, SHDR_SIZE_32),
            ELF_CLASS_64 => (64, SHDR_SIZE_64),
            other => return Err(ElfError::UnsupportedClass(other)),
        };
        if data.len() < min_ehsize {
            return Err(ElfError::TooSmall);
        }

        // e_shoff / e_shentsize / e_shnum live at class-dependent offsets
        let (shoff, shentsize, shnum) = if class == ELF_CLASS_64 {
            (read_le64(data, 40), read_le16(data, 58), read_le16(data, 60))
        } else {
            (
                u64::from(read_le32(data, 32)),
                read_le16(data, 46),
                read_le16(data, 48),
            )
        };

        if shoff == 0 || shnum == 0 {
            return Ok(Self {
                class,
                records: Vec::new(),
                raw: Vec::new(),
            });
        }
        if shentsize < min_shentsize {
            return Err(ElfError::EntrySizeTooSmall {
                expected: min_shentsize,
                actual: shentsize,
            });
        }

        let start = usize::try_from(shoff).map_err(|_| ElfError::TableOutOfBounds)?;
        let len = usize::from(shnum) * usize::from(shentsize);
        let end = start.checked_add(len).ok_or(ElfError::TableOutOfBounds)?;
        if end > data.len() {
            return Err(ElfError::TableOutOfBounds);
        }

        let mut records = Vec::with_capacity(usize::from(shnum));
        for i in 0..usize::from(shnum) {
            let entry = start + i * usize::from(shentsize);
            let record = if class == ELF_CLASS_64 {
                parse_shdr_64(data, entry)
            } else {
                parse_shdr_32(data, entry)
            };
            records.push(record);
        }

        Ok(Self {
            class,
            records,
            raw: data[start..end].to_vec(),
        })
    }
}

fn parse_shdr_64(data: &[u8], offset: usize) -> SectionHeader {
    SectionHeader {
        name: read_le32(data, offset),
        sh_type: read_le32(data, offset + 4),
        flags: read_le64(data, offset + 8),
        addr: read_le64(data, offset + 16),
        offset: read_le64(data, offset + 24),
        size: read_le64(data, offset + 32),
        link: read_le32(data, offset + 40),
        info: read_le32(data, offset + 44),
        addralign: read_le64(data, offset + 48),
        entsize: read_le64(data, offset + 56),
    }
}

fn parse_shdr_32(data: &[u8], offset: usize) -> SectionHeader {
    SectionHeader {
        name: read_le32(data, offset),
        sh_type: read_le32(data, offset + 4),
        flags: u64::from(read_le32(data, offset + 8)),
        addr: u64::from(read_le32(data, offset + 12)),
        offset: u64::from(read_le32(data, offset + 16)),
        size: u64::from(read_le32(data, offset + 20)),
        link: read_le32(data, offset + 24),
        info: read_le32(data, offset + 28),
        addralign: u64::from(read_le32(data, offset + 32)),
        entsize: u64::from(read_le32(data, offset + 36)),
    }
}
