//! Section header record.

/// One ELF section header, reduced to the fields the encoding cares about.
///
/// Field widths follow the ELF64 layout; 32-bit producers widen into it.
/// A record is plain data: construct it once at the input boundary (with any
/// absent-field defaulting resolved there) and hand it to the estimator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionHeader {
    /// Offset of the section name in the string table.
    pub name: u32,
    /// Section type code (`SHT_*`).
    pub sh_type: u32,
    /// Section flags bitmask (`SHF_*`).
    pub flags: u64,
    /// Virtual address of the section in memory.
    pub addr: u64,
    /// Offset of the section contents in the file.
    pub offset: u64,
    /// Size of the section contents in bytes.
    pub size: u64,
    /// Index of a related section (meaning depends on type).
    pub link: u32,
    /// Auxiliary information (meaning depends on type).
    pub info: u32,
    /// Alignment requirement; 0 or 1 means unconstrained.
    pub addralign: u64,
    /// Entry size for sections holding fixed-size entries, 0 otherwise.
    pub entsize: u64,
}
