//! Single-file inspect command.

use std::fs;
use std::path::Path;

use console::style;
use cshdr::{FileReport, SectionTable, record_size};
use cshdr_elf::{
    SHT_DYNAMIC, SHT_DYNSYM, SHT_HASH, SHT_NOBITS, SHT_NOTE, SHT_NULL, SHT_PROGBITS, SHT_REL,
    SHT_RELA, SHT_STRTAB, SHT_SYMTAB,
};
use tracing::{error, info};

use crate::cli::{EXIT_FAILURE, EXIT_SUCCESS};

/// Handle the `inspect` command.
pub fn cmd_inspect(input: &Path, level: i32) -> i32 {
    info!(input = %input.display(), "inspecting");

    let data = match fs::read(input) {
        Ok(data) => data,
        Err(err) => {
            error!(error = %err, "failed to read file");
            return EXIT_FAILURE;
        }
    };
    let table = match SectionTable::parse(&data) {
        Ok(table) => table,
        Err(err) => {
            error!(error = %err, "failed to decode section table");
            return EXIT_FAILURE;
        }
    };

    let header = format!(
        "{:>4} {:<12} {:>10} {:>18} {:>8} {:>6}",
        "IDX", "TYPE", "SIZE", "FLAGS", "ALIGN", "CSHDR"
    );
    println!("{}", style(header).bold());
    for (index, record) in table.records.iter().enumerate() {
        println!(
            "{:>4} {:<12} {:>10} {:>#18x} {:>8} {:>6}",
            index,
            type_label(record.sh_type),
            record.size,
            record.flags,
            record.addralign,
            record_size(record)
        );
    }

    let report = match FileReport::from_table(input.to_path_buf(), &table, level) {
        Ok(report) => report,
        Err(err) => {
            error!(error = %err, "compression baseline failed");
            return EXIT_FAILURE;
        }
    };
    println!(
        "{} sections: {} raw, {} compact, {} zstd",
        report.section_count,
        style(report.table_bytes).bold(),
        style(report.compact_bytes).green(),
        style(report.zstd_bytes).cyan()
    );

    EXIT_SUCCESS
}

/// Human-readable label for the common section types.
fn type_label(sh_type: u32) -> String {
    match sh_type {
        SHT_NULL => "NULL".to_string(),
        SHT_PROGBITS => "PROGBITS".to_string(),
        SHT_SYMTAB => "SYMTAB".to_string(),
        SHT_STRTAB => "STRTAB".to_string(),
        SHT_RELA => "RELA".to_string(),
        SHT_HASH => "HASH".to_string(),
        SHT_DYNAMIC => "DYNAMIC".to_string(),
        SHT_NOTE => "NOTE".to_string(),
        SHT_NOBITS => "NOBITS".to_string(),
        SHT_REL => "REL".to_string(),
        SHT_DYNSYM => "DYNSYM".to_string(),
        other => format!("{other:#x}"),
    }
}
