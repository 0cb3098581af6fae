//! Corpus scan command.

use std::path::Path;

use console::style;
use cshdr::{CorpusReport, ScanOptions};
use tracing::{error, info, warn};

use crate::cli::{EXIT_FAILURE, EXIT_SUCCESS};
use crate::terminal::{Progress, Spinner};

/// Handle the `scan` command.
pub fn cmd_scan(root: &Path, jobs: usize, level: i32, show_failures: bool) -> i32 {
    info!(root = %root.display(), "scanning");

    let spinner = Spinner::new("collecting object files");
    let files = match cshdr::collect_object_files(root) {
        Ok(files) => files,
        Err(err) => {
            spinner.finish_with_failure("collection failed");
            error!(error = %err, "failed to enumerate object files");
            return EXIT_FAILURE;
        }
    };
    spinner.finish_with_success(&format!("{} object files", files.len()));

    if files.is_empty() {
        info!("no ELF objects found");
        return EXIT_SUCCESS;
    }

    let options = ScanOptions {
        jobs,
        zstd_level: level,
    };
    let bar = Progress::new(files.len() as u64, "estimating");
    let report = match cshdr::scan_files(&files, &options, || bar.inc(1)) {
        Ok(report) => report,
        Err(err) => {
            error!(error = %err, "scan failed");
            return EXIT_FAILURE;
        }
    };
    bar.finish_and_clear();

    print_report(root, &report, show_failures);

    if report.reports.is_empty() {
        // Everything failed to parse; nothing was estimated
        EXIT_FAILURE
    } else {
        EXIT_SUCCESS
    }
}

fn print_report(root: &Path, report: &CorpusReport, show_failures: bool) {
    let header = format!(
        "{:<44} {:>8} {:>10} {:>10} {:>10}",
        "FILE", "SECTIONS", "SHDR", "CSHDR", "ZSTD"
    );
    println!("{}", style(header).bold());

    for file in &report.reports {
        let path = file.path.strip_prefix(root).unwrap_or(&file.path);
        println!(
            "{:<44} {:>8} {:>10} {:>10} {:>10}",
            path.display(),
            file.section_count,
            file.table_bytes,
            file.compact_bytes,
            file.zstd_bytes
        );
    }

    let summary = &report.summary;
    let totals = format!(
        "{:<44} {:>8} {:>10} {:>10} {:>10}",
        "TOTAL", summary.sections, summary.table_bytes, summary.compact_bytes, summary.zstd_bytes
    );
    println!("{}", style(totals).bold());

    if summary.table_bytes > 0 {
        println!(
            "compact: {} of raw, zstd baseline: {}",
            style(percent(summary.compact_bytes, summary.table_bytes)).green(),
            style(percent(summary.zstd_bytes, summary.table_bytes)).cyan()
        );
    }

    if !report.failures.is_empty() {
        warn!(
            excluded = report.failures.len(),
            "files failed to parse and were excluded from totals"
        );
        if show_failures {
            for (path, err) in &report.failures {
                warn!(file = %path.display(), error = %err, "excluded");
            }
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn percent(part: usize, whole: usize) -> String {
    format!("{:.1}%", part as f64 / whole as f64 * 100.0)
}
