//! Corpus scanning: enumerate object files and fold per-file reports.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use cshdr_elf::is_elf;
use rayon::prelude::*;
use tracing::debug;

use crate::analyze::{FileReport, analyze_file};
use crate::{Error, Result};

/// Corpus scan options.
#[derive(Clone, Copy, Debug)]
pub struct ScanOptions {
    /// Number of parallel jobs (0 = one per CPU).
    pub jobs: usize,
    /// zstd level for the compressed baseline.
    pub zstd_level: i32,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            jobs: 0,
            zstd_level: crate::analyze::DEFAULT_ZSTD_LEVEL,
        }
    }
}

/// Aggregate totals over a set of file reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub files: usize,
    pub sections: usize,
    pub table_bytes: usize,
    pub compact_bytes: usize,
    pub zstd_bytes: usize,
}

impl Summary {
    /// Fold one file report into the totals.
    pub fn add(&mut self, report: &FileReport) {
        self.files += 1;
        self.sections += report.section_count;
        self.table_bytes += report.table_bytes;
        self.compact_bytes += report.compact_bytes;
        self.zstd_bytes += report.zstd_bytes;
    }

    /// Totals over a slice of reports.
    #[must_use]
    pub fn from_reports(reports: &[FileReport]) -> Self {
        let mut summary = Self::default();
        for report in reports {
            summary.add(report);
        }
        summary
    }
}

/// Scan result: per-file reports plus files that failed to parse.
///
/// Failures are carried explicitly rather than contributing zero to the
/// totals, so the summary only covers files that actually parsed.
#[derive(Debug)]
pub struct CorpusReport {
    pub reports: Vec<FileReport>,
    pub failures: Vec<(PathBuf, Error)>,
    pub summary: Summary,
}

/// Recursively collect ELF object files under a directory.
///
/// A file qualifies if it starts with the ELF magic; extensions are not
/// trusted. Symlinks are skipped. Results are sorted for stable output.
pub fn collect_object_files(root: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    walk(root, &mut files)?;
    files.sort();
    Ok(files)
}

fn walk(dir: &Path, files: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let path = entry.path();
        if file_type.is_symlink() {
            debug!(path = %path.display(), "skipping symlink");
        } else if file_type.is_dir() {
            walk(&path, files)?;
        } else if has_elf_magic(&path)? {
            files.push(path);
        }
    }
    Ok(())
}

/// Peek at the first four bytes of a file.
fn has_elf_magic(path: &Path) -> io::Result<bool> {
    let mut file = fs::File::open(path)?;
    let mut magic = [0u8; 4];
    match file.read_exact(&mut magic) {
        Ok(()) => Ok(is_elf(&magic)),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(false),
        Err(e) => Err(e),
    }
}

/// Analyze a set of files in parallel.
///
/// `progress` is invoked once per finished file, from worker threads.
/// Estimation is pure per file, so this is a plain map over the inputs with
/// the fold done afterwards on the collected results.
pub fn scan_files(
    files: &[PathBuf],
    options: &ScanOptions,
    progress: impl Fn() + Sync,
) -> Result<CorpusReport> {
    let jobs = if options.jobs == 0 {
        num_cpus::get()
    } else {
        options.jobs
    };
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .map_err(|e| Error::ThreadPool(e.to_string()))?;

    let results: Vec<std::result::Result<FileReport, (PathBuf, Error)>> = pool.install(|| {
        files
            .par_iter()
            .map(|path| {
                let result = analyze_file(path, options.zstd_level)
                    .map_err(|err| (path.clone(), err));
                progress();
                result
            })
            .collect()
    });

    let mut reports = Vec::with_capacity(results.len());
    let mut failures = Vec::new();
    for result in results {
        match result {
            Ok(report) => reports.push(report),
            Err((path, err)) => {
                debug!(path = %path.display(), error = %err, "excluding file");
                failures.push((path, err));
            }
        }
    }

    let summary = Summary::from_reports(&reports);
    Ok(CorpusReport {
        reports,
        failures,
        summary,
    })
}

/// Collect and analyze every ELF object under `root`.
pub fn scan_corpus(root: &Path, options: &ScanOptions) -> Result<CorpusReport> {
    let files = collect_object_files(root)?;
    scan_files(&files, options, || {})
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(sections: usize, table: usize, compact: usize, zstd: usize) -> FileReport {
        FileReport {
            path: PathBuf::from("x.o"),
            section_count: sections,
            table_bytes: table,
            compact_bytes: compact,
            zstd_bytes: zstd,
        }
    }

    #[test]
    fn test_summary_empty() {
        assert_eq!(Summary::from_reports(&[]), Summary::default());
    }

    #[test]
    fn test_summary_fold() {
        let reports = [report(4, 256, 30, 90), report(10, 640, 85, 210)];
        let summary = Summary::from_reports(&reports);
        assert_eq!(
            summary,
            Summary {
                files: 2,
                sections: 14,
                table_bytes: 896,
                compact_bytes: 115,
                zstd_bytes: 300,
            }
        );
    }

    #[test]
    fn test_summary_order_independent() {
        let a = report(4, 256, 30, 90);
        let b = report(10, 640, 85, 210);
        assert_eq!(
            Summary::from_reports(&[a.clone(), b.clone()]),
            Summary::from_reports(&[b, a])
        );
    }
}
