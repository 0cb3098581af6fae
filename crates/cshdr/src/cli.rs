//! CLI definitions and argument types.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Exit code for success.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for failure.
pub const EXIT_FAILURE: i32 = 1;

#[derive(Parser)]
#[command(name = "cshdr")]
#[command(about = "Estimates compact section header table sizes for ELF objects")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (sets RUST_LOG=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output (only show errors)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub silent: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a directory tree of ELF objects and report aggregate sizes
    Scan {
        /// Root directory to scan
        #[arg(value_name = "DIR")]
        root: PathBuf,

        /// Number of parallel jobs (0 = auto)
        #[arg(short = 'j', long, default_value = "0")]
        jobs: usize,

        /// zstd level for the compressed baseline
        #[arg(long, default_value = "3")]
        level: i32,

        /// List files that were excluded because they failed to parse
        #[arg(long)]
        failures: bool,
    },
    /// Report per-section compact sizes for a single ELF object
    Inspect {
        /// Input ELF file
        #[arg(value_name = "ELF")]
        input: PathBuf,

        /// zstd level for the compressed baseline
        #[arg(long, default_value = "3")]
        level: i32,
    },
}
