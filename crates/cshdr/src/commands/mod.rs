//! Command implementations.

mod inspect;
mod scan;

use crate::cli::{Cli, Commands};

/// Dispatch CLI command to the appropriate handler.
pub fn run_command(cli: &Cli) -> i32 {
    match &cli.command {
        Commands::Scan { .. } => handle_scan(cli),
        Commands::Inspect { .. } => handle_inspect(cli),
    }
}

fn handle_scan(cli: &Cli) -> i32 {
    let Commands::Scan {
        root,
        jobs,
        level,
        failures,
    } = &cli.command
    else {
        unreachable!("scan command variant mismatch");
    };

    scan::cmd_scan(root, *jobs, *level, *failures)
}

fn handle_inspect(cli: &Cli) -> i32 {
    let Commands::Inspect { input, level } = &cli.command else {
        unreachable!("inspect command variant mismatch");
    };

    inspect::cmd_inspect(input, *level)
}
