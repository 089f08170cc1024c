//! termlint command-line entry point
//!
//! Exit status: 0 when clean, 1 when incorrect terms remain, 2 on error.

use clap::Parser;
use std::process::ExitCode;
use termlint_cli::commands::Commands;

/// Check prose for incorrect terminology
#[derive(Debug, Parser)]
#[command(name = "termlint", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}
