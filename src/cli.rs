//! CLI argument definitions for lazy-typer.
//!
//! Uses clap with derive macros for argument parsing.
//!
//! # Example
//!
//! ```no_run
//! use lazy_typer::cli::Cli;
//!
//! let cli = Cli::parse_args();
//! println!("Clear mode: {:?}", cli.clear_mode());
//! ```

use clap::Parser;

use crate::workflow::ClearMode;

/// Pick a project and run one of its package.json scripts.
#[derive(Parser, Debug)]
#[command(name = "lazy-typer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Clear the saved configuration for the current directory
    #[arg(long)]
    pub clear: bool,

    /// Clear every saved configuration
    #[arg(long = "clear-all")]
    pub clear_all: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// What to clear before the workflow starts. `--clear-all` wins.
    pub fn clear_mode(&self) -> ClearMode {
        if self.clear_all {
            ClearMode::All
        } else if self.clear {
            ClearMode::Profile
        } else {
            ClearMode::Keep
        }
    }
}
