//! Build script for lazy-typer.
//!
//! Generates the man page using clap_mangen.

use std::env;
use std::fs;
use std::path::PathBuf;

use clap::{CommandFactory, Parser};

/// Mirror of the binary's CLI, kept here so the build script does not
/// depend on the crate itself.
#[derive(Parser)]
#[command(name = "lazy-typer")]
#[command(
    author,
    version,
    about = "Pick a project and run one of its package.json scripts"
)]
#[command(
    long_about = "lazy-typer scans the configured folders for package.json files, \
    lets you choose a project and one of its scripts, and runs it with npm, yarn, pnpm \
    or a custom command template.\n\n\
    The first run in a directory asks which folders to scan and which package manager \
    to use, and remembers the answers for that directory."
)]
struct Cli {
    /// Clear the saved configuration for the current directory
    #[arg(long)]
    clear: bool,

    /// Clear every saved configuration
    #[arg(long = "clear-all")]
    clear_all: bool,
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Only generate the man page for release builds or when explicitly requested
    let profile = env::var("PROFILE").unwrap_or_default();
    if profile != "release" && env::var("LAZY_TYPER_GEN_MANPAGE").is_err() {
        return;
    }

    let Some(out_dir) = env::var_os("OUT_DIR").map(PathBuf::from) else {
        return;
    };

    let man = clap_mangen::Man::new(Cli::command());
    let mut buffer = Vec::new();
    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to generate man page: {e}");
        return;
    }

    let man_path = out_dir.join("lazy-typer.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {e}");
        return;
    }

    // Also copy to docs directory for distribution
    if let Some(manifest_dir) = env::var_os("CARGO_MANIFEST_DIR") {
        let docs_dir = PathBuf::from(manifest_dir).join("docs");
        if docs_dir.exists() {
            let _ = fs::copy(&man_path, docs_dir.join("lazy-typer.1"));
        }
    }
}
