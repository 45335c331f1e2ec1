//! lazy-typer
//!
//! Entry point for the lazy-typer CLI application.

use std::process::ExitCode;

use anyhow::{Context, Result};

use lazy_typer::cli::Cli;
use lazy_typer::config::ConfigStore;
use lazy_typer::error::{exit_code, LaunchError};
use lazy_typer::utils::invocation_dir;
use lazy_typer::workflow::{Outcome, TerminalPrompter, Workflow};

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(err) => {
            if let Some(launch_err) = err.downcast_ref::<LaunchError>() {
                eprintln!("Error: {launch_err}");
                return ExitCode::from(launch_err.exit_code() as u8);
            }
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code::GENERAL_ERROR as u8)
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse_args();
    init_logging();

    tracing::debug!(?cli, "Parsed arguments");

    let cwd = invocation_dir().context("Failed to determine the current directory")?;
    let store = ConfigStore::open_default()?;
    tracing::debug!(store = %store.path().display(), cwd = %cwd.display(), "Starting");

    let mut workflow =
        Workflow::new(store, TerminalPrompter::new(), cwd).with_clear(cli.clear_mode());

    match workflow.run()? {
        Outcome::Exit => Ok(exit_code::SUCCESS),
        Outcome::NoManifests => {
            eprintln!("No package.json's found");
            Ok(exit_code::GENERAL_ERROR)
        }
        Outcome::Launch(plan) => {
            tracing::info!(command = %plan.command_line(), dir = %plan.directory().display(), "Launching");
            // The child's exit status is reported, not propagated.
            plan.execute()?.wait();
            Ok(exit_code::SUCCESS)
        }
    }
}

fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lazy_typer=warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
