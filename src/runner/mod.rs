//! Runner module for lazy-typer.
//!
//! Handles script execution with the configured package manager or a
//! custom command.

mod executor;

pub use executor::{
    run_custom_command, run_script, split_command_line, LaunchPlan, RunHandle,
};
