//! Script execution.
//!
//! Spawns the selected command with the terminal's stdio and reports its
//! outcome from a background observer thread, so the caller is never
//! blocked by the child and never inherits its exit status.

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::thread::{self, JoinHandle};

use crate::error::{LaunchError, Result};

/// Command selected by the workflow, ready to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchPlan {
    /// `<package_manager> run <script>` in the project directory.
    Script {
        package_manager: String,
        script: String,
        directory: PathBuf,
    },
    /// A rendered custom command line.
    Custom {
        command_line: String,
        directory: PathBuf,
    },
}

impl LaunchPlan {
    /// The command as it would be typed in a shell.
    pub fn command_line(&self) -> String {
        match self {
            LaunchPlan::Script {
                package_manager,
                script,
                ..
            } => format!("{package_manager} run {script}"),
            LaunchPlan::Custom { command_line, .. } => command_line.clone(),
        }
    }

    /// Working directory of the command.
    pub fn directory(&self) -> &Path {
        match self {
            LaunchPlan::Script { directory, .. } | LaunchPlan::Custom { directory, .. } => {
                directory
            }
        }
    }

    /// Spawn the command.
    pub fn execute(&self) -> Result<RunHandle> {
        match self {
            LaunchPlan::Script {
                package_manager,
                script,
                directory,
            } => run_script(script, directory, package_manager),
            LaunchPlan::Custom {
                command_line,
                directory,
            } => run_custom_command(command_line, directory),
        }
    }
}

/// Handle on a running command's completion report.
#[derive(Debug)]
pub struct RunHandle {
    observer: JoinHandle<Option<i32>>,
}

impl RunHandle {
    /// Block until the child has exited and its outcome has been reported.
    ///
    /// Returns the child's exit code, or `None` if it was killed by a
    /// signal or could not be waited on.
    pub fn wait(self) -> Option<i32> {
        self.observer.join().ok().flatten()
    }
}

/// Run `<package_manager> run <script>` in `directory`.
///
/// # Errors
///
/// Returns an error if the package manager cannot be spawned.
pub fn run_script(script: &str, directory: &Path, package_manager: &str) -> Result<RunHandle> {
    let args = vec!["run".to_string(), script.to_string()];
    spawn(package_manager, &args, directory, script.to_string())
}

/// Run a custom command line in `directory`.
///
/// The line is split on whitespace; quoting is not interpreted, so an
/// argument cannot contain spaces.
///
/// # Errors
///
/// Returns an error if the line is empty or the executable cannot be spawned.
pub fn run_custom_command(command_line: &str, directory: &Path) -> Result<RunHandle> {
    let (program, args) = split_command_line(command_line)?;
    spawn(&program, &args, directory, command_line.to_string())
}

/// Split a command line into executable and arguments.
pub fn split_command_line(command_line: &str) -> Result<(String, Vec<String>)> {
    let mut parts = command_line.split_whitespace().map(String::from);
    let program = parts.next().ok_or(LaunchError::EmptyCommand)?;
    Ok((program, parts.collect()))
}

fn spawn(program: &str, args: &[String], directory: &Path, label: String) -> Result<RunHandle> {
    let command_str = std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ");

    tracing::debug!(command = %command_str, dir = %directory.display(), "Spawning");

    let mut command = Command::new(program);
    command.args(args);
    command.current_dir(directory);

    // Inherit stdio for interactive scripts
    command.stdin(Stdio::inherit());
    command.stdout(Stdio::inherit());
    command.stderr(Stdio::inherit());

    let child = command.spawn().map_err(|source| LaunchError::Spawn {
        command: command_str,
        source,
    })?;

    let observer = thread::spawn(move || observe(child, &label));
    Ok(RunHandle { observer })
}

fn observe(mut child: Child, label: &str) -> Option<i32> {
    let status = match child.wait() {
        Ok(status) => status,
        Err(e) => {
            tracing::warn!("Failed to wait for {}: {}", label, e);
            return None;
        }
    };

    match status.code() {
        Some(0) => {
            report_success(&format!("Successfully ran {label}"));
            Some(0)
        }
        Some(code) => {
            report_failure(&format!("Failed with exit code {code}"));
            Some(code)
        }
        None => {
            report_failure("Failed: terminated by signal");
            None
        }
    }
}

fn report_success(message: &str) {
    if io::stdout().is_terminal() {
        println!("\x1b[1;32m{message}\x1b[0m");
    } else {
        println!("{message}");
    }
}

fn report_failure(message: &str) {
    if io::stderr().is_terminal() {
        eprintln!("\x1b[1;31m{message}\x1b[0m");
    } else {
        eprintln!("{message}");
    }
}
