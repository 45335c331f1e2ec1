//! Custom error types for lazy-typer.
//!
//! Uses thiserror for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// Exit codes for lazy-typer.
pub mod exit_code {
    /// Success, including a user-initiated exit from project selection.
    pub const SUCCESS: i32 = 0;
    /// No manifests found, missing folders, or any other failure.
    pub const GENERAL_ERROR: i32 = 1;
}

/// Main error type for lazy-typer.
#[derive(Error, Debug)]
pub enum LaunchError {
    /// Folders entered during setup do not exist.
    #[error("The following folders do not exist: {}", join_paths(.folders))]
    MissingFolders { folders: Vec<PathBuf> },

    /// A manifest could not be read.
    #[error("Failed to read {path}: {source}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A folder could not be scanned.
    #[error("Failed to scan {path}: {source}")]
    Scan {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// A manifest is not valid JSON.
    #[error("Failed to parse {path}:\n  {message}")]
    ManifestParse { path: PathBuf, message: String },

    /// A stored configuration record breaks the package manager invariant.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// No home or config directory could be determined.
    #[error("Could not determine a configuration directory")]
    NoStorageLocation,

    /// A custom command resolved to nothing runnable.
    #[error("Custom command is empty")]
    EmptyCommand,

    /// The child process could not be started.
    #[error("Failed to execute: {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The interactive prompt failed (closed terminal, no tty).
    #[error("Prompt failed: {message}")]
    Prompt { message: String },

    /// IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl LaunchError {
    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        exit_code::GENERAL_ERROR
    }
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for lazy-typer operations.
pub type Result<T> = std::result::Result<T, LaunchError>;
