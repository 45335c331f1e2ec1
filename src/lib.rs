//! lazy-typer
//!
//! Interactive launcher for package.json scripts spread over several
//! folders. lazy-typer scans the configured folders for `package.json`
//! files, lets you pick a project and one of its scripts, and runs it
//! with npm, yarn, pnpm or a custom command template.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface argument parsing
//! - [`config`] - Launch configuration and its directory-keyed store
//! - [`error`] - Error types and exit codes
//! - [`package`] - Manifest discovery and script extraction
//! - [`runner`] - Script execution
//! - [`utils`] - Path utilities
//! - [`workflow`] - The interactive selection workflow
//!
//! # Example
//!
//! ```no_run
//! use lazy_typer::package::{extract, project_name, scan};
//! use std::path::Path;
//!
//! for manifest in scan(Path::new("./apps")).expect("scan failed") {
//!     let scripts = extract(&manifest).expect("unreadable manifest");
//!     println!("{}: {:?}", project_name(&manifest), scripts.names());
//! }
//! ```

/// CLI argument definitions.
pub mod cli;

/// Launch configuration and persistence.
pub mod config;

/// Error types and exit codes.
pub mod error;

/// Manifest discovery and script extraction.
pub mod package;

/// Script execution.
pub mod runner;

/// Path utilities.
pub mod utils;

/// Interactive selection workflow.
pub mod workflow;

// Re-export commonly used types
pub use cli::Cli;
pub use config::{Config, ConfigStore, PackageManager};
pub use error::{LaunchError, Result};
pub use package::{Script, Scripts};
pub use runner::LaunchPlan;
pub use workflow::{Outcome, Workflow};
