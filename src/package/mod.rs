//! Package module for lazy-typer.
//!
//! Finds package.json manifests and reads their scripts.

pub mod scanner;
pub mod scripts;
mod types;

pub use scanner::{project_name, scan, scan_all, MANIFEST_FILE, SKIP_DIRS};
pub use scripts::{extract, parse_package_json, parse_scripts_from_json};
pub use types::{Package, Script, Scripts};
