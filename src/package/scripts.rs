//! Script extraction from package.json.

use std::path::Path;

use super::types::{Package, Script, Scripts};
use crate::error::{LaunchError, Result};

/// Read a manifest and return its declared scripts.
///
/// A manifest without a `scripts` field yields an empty collection.
///
/// # Errors
///
/// - [`LaunchError::ManifestRead`] if the file cannot be read
/// - [`LaunchError::ManifestParse`] if the content is not valid JSON
pub fn extract(manifest: &Path) -> Result<Scripts> {
    let content = std::fs::read_to_string(manifest).map_err(|source| LaunchError::ManifestRead {
        path: manifest.to_path_buf(),
        source,
    })?;

    parse_package_json(&content)
        .map(|package| scripts_of(&package))
        .map_err(|message| LaunchError::ManifestParse {
            path: manifest.to_path_buf(),
            message,
        })
}

/// Parse scripts from package.json content.
///
/// # Examples
///
/// ```
/// use lazy_typer::package::parse_scripts_from_json;
///
/// let json = r#"{"scripts": {"dev": "vite", "build": "vite build"}}"#;
/// let scripts = parse_scripts_from_json(json).unwrap();
/// assert_eq!(scripts.names(), vec!["dev", "build"]);
/// ```
pub fn parse_scripts_from_json(content: &str) -> std::result::Result<Scripts, String> {
    parse_package_json(content).map(|package| scripts_of(&package))
}

/// Parse the package.json structure, returning a readable error message.
pub fn parse_package_json(content: &str) -> std::result::Result<Package, String> {
    serde_json::from_str(content).map_err(|e| format_json_error(content, &e))
}

fn scripts_of(package: &Package) -> Scripts {
    package
        .scripts
        .iter()
        .flatten()
        .filter_map(|(name, command)| match command.as_str() {
            Some(command) => Some(Script::new(name, command)),
            None => {
                tracing::warn!("Skipping script '{}': command is not a string", name);
                None
            }
        })
        .collect()
}

/// Format a JSON parsing error with context.
fn format_json_error(content: &str, error: &serde_json::Error) -> String {
    let line = error.line();
    let column = error.column();

    // Try to show the problematic line
    if let Some(error_line) = content.lines().nth(line.saturating_sub(1)) {
        let pointer = " ".repeat(column.saturating_sub(1)) + "^";
        format!(
            "{}\n  at line {}, column {}:\n    {}\n    {}",
            error, line, column, error_line, pointer
        )
    } else {
        format!("{} at line {}, column {}", error, line, column)
    }
}
