//! Path utilities.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;

use crate::error::{LaunchError, Result};

/// Directory name used under the platform config location.
pub const APP_DIR_NAME: &str = "lazy-typer";

/// File name of the configuration store.
pub const STORE_FILE_NAME: &str = "config.json";

/// Compute the platform config directory for lazy-typer without creating it.
///
/// - Windows: `%APPDATA%\lazy-typer`
/// - macOS/Linux: `$XDG_CONFIG_HOME/lazy-typer`, or `~/.config/lazy-typer`
/// - anything else: `~/.lazy-typer`
#[cfg(windows)]
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir()
        .map(|base| base.join(APP_DIR_NAME))
        .or_else(dotted_home_dir)
}

#[cfg(any(target_os = "linux", target_os = "macos"))]
pub fn config_dir() -> Option<PathBuf> {
    xdg_config_home(env::var_os("XDG_CONFIG_HOME"), dirs::home_dir())
        .map(|base| base.join(APP_DIR_NAME))
}

#[cfg(not(any(windows, target_os = "linux", target_os = "macos")))]
pub fn config_dir() -> Option<PathBuf> {
    dotted_home_dir()
}

#[cfg_attr(any(target_os = "linux", target_os = "macos"), allow(dead_code))]
fn dotted_home_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(format!(".{APP_DIR_NAME}")))
}

/// `$XDG_CONFIG_HOME` if set and non-empty, otherwise `<home>/.config`.
#[cfg_attr(not(any(target_os = "linux", target_os = "macos")), allow(dead_code))]
fn xdg_config_home(xdg: Option<OsString>, home: Option<PathBuf>) -> Option<PathBuf> {
    match xdg {
        Some(dir) if !dir.is_empty() => Some(PathBuf::from(dir)),
        _ => home.map(|home| home.join(".config")),
    }
}

/// Resolve the storage directory and make sure it exists.
///
/// # Errors
///
/// Returns an error if no home directory can be determined or the
/// directory cannot be created.
pub fn resolve_storage_location() -> Result<PathBuf> {
    let dir = config_dir().ok_or(LaunchError::NoStorageLocation)?;
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// The invocation directory, used as the profile key.
pub fn invocation_dir() -> Result<PathBuf> {
    Ok(env::current_dir()?)
}
