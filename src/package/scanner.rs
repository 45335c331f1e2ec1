//! Manifest discovery under the configured folders.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::{LaunchError, Result};

/// File name of a package manifest.
pub const MANIFEST_FILE: &str = "package.json";

/// Directories that are never descended into.
pub const SKIP_DIRS: &[&str] = &["node_modules", "dist"];

/// Depth-first search for manifests under `root`.
///
/// Entries of a directory are visited in file-name order. Symlinks are
/// followed; a link loop is reported and skipped. Unreadable subdirectories
/// are skipped with a warning.
///
/// # Errors
///
/// Returns [`LaunchError::Scan`] if `root` itself cannot be read.
pub fn scan(root: &Path) -> Result<Vec<PathBuf>> {
    let mut manifests = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_skipped_dir(entry));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(LaunchError::Scan {
                    path: root.to_path_buf(),
                    source: e,
                })
            }
            Err(e) => {
                tracing::warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                continue;
            }
        };

        if entry.file_type().is_file() && entry.file_name() == MANIFEST_FILE {
            manifests.push(entry.into_path());
        }
    }

    tracing::debug!(root = %root.display(), found = manifests.len(), "Scanned folder");
    Ok(manifests)
}

/// Scan every folder in order and flatten the results.
pub fn scan_all<P: AsRef<Path>>(folders: &[P]) -> Result<Vec<PathBuf>> {
    let mut manifests = Vec::new();
    for folder in folders {
        manifests.extend(scan(folder.as_ref())?);
    }
    Ok(manifests)
}

/// Label for a manifest: the name of the directory that contains it.
///
/// ```
/// use lazy_typer::package::project_name;
/// use std::path::Path;
///
/// assert_eq!(project_name(Path::new("/work/apps/api/package.json")), "api");
/// ```
pub fn project_name(manifest: &Path) -> String {
    let parent = manifest.parent().unwrap_or(manifest);
    parent
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| parent.display().to_string())
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIP_DIRS.contains(&name))
}
