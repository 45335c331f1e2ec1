//! First-run configuration prompts.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use super::prompt::Prompter;
use crate::config::{Config, CustomCommand, PackageManager, PackageManagerKind};
use crate::error::LaunchError;

/// Turn the comma separated folder answer into absolute paths.
///
/// `.` stands for `cwd`; other entries are resolved against `cwd`.
/// Blank entries are dropped.
pub fn parse_folders(input: &str, cwd: &Path) -> Vec<PathBuf> {
    input
        .split(',')
        .map(str::trim)
        .filter(|folder| !folder.is_empty())
        .map(|folder| {
            if folder == "." {
                cwd.to_path_buf()
            } else {
                cwd.join(folder)
            }
        })
        .collect()
}

/// Folders from `folders` that do not exist.
pub fn missing_folders(folders: &[PathBuf]) -> Vec<PathBuf> {
    folders.iter().filter(|f| !f.exists()).cloned().collect()
}

fn require_folder(value: &str) -> Result<(), String> {
    if value.split(',').all(|folder| folder.trim().is_empty()) {
        Err("Please provide at least one folder.".to_string())
    } else {
        Ok(())
    }
}

fn require(message: &'static str) -> impl Fn(&str) -> Result<(), String> {
    move |value: &str| {
        if value.trim().is_empty() {
            Err(message.to_string())
        } else {
            Ok(())
        }
    }
}

/// Ask which folders to scan.
///
/// # Errors
///
/// Returns [`LaunchError::MissingFolders`] if any entered folder does not
/// exist.
pub fn prompt_folders<P: Prompter + ?Sized>(prompter: &mut P, cwd: &Path) -> Result<Vec<PathBuf>> {
    prompter.message(
        "Please specify which folders to scan (comma separated. To use current folder input a dot '.' ):",
    );
    let answer = prompter.input("Folders to scan:", &require_folder)?;
    let folders = parse_folders(&answer, cwd);

    let missing = missing_folders(&folders);
    if !missing.is_empty() {
        return Err(LaunchError::MissingFolders { folders: missing }.into());
    }

    Ok(folders)
}

/// Ask for the package manager, and the custom command when needed.
pub fn prompt_package_manager<P: Prompter + ?Sized>(prompter: &mut P) -> Result<PackageManager> {
    let labels: Vec<String> = PackageManagerKind::ALL
        .iter()
        .map(|kind| kind.name().to_string())
        .collect();

    let Some(choice) = prompter.select("Select your package manager", &labels)? else {
        bail!("No package manager selected");
    };

    let package_manager = match PackageManagerKind::ALL[choice] {
        PackageManagerKind::Npm => PackageManager::Npm,
        PackageManagerKind::Yarn => PackageManager::Yarn,
        PackageManagerKind::Pnpm => PackageManager::Pnpm,
        PackageManagerKind::Custom => {
            let executable = prompter.input(
                "Enter your custom package manager (e.g., nx, gulp):",
                &require("Please provide a valid package manager."),
            )?;
            let template = prompter.input(
                "Enter your custom command format (use {project} for the project and {script} for the script):",
                &require("Please provide a valid command format."),
            )?;

            prompter.message(&format!("Custom package manager: {executable}"));
            prompter.message(&format!("Custom command format: {template}"));
            PackageManager::Custom(CustomCommand::new(executable.trim(), template.trim()))
        }
    };

    Ok(package_manager)
}

/// Collect a complete configuration interactively.
pub fn collect_config<P: Prompter + ?Sized>(prompter: &mut P, cwd: &Path) -> Result<Config> {
    let folders = prompt_folders(prompter, cwd)?;
    let package_manager = prompt_package_manager(prompter)?;
    Ok(Config::new(folders, package_manager))
}
