//! Configuration type definitions.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::LaunchError;

/// Placeholder replaced by the selected project's directory name.
pub const PROJECT_PLACEHOLDER: &str = "{project}";

/// Placeholder replaced by the selected script name.
pub const SCRIPT_PLACEHOLDER: &str = "{script}";

/// A user-supplied command used instead of a built-in package manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomCommand {
    /// Executable to invoke (e.g. `nx`).
    pub executable: String,
    /// Argument template containing `{project}` and `{script}`.
    pub template: String,
}

impl CustomCommand {
    /// Create a new custom command.
    pub fn new(executable: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
            template: template.into(),
        }
    }

    /// Resolve the full command line for a project and script.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_typer::config::CustomCommand;
    ///
    /// let custom = CustomCommand::new("nx", "run:{project}:{script}");
    /// assert_eq!(custom.render("api", "build"), "nx run:api:build");
    /// ```
    pub fn render(&self, project: &str, script: &str) -> String {
        let args = self
            .template
            .replace(PROJECT_PLACEHOLDER, project)
            .replace(SCRIPT_PLACEHOLDER, script);
        format!("{} {}", self.executable, args)
    }
}

/// Package manager used to run scripts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PackageManager {
    /// Node Package Manager (npm)
    #[default]
    Npm,
    /// Yarn package manager
    Yarn,
    /// pnpm
    Pnpm,
    /// Anything else, described by a command template.
    Custom(CustomCommand),
}

impl PackageManager {
    /// Name as stored in the configuration file.
    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    fn kind(&self) -> PackageManagerKind {
        match self {
            PackageManager::Npm => PackageManagerKind::Npm,
            PackageManager::Yarn => PackageManagerKind::Yarn,
            PackageManager::Pnpm => PackageManagerKind::Pnpm,
            PackageManager::Custom(_) => PackageManagerKind::Custom,
        }
    }

    /// The custom command, if this is a custom package manager.
    pub fn custom(&self) -> Option<&CustomCommand> {
        match self {
            PackageManager::Custom(custom) => Some(custom),
            _ => None,
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Package manager names as they appear on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManagerKind {
    Npm,
    Yarn,
    Pnpm,
    Custom,
}

impl PackageManagerKind {
    /// All kinds, in prompt order.
    pub const ALL: [PackageManagerKind; 4] = [
        PackageManagerKind::Npm,
        PackageManagerKind::Yarn,
        PackageManagerKind::Pnpm,
        PackageManagerKind::Custom,
    ];

    /// Name shown in prompts and stored on disk.
    pub fn name(self) -> &'static str {
        match self {
            PackageManagerKind::Npm => "npm",
            PackageManagerKind::Yarn => "yarn",
            PackageManagerKind::Pnpm => "pnpm",
            PackageManagerKind::Custom => "custom",
        }
    }
}

/// Launch configuration for one profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawConfig", into = "RawConfig")]
pub struct Config {
    /// Absolute directories to scan, in order.
    pub folders: Vec<PathBuf>,
    /// Package manager used for the selected script.
    pub package_manager: PackageManager,
}

impl Config {
    /// Create a new configuration.
    pub fn new(folders: Vec<PathBuf>, package_manager: PackageManager) -> Self {
        Self {
            folders,
            package_manager,
        }
    }
}

/// Flat on-disk form of [`Config`].
///
/// Reads both `customPackageManager` and the historical
/// `customPackageManger` spelling; writes only the former.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConfig {
    folders: Vec<PathBuf>,
    package_manager: PackageManagerKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    custom_command: Option<String>,
    #[serde(
        default,
        alias = "customPackageManger",
        skip_serializing_if = "Option::is_none"
    )]
    custom_package_manager: Option<String>,
}

impl TryFrom<RawConfig> for Config {
    type Error = LaunchError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        let package_manager = match (
            raw.package_manager,
            raw.custom_package_manager,
            raw.custom_command,
        ) {
            (PackageManagerKind::Custom, Some(executable), Some(template)) => {
                PackageManager::Custom(CustomCommand::new(executable, template))
            }
            (PackageManagerKind::Custom, _, _) => {
                return Err(LaunchError::InvalidConfig {
                    message: "packageManager \"custom\" requires both customPackageManager and customCommand".to_string(),
                })
            }
            (PackageManagerKind::Npm, None, None) => PackageManager::Npm,
            (PackageManagerKind::Yarn, None, None) => PackageManager::Yarn,
            (PackageManagerKind::Pnpm, None, None) => PackageManager::Pnpm,
            (kind, _, _) => {
                return Err(LaunchError::InvalidConfig {
                    message: format!(
                        "customPackageManager and customCommand are only allowed with packageManager \"custom\", found \"{}\"",
                        kind.name()
                    ),
                })
            }
        };

        Ok(Config {
            folders: raw.folders,
            package_manager,
        })
    }
}

impl From<Config> for RawConfig {
    fn from(config: Config) -> Self {
        let kind = config.package_manager.kind();
        let (custom_package_manager, custom_command) = match config.package_manager {
            PackageManager::Custom(custom) => (Some(custom.executable), Some(custom.template)),
            _ => (None, None),
        };
        RawConfig {
            folders: config.folders,
            package_manager: kind,
            custom_command,
            custom_package_manager,
        }
    }
}
