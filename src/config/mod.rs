//! Configuration module for lazy-typer.
//!
//! Launch configurations are kept in one store file under the platform
//! config directory, one profile per invocation directory.

pub mod store;
mod types;

pub use store::{ClearOutcome, ConfigStore, ProfileKey, StoreSchema, GLOBAL_PROFILE_KEY};
pub use types::{
    Config, CustomCommand, PackageManager, PackageManagerKind, PROJECT_PLACEHOLDER,
    SCRIPT_PLACEHOLDER,
};
