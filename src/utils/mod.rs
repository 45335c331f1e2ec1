//! Utility module for lazy-typer.

mod paths;

pub use paths::{
    config_dir, invocation_dir, resolve_storage_location, APP_DIR_NAME,
    STORE_FILE_NAME,
};
