//! Interactive selection workflow: configuration, project, script.

mod machine;
pub mod prompt;
pub mod setup;

pub use machine::{ClearMode, Outcome, State, Workflow};
pub use prompt::{Answer, Prompter, ScriptedPrompter, TerminalPrompter, Validator};
pub use setup::{collect_config, missing_folders, parse_folders, prompt_folders, prompt_package_manager};
