//! Selection workflow as an explicit state machine.
//!
//! Each [`State`] is advanced by [`Workflow::step`]; [`Workflow::run`]
//! drives the machine from [`State::ResolveConfig`] to [`State::Done`].

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::prompt::Prompter;
use super::setup::collect_config;
use crate::config::{ClearOutcome, Config, ConfigStore, ProfileKey};
use crate::package::{extract, project_name, scan_all};
use crate::runner::LaunchPlan;

const EXIT_LABEL: &str = "exit";
const BACK_LABEL: &str = "go back";

/// What to clear before resolving the configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClearMode {
    /// Clear nothing.
    #[default]
    Keep,
    /// The profile of the invocation directory.
    Profile,
    /// The whole store.
    All,
}

/// How a run of the workflow ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The user left project selection.
    Exit,
    /// No manifest was found in the configured folders.
    NoManifests,
    /// A command was chosen.
    Launch(LaunchPlan),
}

/// Position of the workflow between two prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    /// Clear if requested, then load, adopt or collect the configuration and scan.
    ResolveConfig,
    /// Choose among the scanned manifests.
    SelectProject,
    /// Choose a script of `manifest`.
    SelectScript { manifest: PathBuf },
    /// Finished; stepping again is a no-op.
    Done(Outcome),
}

/// Selection workflow for one invocation.
pub struct Workflow<P: Prompter> {
    store: ConfigStore,
    prompter: P,
    invocation_dir: PathBuf,
    clear: ClearMode,
    config: Option<Config>,
    manifests: Vec<PathBuf>,
}

impl<P: Prompter> Workflow<P> {
    /// Workflow for `invocation_dir`, which also keys its profile.
    pub fn new(store: ConfigStore, prompter: P, invocation_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            prompter,
            invocation_dir: invocation_dir.into(),
            clear: ClearMode::Keep,
            config: None,
            manifests: Vec::new(),
        }
    }

    /// Clear part of the store before resolving the configuration.
    pub fn with_clear(mut self, clear: ClearMode) -> Self {
        self.clear = clear;
        self
    }

    /// The prompter, for inspecting what was asked.
    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// Configuration in use, once resolved.
    pub fn config(&self) -> Option<&Config> {
        self.config.as_ref()
    }

    /// Manifests found by the last scan.
    pub fn manifests(&self) -> &[PathBuf] {
        &self.manifests
    }

    /// Drive the machine until it is done.
    pub fn run(&mut self) -> Result<Outcome> {
        let mut state = State::ResolveConfig;
        loop {
            match self.step(state)? {
                State::Done(outcome) => return Ok(outcome),
                next => state = next,
            }
        }
    }

    /// Advance one transition.
    pub fn step(&mut self, state: State) -> Result<State> {
        tracing::debug!(?state, "Workflow step");
        match state {
            State::ResolveConfig => self.resolve_config(),
            State::SelectProject => self.select_project(),
            State::SelectScript { manifest } => self.select_script(manifest),
            State::Done(outcome) => Ok(State::Done(outcome)),
        }
    }

    fn profile_key(&self) -> ProfileKey {
        ProfileKey::Directory(self.invocation_dir.clone())
    }

    fn resolve_config(&mut self) -> Result<State> {
        let key = self.profile_key();

        let cleared = match self.clear {
            ClearMode::Keep => None,
            ClearMode::Profile => {
                // A store written by an older release only has the global profile
                let target = if self.store.holds_legacy()? {
                    ProfileKey::Global
                } else {
                    key.clone()
                };
                Some(self.store.clear(&target)?)
            }
            ClearMode::All => Some(self.store.clear_all()?),
        };
        match cleared {
            Some(ClearOutcome::Cleared) => self.prompter.message("Configuration has been cleared."),
            Some(ClearOutcome::NothingToClear) => {
                self.prompter.message("No configuration found to clear.")
            }
            None => {}
        }

        let config = match self.store.load(&key)? {
            Some(config) => config,
            None => {
                let adopted = if cleared.is_none() {
                    self.store.adopt_legacy(&key)?
                } else {
                    None
                };
                match adopted {
                    Some(config) => config,
                    None => self.setup(&key)?,
                }
            }
        };

        self.manifests = scan_all(&config.folders)?;
        tracing::debug!(count = self.manifests.len(), "Scanned manifests");
        self.config = Some(config);

        if self.manifests.is_empty() {
            return Ok(State::Done(Outcome::NoManifests));
        }
        Ok(State::SelectProject)
    }

    fn setup(&mut self, key: &ProfileKey) -> Result<Config> {
        let config = collect_config(&mut self.prompter, &self.invocation_dir)?;
        self.store.save(key, &config)?;
        self.store
            .load(key)?
            .with_context(|| format!("Configuration for {key} was not saved"))
    }

    fn select_project(&mut self) -> Result<State> {
        let labels: Vec<String> = std::iter::once(EXIT_LABEL.to_string())
            .chain(self.manifests.iter().map(|m| project_name(m)))
            .collect();

        match self.prompter.select("Select a project", &labels)? {
            None | Some(0) => {
                self.prompter.message("Exiting, no project selected.");
                Ok(State::Done(Outcome::Exit))
            }
            Some(choice) => {
                let manifest = self
                    .manifests
                    .get(choice - 1)
                    .cloned()
                    .with_context(|| format!("No project at position {choice}"))?;
                Ok(State::SelectScript { manifest })
            }
        }
    }

    fn select_script(&mut self, manifest: PathBuf) -> Result<State> {
        let scripts = extract(&manifest)?;
        if scripts.is_empty() {
            self.prompter.message("No scripts found in this package.");
            return Ok(State::SelectProject);
        }

        let labels: Vec<String> = std::iter::once(BACK_LABEL.to_string())
            .chain(scripts.names().into_iter().map(String::from))
            .collect();

        match self.prompter.select("Select a script to run:", &labels)? {
            None | Some(0) => {
                self.prompter.message("Going back to project selection...");
                Ok(State::SelectProject)
            }
            Some(choice) => {
                let script = labels
                    .get(choice)
                    .with_context(|| format!("No script at position {choice}"))?;
                let plan = self.plan(&manifest, script)?;
                Ok(State::Done(Outcome::Launch(plan)))
            }
        }
    }

    fn plan(&self, manifest: &Path, script: &str) -> Result<LaunchPlan> {
        let config = self
            .config
            .as_ref()
            .context("Configuration has not been resolved")?;

        let plan = match config.package_manager.custom() {
            Some(custom) => LaunchPlan::Custom {
                command_line: custom.render(&project_name(manifest), script),
                directory: self.invocation_dir.clone(),
            },
            None => LaunchPlan::Script {
                package_manager: config.package_manager.name().to_string(),
                script: script.to_string(),
                directory: manifest
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| self.invocation_dir.clone()),
            },
        };
        Ok(plan)
    }
}
