//! Type definitions for package.json parsing.

use std::fmt;

use serde::Deserialize;
use serde_json::{Map, Value};

/// The parts of package.json lazy-typer reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Package {
    /// Raw scripts object, in declaration order.
    #[serde(default)]
    pub scripts: Option<Map<String, Value>>,
}

/// A script defined in package.json.
#[derive(Clone, PartialEq, Eq)]
pub struct Script {
    name: String,
    command: String,
}

impl Script {
    /// Create a new script.
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
        }
    }

    /// Get the script name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the script command.
    pub fn command(&self) -> &str {
        &self.command
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Script")
            .field("name", &self.name)
            .field("command", &self.command)
            .finish()
    }
}

/// Scripts of one manifest, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scripts {
    scripts: Vec<Script>,
}

impl Scripts {
    /// Get the number of scripts.
    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }

    /// Get an iterator over the scripts.
    pub fn iter(&self) -> impl Iterator<Item = &Script> {
        self.scripts.iter()
    }

    /// Get a script by name.
    pub fn get(&self, name: &str) -> Option<&Script> {
        self.iter().find(|s| s.name == name)
    }

    /// Get script names as a vector.
    pub fn names(&self) -> Vec<&str> {
        self.iter().map(Script::name).collect()
    }
}

impl FromIterator<Script> for Scripts {
    fn from_iter<I: IntoIterator<Item = Script>>(iter: I) -> Self {
        Self {
            scripts: iter.into_iter().collect(),
        }
    }
}
