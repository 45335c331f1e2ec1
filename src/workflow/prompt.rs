//! Prompt surface used by the workflow.

use std::collections::VecDeque;

use anyhow::{anyhow, bail, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

use crate::error::LaunchError;

/// Validation callback for free-text input: `Err` carries the message shown
/// before asking again.
pub type Validator<'a> = &'a dyn Fn(&str) -> std::result::Result<(), String>;

/// Interactive prompts the workflow blocks on.
pub trait Prompter {
    /// Ask for free text until `validate` accepts it.
    fn input(&mut self, message: &str, validate: Validator<'_>) -> Result<String>;

    /// Single choice from `labels`. `None` means the user cancelled.
    fn select(&mut self, message: &str, labels: &[String]) -> Result<Option<usize>>;

    /// Show an informational line.
    fn message(&mut self, text: &str) {
        println!("{text}");
    }
}

/// Prompts rendered on the controlling terminal.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

fn prompt_error(e: dialoguer::Error) -> LaunchError {
    LaunchError::Prompt {
        message: e.to_string(),
    }
}

impl Prompter for TerminalPrompter {
    fn input(&mut self, message: &str, validate: Validator<'_>) -> Result<String> {
        let value: String = Input::with_theme(&self.theme)
            .with_prompt(message)
            .validate_with(|value: &String| validate(value))
            .interact_text()
            .map_err(prompt_error)?;
        Ok(value)
    }

    fn select(&mut self, message: &str, labels: &[String]) -> Result<Option<usize>> {
        let choice = Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(labels)
            .default(0)
            .interact_opt()
            .map_err(prompt_error)?;
        Ok(choice)
    }
}

/// One canned answer for [`ScriptedPrompter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Typed text.
    Text(String),
    /// Index into the offered labels.
    Choose(usize),
    /// Pick the entry with this label.
    Label(String),
    /// Escape out of a selection.
    Cancel,
}

/// Prompter that replays canned answers and records what it was shown.
///
/// Rejected text answers are recorded in [`ScriptedPrompter::rejections`]
/// and the next answer is tried, the way a terminal prompt asks again.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    /// Labels offered by each `select` call, in order.
    pub menus: Vec<Vec<String>>,
    /// Informational lines.
    pub messages: Vec<String>,
    /// Validation errors for rejected text answers.
    pub rejections: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next_answer(&mut self, message: &str) -> Result<Answer> {
        self.answers
            .pop_front()
            .ok_or_else(|| anyhow!("No scripted answer left for prompt '{message}'"))
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&mut self, message: &str, validate: Validator<'_>) -> Result<String> {
        loop {
            match self.next_answer(message)? {
                Answer::Text(text) => match validate(&text) {
                    Ok(()) => return Ok(text),
                    Err(reason) => self.rejections.push(reason),
                },
                other => bail!("Expected text for prompt '{message}', got {other:?}"),
            }
        }
    }

    fn select(&mut self, message: &str, labels: &[String]) -> Result<Option<usize>> {
        self.menus.push(labels.to_vec());
        match self.next_answer(message)? {
            Answer::Choose(index) if index < labels.len() => Ok(Some(index)),
            Answer::Label(label) => labels
                .iter()
                .position(|l| *l == label)
                .map(Some)
                .ok_or_else(|| anyhow!("'{label}' is not offered by prompt '{message}'")),
            Answer::Cancel => Ok(None),
            other => bail!("Invalid answer {other:?} for prompt '{message}'"),
        }
    }

    fn message(&mut self, text: &str) {
        self.messages.push(text.to_string());
    }
}
