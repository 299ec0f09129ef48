//! Prompter abstraction used by the question flow
//!
//! The flow only talks to this trait. The cliclack implementation lives in
//! `tui`; `AutoPrompter` answers everything with defaults for `--yes` runs.

use super::slot::Slot;
use anyhow::Result;

/// Answer to a single question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply<T> {
    Answer(T),
    /// User aborted (Esc / Ctrl+C)
    Cancelled,
}

/// Validator shown inline by interactive prompters
pub type Validator = fn(&str) -> Result<(), &'static str>;

/// Free-text question
#[derive(Debug, Clone)]
pub struct InputPrompt {
    pub slot: Slot,
    pub message: String,
    pub initial: String,
    pub validate: Option<Validator>,
}

/// Yes/no question
#[derive(Debug, Clone)]
pub struct ConfirmPrompt {
    pub slot: Slot,
    pub message: String,
    pub initial: bool,
}

pub trait Prompter {
    fn input(&mut self, prompt: &InputPrompt) -> Result<Reply<String>>;

    fn confirm(&mut self, prompt: &ConfirmPrompt) -> Result<Reply<bool>>;

    /// Tell the user an answer was refused; the question is asked again afterwards
    fn reject(&mut self, slot: Slot, message: &str) -> Result<()>;
}

/// Non-interactive prompter: takes every suggested value and confirms everything
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoPrompter;

impl Prompter for AutoPrompter {
    fn input(&mut self, prompt: &InputPrompt) -> Result<Reply<String>> {
        tracing::debug!(slot = ?prompt.slot, value = %prompt.initial, "auto answer");
        Ok(Reply::Answer(prompt.initial.clone()))
    }

    fn confirm(&mut self, prompt: &ConfirmPrompt) -> Result<Reply<bool>> {
        tracing::debug!(slot = ?prompt.slot, "auto confirm");
        Ok(Reply::Answer(true))
    }

    fn reject(&mut self, slot: Slot, message: &str) -> Result<()> {
        anyhow::bail!("{} ({} cannot be answered with --yes)", message, slot.label())
    }
}
