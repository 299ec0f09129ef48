//! Question flow
//!
//! The questions are walked strictly in [`SLOTS`] order. Before each one the
//! target directory is probed again and the slot's predicate decides whether
//! the question is asked. The flow ends in one of three ways:
//!
//! - `Ok(FlowOutcome::Completed)`: every active question was answered
//! - `Ok(FlowOutcome::Cancelled)`: the user aborted or declined to overwrite
//! - `Err(_)`: the prompter itself failed
//!
//! Nothing here writes to disk.

pub mod probe;
pub mod prompter;
pub mod slot;

use crate::package_name::{to_valid_package_name, validate_package_name};
use crate::target::{format_target_dir, TargetSpec, DEFAULT_TARGET_DIR};
use anyhow::Result;
use std::path::Path;

pub use probe::TargetProbe;
pub use prompter::{AutoPrompter, ConfirmPrompt, InputPrompt, Prompter, Reply};
pub use slot::{Slot, SLOTS};

/// Answers collected so far, `None` meaning "not asked"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowAnswers {
    pub project_name: Option<String>,
    pub overwrite: Option<bool>,
    pub is_git: Option<bool>,
    pub package_name: Option<String>,
}

/// State threaded through the questions
#[derive(Debug, Clone)]
pub struct FlowState {
    pub target: TargetSpec,
    /// A usable directory was given on the command line
    pub target_from_args: bool,
    pub answers: FlowAnswers,
}

impl FlowState {
    pub fn new(directory_arg: Option<&str>, cwd: &Path) -> Self {
        let from_args = directory_arg.and_then(format_target_dir);
        let target = TargetSpec::resolve(directory_arg.unwrap_or(""), cwd);

        Self {
            target,
            target_from_args: from_args.is_some(),
            answers: FlowAnswers::default(),
        }
    }
}

/// Whether the project gets the git tooling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GitDecision {
    pub is_git_project: bool,
    /// Target already contained a repository before the run
    pub already_repository: bool,
}

impl GitDecision {
    pub fn new(already_repository: bool, is_git_answer: Option<bool>) -> Self {
        Self {
            is_git_project: already_repository || is_git_answer == Some(true),
            already_repository,
        }
    }

    /// `git init` has to run after the files are written
    pub fn needs_init(&self) -> bool {
        self.is_git_project && !self.already_repository
    }
}

/// Everything the rest of the run needs from the questions
#[derive(Debug, Clone)]
pub struct FlowResult {
    pub target: TargetSpec,
    pub answers: FlowAnswers,
    pub git: GitDecision,
}

impl FlowResult {
    /// Package name chosen by the user, else the project name
    pub fn final_package_name(&self) -> &str {
        self.answers
            .package_name
            .as_deref()
            .unwrap_or(&self.target.project_name)
    }
}

#[derive(Debug, Clone)]
pub enum FlowOutcome {
    Completed(FlowResult),
    Cancelled,
}

/// Ask every active question in order.
pub fn run_flow<P: Prompter + ?Sized>(
    prompter: &mut P,
    directory_arg: Option<&str>,
    cwd: &Path,
) -> Result<FlowOutcome> {
    let mut state = FlowState::new(directory_arg, cwd);

    for slot in SLOTS {
        let probe = TargetProbe::take(&state.target.path(cwd));
        if !slot.is_active(&state, &probe) {
            tracing::debug!(slot = slot.label(), "question skipped");
            continue;
        }

        if let Reply::Cancelled = ask(slot, prompter, &mut state, cwd)? {
            tracing::debug!(slot = slot.label(), "flow cancelled");
            return Ok(FlowOutcome::Cancelled);
        }
    }

    let probe = TargetProbe::take(&state.target.path(cwd));
    let git = GitDecision::new(probe.is_git_repo, state.answers.is_git);
    tracing::debug!(?git, target = %state.target.normalized_dir, "flow completed");

    Ok(FlowOutcome::Completed(FlowResult {
        target: state.target,
        answers: state.answers,
        git,
    }))
}

/// Ask one question and record the answer.
///
/// Declining the overwrite question is reported as a cancellation.
fn ask<P: Prompter + ?Sized>(
    slot: Slot,
    prompter: &mut P,
    state: &mut FlowState,
    cwd: &Path,
) -> Result<Reply<()>> {
    match slot {
        Slot::ProjectName => {
            let prompt = InputPrompt {
                slot,
                message: "Project name:".to_string(),
                initial: DEFAULT_TARGET_DIR.to_string(),
                validate: None,
            };
            let Reply::Answer(name) = prompter.input(&prompt)? else {
                return Ok(Reply::Cancelled);
            };
            state.target = TargetSpec::resolve(&name, cwd);
            state.answers.project_name = Some(name);
        }
        Slot::Overwrite => {
            let prompt = ConfirmPrompt {
                slot,
                message: format!(
                    "{} is not empty. Some files may be overwritten. Do you want to continue?",
                    state.target.display_label()
                ),
                initial: false,
            };
            let Reply::Answer(overwrite) = prompter.confirm(&prompt)? else {
                return Ok(Reply::Cancelled);
            };
            state.answers.overwrite = Some(overwrite);
            if !overwrite {
                return Ok(Reply::Cancelled);
            }
        }
        Slot::IsGit => {
            let prompt = ConfirmPrompt {
                slot,
                message: "Initialize a git repository with commit hooks (husky, commitlint, lint-staged)?"
                    .to_string(),
                initial: true,
            };
            let Reply::Answer(is_git) = prompter.confirm(&prompt)? else {
                return Ok(Reply::Cancelled);
            };
            state.answers.is_git = Some(is_git);
        }
        Slot::PackageName => {
            let prompt = InputPrompt {
                slot,
                message: "Package name:".to_string(),
                initial: to_valid_package_name(&state.target.project_name),
                validate: Some(validate_package_name),
            };
            loop {
                let Reply::Answer(name) = prompter.input(&prompt)? else {
                    return Ok(Reply::Cancelled);
                };
                match validate_package_name(&name) {
                    Ok(()) => {
                        state.answers.package_name = Some(name);
                        break;
                    }
                    Err(message) => prompter.reject(slot, message)?,
                }
            }
        }
    }

    Ok(Reply::Answer(()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_decision() {
        assert!(GitDecision::new(true, None).is_git_project);
        assert!(GitDecision::new(true, Some(false)).is_git_project);
        assert!(GitDecision::new(false, Some(true)).is_git_project);
        assert!(!GitDecision::new(false, Some(false)).is_git_project);
        assert!(!GitDecision::new(false, None).is_git_project);

        assert!(GitDecision::new(false, Some(true)).needs_init());
        assert!(!GitDecision::new(true, None).needs_init());
    }

    #[test]
    fn test_final_package_name() {
        let cwd = Path::new("/work");
        let mut result = FlowResult {
            target: TargetSpec::resolve("My App", cwd),
            answers: FlowAnswers::default(),
            git: GitDecision::new(false, Some(false)),
        };
        assert_eq!(result.final_package_name(), "My App");

        result.answers.package_name = Some("my-app".into());
        assert_eq!(result.final_package_name(), "my-app");
    }

    #[test]
    fn test_state_from_args() {
        let cwd = Path::new("/work");
        let state = FlowState::new(Some("my-app//"), cwd);
        assert!(state.target_from_args);
        assert_eq!(state.target.normalized_dir, "my-app");

        let state = FlowState::new(None, cwd);
        assert!(!state.target_from_args);
        assert_eq!(state.target.normalized_dir, DEFAULT_TARGET_DIR);
    }
}
