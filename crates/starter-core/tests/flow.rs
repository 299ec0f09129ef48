//! Question flow tests: which questions are asked, in which order, and how
//! cancellation ends the flow.

mod common;

use common::{cancel_input, snapshot, text, yes_no, ScriptedPrompter};
use starter_core::flow::{run_flow, FlowOutcome, Reply, Slot};
use starter_core::target::DEFAULT_TARGET_DIR;
use std::fs;

fn completed(outcome: FlowOutcome) -> starter_core::FlowResult {
    match outcome {
        FlowOutcome::Completed(result) => result,
        FlowOutcome::Cancelled => panic!("flow was cancelled"),
    }
}

#[test]
fn current_dir_with_valid_name_only_asks_about_git() {
    let temp = tempfile::tempdir().unwrap();
    let cwd = temp.path().join("demo");
    fs::create_dir(&cwd).unwrap();

    let mut prompter = ScriptedPrompter::new([yes_no(false)]);
    let result = completed(run_flow(&mut prompter, Some("."), &cwd).unwrap());

    assert_eq!(prompter.asked, vec![Slot::IsGit]);
    assert_eq!(result.target.project_name, "demo");
    assert_eq!(result.final_package_name(), "demo");
    assert_eq!(result.answers.is_git, Some(false));
    assert!(!result.git.is_git_project);
}

#[test]
fn declining_overwrite_cancels_without_further_questions() {
    let temp = tempfile::tempdir().unwrap();
    let target = temp.path().join("my-app");
    fs::create_dir(&target).unwrap();
    fs::write(target.join("keep.txt"), "precious").unwrap();
    let before = snapshot(&target);

    let mut prompter = ScriptedPrompter::new([yes_no(false), yes_no(true)]);
    let outcome = run_flow(&mut prompter, Some("my-app"), temp.path()).unwrap();

    assert!(matches!(outcome, FlowOutcome::Cancelled));
    assert_eq!(prompter.asked, vec![Slot::Overwrite]);
    assert!(prompter.messages[0].starts_with("Target directory \"my-app\" is not empty."));
    assert_eq!(snapshot(&target), before);
}

#[test]
fn accepting_overwrite_continues() {
    let temp = tempfile::tempdir().unwrap();
    let target = temp.path().join("my-app");
    fs::create_dir(&target).unwrap();
    fs::write(target.join("keep.txt"), "precious").unwrap();

    let mut prompter = ScriptedPrompter::new([yes_no(true), yes_no(true)]);
    let result = completed(run_flow(&mut prompter, Some("my-app"), temp.path()).unwrap());

    assert_eq!(prompter.asked, vec![Slot::Overwrite, Slot::IsGit]);
    assert_eq!(result.answers.overwrite, Some(true));
    assert!(result.git.is_git_project);
    assert!(result.git.needs_init());
}

#[test]
fn existing_repository_skips_git_question() {
    let temp = tempfile::tempdir().unwrap();
    let target = temp.path().join("repo");
    fs::create_dir_all(target.join(".git")).unwrap();

    let mut prompter = ScriptedPrompter::new([]);
    let result = completed(run_flow(&mut prompter, Some("repo"), temp.path()).unwrap());

    assert!(prompter.asked.is_empty(), "asked {:?}", prompter.asked);
    assert_eq!(result.answers.is_git, None);
    assert!(result.git.is_git_project);
    assert!(result.git.already_repository);
    assert!(!result.git.needs_init());
}

#[test]
fn invalid_project_name_asks_for_package_name_until_valid() {
    let temp = tempfile::tempdir().unwrap();

    let mut prompter = ScriptedPrompter::new([
        yes_no(false),
        text("Still Invalid"),
        text("my-app"),
    ]);
    let result = completed(run_flow(&mut prompter, Some("My App"), temp.path()).unwrap());

    assert_eq!(
        prompter.asked,
        vec![Slot::IsGit, Slot::PackageName, Slot::PackageName]
    );
    assert_eq!(
        prompter.rejections,
        vec![(Slot::PackageName, "Invalid package.json name".to_string())]
    );
    assert_eq!(result.target.normalized_dir, "My App");
    assert_eq!(result.final_package_name(), "my-app");
}

#[test]
fn project_name_answer_changes_target() {
    let temp = tempfile::tempdir().unwrap();
    fs::create_dir(temp.path().join("taken")).unwrap();
    fs::write(temp.path().join("taken/file"), "x").unwrap();

    // The overwrite question must see the directory typed at the name prompt
    let mut prompter = ScriptedPrompter::new([text("taken/"), yes_no(true), yes_no(false)]);
    let result = completed(run_flow(&mut prompter, None, temp.path()).unwrap());

    assert_eq!(
        prompter.asked,
        vec![Slot::ProjectName, Slot::Overwrite, Slot::IsGit]
    );
    assert_eq!(result.answers.project_name.as_deref(), Some("taken/"));
    assert_eq!(result.target.normalized_dir, "taken");
    assert_eq!(result.target.path(temp.path()), temp.path().join("taken"));
}

#[test]
fn blank_project_name_uses_default() {
    let temp = tempfile::tempdir().unwrap();

    let mut prompter = ScriptedPrompter::new([text("   "), yes_no(true)]);
    let result = completed(run_flow(&mut prompter, None, temp.path()).unwrap());

    assert_eq!(result.target.normalized_dir, DEFAULT_TARGET_DIR);
    assert_eq!(result.final_package_name(), DEFAULT_TARGET_DIR);
}

#[test]
fn cancelling_any_question_stops_the_flow() {
    let temp = tempfile::tempdir().unwrap();

    let mut prompter = ScriptedPrompter::new([cancel_input()]);
    let outcome = run_flow(&mut prompter, None, temp.path()).unwrap();
    assert!(matches!(outcome, FlowOutcome::Cancelled));

    let mut prompter = ScriptedPrompter::new([
        common::Scripted::Confirm(Reply::Cancelled),
        yes_no(true),
    ]);
    let outcome = run_flow(&mut prompter, Some("fresh"), temp.path()).unwrap();
    assert!(matches!(outcome, FlowOutcome::Cancelled));
    assert!(!prompter.is_exhausted());
    assert!(!temp.path().join("fresh").exists());
}

#[test]
fn package_name_suggestion_is_derived_from_project_name() {
    let temp = tempfile::tempdir().unwrap();

    struct Capture(Vec<String>);
    impl starter_core::Prompter for Capture {
        fn input(
            &mut self,
            prompt: &starter_core::flow::InputPrompt,
        ) -> anyhow::Result<Reply<String>> {
            self.0.push(prompt.initial.clone());
            Ok(Reply::Answer(prompt.initial.clone()))
        }
        fn confirm(
            &mut self,
            _prompt: &starter_core::flow::ConfirmPrompt,
        ) -> anyhow::Result<Reply<bool>> {
            Ok(Reply::Answer(false))
        }
        fn reject(&mut self, _slot: Slot, message: &str) -> anyhow::Result<()> {
            anyhow::bail!("unexpected rejection: {}", message)
        }
    }

    let mut prompter = Capture(Vec::new());
    let result = completed(run_flow(&mut prompter, Some("Cool Project"), temp.path()).unwrap());

    assert_eq!(prompter.0, vec!["cool-project".to_string()]);
    assert_eq!(result.final_package_name(), "cool-project");
}
