//! Charm-style CLI prompts using cliclack

use crate::flow::{
    run_flow, AutoPrompter, ConfirmPrompt, FlowOutcome, InputPrompt, Prompter, Reply, Slot,
};
use crate::project::{create_project, CreatedProject, GitInitStatus};
use crate::runtime::PackageManager;
use crate::{summary, templates};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io;
use std::path::{Path, PathBuf};

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Target directory as typed on the command line
    pub directory: Option<String>,

    /// Template tree to copy instead of the bundled one
    pub template_dir: Option<PathBuf>,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// How a run ended when it did not fail
#[derive(Debug)]
pub enum RunOutcome {
    Created(CreatedProject),
    Cancelled,
}

/// Prompter backed by cliclack
#[derive(Debug, Clone, Copy, Default)]
pub struct ClackPrompter;

impl Prompter for ClackPrompter {
    fn input(&mut self, prompt: &InputPrompt) -> anyhow::Result<Reply<String>> {
        let mut input = cliclack::input(&prompt.message)
            .default_input(&prompt.initial)
            .required(false);
        if let Some(validate) = prompt.validate {
            input = input.validate(move |value: &String| validate(value.as_str()));
        }
        interpret(input.interact())
    }

    fn confirm(&mut self, prompt: &ConfirmPrompt) -> anyhow::Result<Reply<bool>> {
        interpret(
            cliclack::confirm(&prompt.message)
                .initial_value(prompt.initial)
                .interact(),
        )
    }

    fn reject(&mut self, _slot: Slot, message: &str) -> anyhow::Result<()> {
        cliclack::log::error(message)?;
        Ok(())
    }
}

/// Esc and Ctrl+C surface as `Interrupted`
fn interpret<T>(result: io::Result<T>) -> anyhow::Result<Reply<T>> {
    match result {
        Ok(value) => Ok(Reply::Answer(value)),
        Err(e) if e.kind() == io::ErrorKind::Interrupted => Ok(Reply::Cancelled),
        Err(e) => Err(e.into()),
    }
}

/// Run the CLI with interactive prompts
pub async fn run(args: CreateArgs) -> Result<RunOutcome> {
    cliclack::intro("create-starter")?;

    let cwd = std::env::current_dir().context("Failed to read the current directory")?;

    // Step 1: Locate template
    let template_dir = templates::locate_template_dir(args.template_dir.as_deref())?;
    if args.template_dir.is_some() {
        cliclack::log::info(format!("Using template from {}", template_dir.display()))?;
    }

    // Step 2: Ask questions
    let outcome = if args.yes {
        cliclack::log::info("Accepting all defaults (--yes)")?;
        run_flow(&mut AutoPrompter, args.directory.as_deref(), &cwd)?
    } else {
        run_flow(&mut ClackPrompter, args.directory.as_deref(), &cwd)?
    };

    let result = match outcome {
        FlowOutcome::Completed(result) => result,
        FlowOutcome::Cancelled => {
            cliclack::outro_cancel(format!("{} Operation cancelled", "✖".red()))?;
            return Ok(RunOutcome::Cancelled);
        }
    };

    // Step 3: Write project
    let spinner = cliclack::spinner();
    spinner.start("Creating project...");
    let created = match create_project(&template_dir, &result, &cwd).await {
        Ok(created) => created,
        Err(e) => {
            spinner.stop("Failed to create project");
            return Err(e);
        }
    };
    spinner.stop(format!(
        "Created {} in {}",
        created.package_name,
        created.root.display()
    ));

    // Step 4: Report git
    match &created.git {
        GitInitStatus::NotRequested => cliclack::log::info("Skipped git tooling")?,
        GitInitStatus::AlreadyRepository => {
            cliclack::log::info("Using the existing git repository")?
        }
        GitInitStatus::Initialized => cliclack::log::success("Initialized a git repository")?,
        GitInitStatus::Failed(reason) => {
            cliclack::log::warning(format!("Could not initialize git: {}", reason))?
        }
    }

    // Step 5: Show next steps
    print_next_steps(&cwd, &created.root)?;

    Ok(RunOutcome::Created(created))
}

fn print_next_steps(cwd: &Path, root: &Path) -> Result<()> {
    let package_manager = PackageManager::detect();
    let steps = summary::next_steps(cwd, root, &package_manager);

    println!();
    println!("  Done. Now run:");
    println!();

    for step in &steps {
        println!("    {}", step.cyan());
    }
    println!();

    cliclack::outro("Happy hacking!")?;

    Ok(())
}
