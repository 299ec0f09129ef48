//! create-starter - scaffold a project from the starter template

mod logging;

use anyhow::Result;
use clap::Parser;
use starter_core::tui::{CreateArgs, RunOutcome};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "create-starter")]
#[command(about = "Scaffold a new project from the starter template")]
#[command(version)]
pub struct Args {
    /// Project directory to create (`.` for the current directory)
    pub directory: Option<String>,

    /// Template directory to use instead of the bundled one (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            directory: args.directory,
            template_dir: args.template_dir,
            yes: args.yes,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    logging::init();

    let args = Args::parse();
    let result = starter_core::run(args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    match result? {
        RunOutcome::Created(project) => {
            tracing::debug!(root = %project.root.display(), "done");
        }
        RunOutcome::Cancelled => {
            tracing::debug!("cancelled by user");
        }
    }

    Ok(())
}
