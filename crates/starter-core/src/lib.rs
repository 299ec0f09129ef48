//! Starter Core - project scaffolding from the bundled starter template
//!
//! Asks a short series of questions, copies the template into the target
//! directory and adapts the generated package.json to the answers.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Target resolution, package name validation,
//!   template copying, package.json pruning, `git init`
//! - **Layer 2: Workflow Orchestration** - The question flow (`flow`) driven
//!   through the `Prompter` trait, and `project::create_project`
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use starter_core::flow::{run_flow, AutoPrompter, FlowOutcome};
//! use starter_core::project::create_project;
//!
//! let cwd = std::env::current_dir()?;
//! if let FlowOutcome::Completed(result) = run_flow(&mut AutoPrompter, Some("my-app"), &cwd)? {
//!     create_project(&template_dir, &result, &cwd).await?;
//! }
//! ```

pub mod flow;
pub mod package_name;
pub mod project;
pub mod runtime;
pub mod summary;
pub mod target;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use flow::{run_flow, FlowOutcome, FlowResult, GitDecision, Prompter, Reply};
pub use project::{create_project, create_project_with_git, CreatedProject, GitInitStatus};
pub use target::TargetSpec;
pub use templates::{copy_template, PackageDescriptor};

#[cfg(feature = "tui")]
pub use tui::run;
