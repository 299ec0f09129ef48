//! Writing the project once every question is answered
//!
//! Order: template tree, then package.json, then `git init`. A failure in the
//! first two steps is returned; a failing `git init` is only reported.

use crate::flow::FlowResult;
use crate::runtime::git::{init_repository_with, GIT_PROGRAM};
use crate::templates::{copy_template, PackageDescriptor, DESCRIPTOR_FILE};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// What happened with version control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitInitStatus {
    /// User declined the git tooling
    NotRequested,
    AlreadyRepository,
    Initialized,
    /// `git init` failed; the project itself was still written
    Failed(String),
}

/// Result of a successful run
#[derive(Debug, Clone)]
pub struct CreatedProject {
    pub root: PathBuf,
    pub package_name: String,
    /// Top-level entries copied from the template
    pub copied: Vec<String>,
    pub git: GitInitStatus,
}

/// Materialize the template for a completed flow
pub async fn create_project(
    template_dir: &Path,
    result: &FlowResult,
    cwd: &Path,
) -> Result<CreatedProject> {
    create_project_with_git(template_dir, result, cwd, GIT_PROGRAM).await
}

/// Same as [`create_project`], running `git_program` to initialize the repository
pub async fn create_project_with_git(
    template_dir: &Path,
    result: &FlowResult,
    cwd: &Path,
    git_program: &str,
) -> Result<CreatedProject> {
    let root = result.target.path(cwd);
    let is_git_project = result.git.is_git_project;
    let package_name = result.final_package_name().to_string();

    // Parse before copying so a broken template leaves the target untouched
    let descriptor_path = template_dir.join(DESCRIPTOR_FILE);
    let descriptor = PackageDescriptor::load(&descriptor_path)
        .await
        .context("Failed to load the template package descriptor")?;

    let copied = copy_template(template_dir, &root, is_git_project).await?;

    descriptor
        .transform(is_git_project, &package_name)
        .write_atomic(&root.join(DESCRIPTOR_FILE))
        .await?;
    tracing::debug!(root = %root.display(), package = %package_name, "project written");

    let git = if !is_git_project {
        GitInitStatus::NotRequested
    } else if result.git.already_repository {
        GitInitStatus::AlreadyRepository
    } else {
        match init_repository_with(git_program, &root).await {
            Ok(()) => GitInitStatus::Initialized,
            Err(e) => {
                tracing::debug!(error = %e, "git init failed");
                GitInitStatus::Failed(e.to_string())
            }
        }
    };

    Ok(CreatedProject {
        root,
        package_name,
        copied,
        git,
    })
}
