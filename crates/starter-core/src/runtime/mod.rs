//! External tools around the generated project
//!
//! This module provides:
//! - `git init` for projects that opted into git tooling
//! - Detection of the invoking package manager

pub mod git;
pub mod package_manager;

pub use git::{init_repository, init_repository_with, GitInitError, GIT_PROGRAM};
pub use package_manager::PackageManager;
