//! Target directory resolution
//!
//! Turns the raw directory argument (or the project-name answer) into a
//! normalized directory plus the project name derived from it.

use std::path::{Path, PathBuf};

/// Directory used when no target is supplied or the input is blank
pub const DEFAULT_TARGET_DIR: &str = "starter-project";

/// Marker for "scaffold into the current directory"
pub const CURRENT_DIR: &str = ".";

/// Trim the input and strip trailing path separators.
///
/// Returns `None` when nothing usable is left.
pub fn format_target_dir(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches(|c: char| c == '/' || c == '\\');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// A resolved target directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSpec {
    /// Input exactly as typed or passed on the command line
    pub raw_input: String,

    /// Input with trailing separators stripped, never empty
    pub normalized_dir: String,

    /// Name used for the package when the user does not pick one
    pub project_name: String,
}

impl TargetSpec {
    /// Resolve a raw input against the working directory.
    ///
    /// Re-run this every time the input changes; nothing is cached.
    pub fn resolve(raw: &str, cwd: &Path) -> Self {
        let normalized_dir =
            format_target_dir(raw).unwrap_or_else(|| DEFAULT_TARGET_DIR.to_string());
        let mut spec = Self {
            raw_input: raw.to_string(),
            normalized_dir,
            project_name: String::new(),
        };
        spec.project_name = spec.derive_project_name(cwd);
        spec
    }

    pub fn is_current_dir(&self) -> bool {
        self.normalized_dir == CURRENT_DIR
    }

    /// Basename of the working directory for `.`, otherwise the directory as given
    pub fn derive_project_name(&self, cwd: &Path) -> String {
        if !self.is_current_dir() {
            return self.normalized_dir.clone();
        }

        cwd.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_TARGET_DIR.to_string())
    }

    /// Absolute location of the target
    pub fn path(&self, cwd: &Path) -> PathBuf {
        if self.is_current_dir() {
            cwd.to_path_buf()
        } else {
            cwd.join(&self.normalized_dir)
        }
    }

    /// Subject used in the overwrite question
    pub fn display_label(&self) -> String {
        if self.is_current_dir() {
            "Current directory".to_string()
        } else {
            format!("Target directory \"{}\"", self.normalized_dir)
        }
    }
}
