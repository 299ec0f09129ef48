//! Filesystem checks the question flow depends on

use std::io::ErrorKind;
use std::path::Path;

/// Name of the git metadata directory
pub const GIT_DIR: &str = ".git";

/// State of the target directory at the moment a question is considered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TargetProbe {
    pub exists: bool,
    /// No entries besides `.git`
    pub is_empty: bool,
    pub is_git_repo: bool,
}

impl TargetProbe {
    /// Look at `path` now. Never cached.
    pub fn take(path: &Path) -> Self {
        let is_git_repo = path.join(GIT_DIR).exists();

        match std::fs::read_dir(path) {
            Ok(entries) => {
                let is_empty = entries
                    .filter_map(|entry| entry.ok())
                    .all(|entry| entry.file_name() == GIT_DIR);
                Self {
                    exists: true,
                    is_empty,
                    is_git_repo,
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Self::default(),
            Err(e) => {
                // Exists but is unreadable or not a directory; treat as occupied
                tracing::debug!(path = %path.display(), error = %e, "cannot list target");
                Self {
                    exists: path.exists(),
                    is_empty: false,
                    is_git_repo,
                }
            }
        }
    }

    /// Existing content that copying could overwrite
    pub fn has_content(&self) -> bool {
        self.exists && !self.is_empty
    }
}
