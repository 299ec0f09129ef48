//! `git init` for freshly generated projects

use std::path::Path;
use std::process::Stdio;
use thiserror::Error;
use tokio::process::Command as TokioCommand;

/// Program run to initialize repositories
pub const GIT_PROGRAM: &str = "git";

#[derive(Debug, Error)]
pub enum GitInitError {
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("git init exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },
}

/// Run `git init` inside `dir`
pub async fn init_repository(dir: &Path) -> Result<(), GitInitError> {
    init_repository_with(GIT_PROGRAM, dir).await
}

/// Run `<program> init` inside `dir`
pub async fn init_repository_with(program: &str, dir: &Path) -> Result<(), GitInitError> {
    let output = TokioCommand::new(program)
        .arg("init")
        .current_dir(dir)
        .stdin(Stdio::null())
        .output()
        .await
        .map_err(|source| GitInitError::Spawn {
            program: program.to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(GitInitError::Failed {
            status: output
                .status
                .code()
                .map(|code| format!("code {}", code))
                .unwrap_or_else(|| "signal".to_string()),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    tracing::debug!(dir = %dir.display(), "git repository initialized");
    Ok(())
}

/// Check if git is available in PATH
pub fn is_git_available() -> bool {
    std::process::Command::new(GIT_PROGRAM)
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}
