//! Template copying with git tooling filtering

use crate::templates::tooling;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;
use walkdir::WalkDir;

/// Copy the template tree into `target_dir`.
///
/// Top-level entries that belong to the git tooling are skipped unless
/// `is_git_project` is set. package.json is never copied: the adapted
/// descriptor is written separately, so an interrupted copy cannot leave the
/// template's own descriptor behind. Existing files with the same name are
/// overwritten, anything else already in the target is left alone.
/// Returns the top-level names written, in template order.
pub async fn copy_template(
    template_dir: &Path,
    target_dir: &Path,
    is_git_project: bool,
) -> Result<Vec<String>> {
    let mut names = Vec::new();
    let mut entries = fs::read_dir(template_dir)
        .await
        .with_context(|| format!("Failed to read template directory: {}", template_dir.display()))?;
    while let Some(entry) = entries.next_entry().await? {
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();

    // Ensure target directory exists
    fs::create_dir_all(target_dir)
        .await
        .with_context(|| format!("Failed to create target directory: {}", target_dir.display()))?;

    let mut copied = Vec::new();
    for name in names {
        let dest_name = tooling::target_name(&name);
        if !should_copy_entry(dest_name, is_git_project) {
            tracing::debug!(entry = %name, "skipping template entry");
            continue;
        }

        copy_entry(&template_dir.join(&name), &target_dir.join(dest_name)).await?;
        copied.push(dest_name.to_string());
    }

    Ok(copied)
}

/// Determine if a top-level template entry is written to the target
pub fn should_copy_entry(name: &str, is_git_project: bool) -> bool {
    if tooling::is_generated_entry(name) {
        return false;
    }
    is_git_project || !tooling::is_git_tooling_entry(name)
}

/// Copy a single file, or a directory recursively
async fn copy_entry(source: &Path, dest: &Path) -> Result<()> {
    let metadata = fs::metadata(source)
        .await
        .with_context(|| format!("Failed to read {}", source.display()))?;

    if !metadata.is_dir() {
        return copy_file(source, dest).await;
    }

    for entry in WalkDir::new(source).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk {}", source.display()))?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .context("Walked outside of the template directory")?;
        let target_path = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target_path)
                .await
                .with_context(|| format!("Failed to create directory: {}", target_path.display()))?;
        } else {
            copy_file(entry.path(), &target_path).await?;
        }
    }

    Ok(())
}

async fn copy_file(source: &Path, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::copy(source, dest)
        .await
        .with_context(|| format!("Failed to write file: {}", dest.display()))?;
    tracing::trace!(from = %source.display(), to = %dest.display(), "copied");

    Ok(())
}
