//! Template copying and package.json adaptation
//!
//! This module provides:
//! - The git tooling tables (entries and dependencies tied to git hooks)
//! - Template copying with git tooling filtering
//! - package.json loading, pruning and atomic writing

pub mod copier;
pub mod descriptor;
pub mod tooling;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use copier::copy_template;
pub use descriptor::{DescriptorError, PackageDescriptor, DESCRIPTOR_FILE};

/// Environment variable overriding the bundled template location
pub const TEMPLATE_DIR_ENV: &str = "CREATE_STARTER_TEMPLATE_DIR";

/// Name of the template directory shipped with the tool
pub const TEMPLATE_DIR_NAME: &str = "template";

/// Locate the template tree.
///
/// Order: explicit path, `CREATE_STARTER_TEMPLATE_DIR`, a `template/`
/// directory next to the executable, the workspace copy.
pub fn locate_template_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return ensure_template_dir(path.to_path_buf());
    }

    if let Ok(path) = std::env::var(TEMPLATE_DIR_ENV) {
        return ensure_template_dir(PathBuf::from(path));
    }

    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        let candidate = exe_dir.join(TEMPLATE_DIR_NAME);
        if candidate.is_dir() {
            return Ok(candidate);
        }
    }

    let bundled = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../..")
        .join(TEMPLATE_DIR_NAME);
    ensure_template_dir(bundled)
}

fn ensure_template_dir(path: PathBuf) -> Result<PathBuf> {
    if !path.is_dir() {
        anyhow::bail!("Template directory not found: {}", path.display());
    }
    if !path.join(DESCRIPTOR_FILE).is_file() {
        anyhow::bail!(
            "{} not found in template directory {}",
            DESCRIPTOR_FILE,
            path.display()
        );
    }
    path.canonicalize()
        .with_context(|| format!("Failed to resolve {}", path.display()))
}
