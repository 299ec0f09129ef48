//! "Next steps" shown after the project is created

use crate::runtime::PackageManager;
use std::path::Path;

/// Commands the user runs next: `cd` (unless already there), then install
pub fn next_steps(cwd: &Path, root: &Path, package_manager: &PackageManager) -> Vec<String> {
    let mut steps = Vec::new();

    if root != cwd {
        let shown = root.strip_prefix(cwd).unwrap_or(root);
        steps.push(format!("cd {}", quote_path(&shown.display().to_string())));
    }

    steps.push(package_manager.install_command());
    steps
}

fn quote_path(path: &str) -> String {
    if path.contains(char::is_whitespace) {
        format!("\"{}\"", path)
    } else {
        path.to_string()
    }
}
