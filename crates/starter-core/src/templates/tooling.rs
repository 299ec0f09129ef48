//! Git tooling shipped with the template
//!
//! Everything that only makes sense inside a git repository is listed here.
//! The copier and the descriptor transformer both read these tables.

use crate::templates::descriptor::DESCRIPTOR_FILE;

/// Top-level template entries dropped when the project is not a git project
pub const GIT_TOOLING_ENTRIES: &[&str] = &[".husky", "commitlint.config.js", ".gitignore"];

/// devDependencies removed from package.json when the project is not a git project
pub const GIT_TOOLING_DEV_DEPENDENCIES: &[&str] = &[
    "@commitlint/cli",
    "@commitlint/config-conventional",
    "husky",
    "lint-staged",
];

/// Top-level package.json fields removed when the project is not a git project
pub const GIT_TOOLING_FIELDS: &[&str] = &["scripts", "lint-staged"];

/// Template files that are renamed when written to the target
pub const RENAMED_ENTRIES: &[(&str, &str)] = &[("_gitignore", ".gitignore")];

/// Top-level template entries never copied as-is; they are written by the
/// descriptor transformer once the tree is in place
pub const GENERATED_ENTRIES: &[&str] = &[DESCRIPTOR_FILE];

/// Whether a top-level entry belongs to the git tooling
pub fn is_git_tooling_entry(name: &str) -> bool {
    GIT_TOOLING_ENTRIES.contains(&name)
}

/// Whether a top-level entry is produced by the generator instead of copied
pub fn is_generated_entry(name: &str) -> bool {
    GENERATED_ENTRIES.contains(&name)
}

/// Name an entry gets in the target directory
pub fn target_name(name: &str) -> &str {
    RENAMED_ENTRIES
        .iter()
        .find(|(from, _)| *from == name)
        .map(|(_, to)| *to)
        .unwrap_or(name)
}
