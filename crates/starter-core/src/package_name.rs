//! npm package name validation

use crate::target::DEFAULT_TARGET_DIR;
use regex::Regex;
use std::sync::LazyLock;

/// npm refuses names longer than this
pub const MAX_PACKAGE_NAME_LEN: usize = 214;

static VALID_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:@[a-z0-9\-*~][a-z0-9\-*._~]*/)?[a-z0-9\-~][a-z0-9\-._~]*$")
        .expect("package name pattern is valid")
});

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\-~]+").expect("disallowed pattern is valid"));

/// Check whether `name` can be used as the `name` field of a package.json
pub fn is_valid_package_name(name: &str) -> bool {
    !name.is_empty() && name.len() <= MAX_PACKAGE_NAME_LEN && VALID_NAME.is_match(name)
}

/// Message shown when the package-name answer is rejected
pub fn validate_package_name(name: &str) -> Result<(), &'static str> {
    if is_valid_package_name(name) {
        Ok(())
    } else {
        Err("Invalid package.json name")
    }
}

/// Best-effort conversion of a directory name into a valid package name.
///
/// Used as the suggestion for the package-name question.
pub fn to_valid_package_name(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    let dashed = WHITESPACE.replace_all(&lowered, "-").into_owned();
    let stripped = dashed
        .strip_prefix(|c: char| c == '.' || c == '_')
        .unwrap_or(&dashed);
    let cleaned = DISALLOWED.replace_all(stripped, "-").into_owned();

    if cleaned.is_empty() {
        DEFAULT_TARGET_DIR.to_string()
    } else {
        cleaned.chars().take(MAX_PACKAGE_NAME_LEN).collect()
    }
}
