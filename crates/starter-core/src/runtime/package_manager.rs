//! Detection of the package manager that launched the tool

use std::fmt;

/// Environment variable npm, pnpm, yarn and bun set for the processes they spawn
pub const USER_AGENT_ENV: &str = "npm_config_user_agent";

/// Used when no user agent is present
pub const DEFAULT_PACKAGE_MANAGER: &str = "npm";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageManager {
    pub name: String,
    pub version: Option<String>,
}

impl PackageManager {
    /// Parse a user agent such as `pnpm/9.1.0 npm/? node/v20.11.0 linux x64`
    pub fn from_user_agent(user_agent: Option<&str>) -> Self {
        let spec = user_agent
            .and_then(|ua| ua.split_whitespace().next())
            .filter(|spec| !spec.is_empty());

        match spec {
            Some(spec) => {
                let (name, version) = match spec.split_once('/') {
                    Some((name, version)) => (name, Some(version.to_string())),
                    None => (spec, None),
                };
                Self {
                    name: name.to_string(),
                    version,
                }
            }
            None => Self::default(),
        }
    }

    /// Read `npm_config_user_agent` from the environment
    pub fn detect() -> Self {
        Self::from_user_agent(std::env::var(USER_AGENT_ENV).ok().as_deref())
    }

    /// Command that installs the generated project's dependencies
    pub fn install_command(&self) -> String {
        match self.name.as_str() {
            "yarn" => "yarn".to_string(),
            name => format!("{} install", name),
        }
    }
}

impl Default for PackageManager {
    fn default() -> Self {
        Self {
            name: DEFAULT_PACKAGE_MANAGER.to_string(),
            version: None,
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{} {}", self.name, version),
            None => write!(f, "{}", self.name),
        }
    }
}
