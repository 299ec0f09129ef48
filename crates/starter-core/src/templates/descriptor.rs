//! package.json handling for generated projects

use crate::templates::tooling::{GIT_TOOLING_DEV_DEPENDENCIES, GIT_TOOLING_FIELDS};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

/// File name of the package descriptor inside the template and the target
pub const DESCRIPTOR_FILE: &str = "package.json";

const DEV_DEPENDENCIES: &str = "devDependencies";

#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("Failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} must contain a JSON object", path.display())]
    NotAnObject { path: PathBuf },

    #[error("Failed to serialize package descriptor")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The template's package.json, key order preserved
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageDescriptor(Map<String, Value>);

impl PackageDescriptor {
    /// Parse descriptor text; `path` is only used in error messages
    pub fn parse(content: &str, path: &Path) -> Result<Self, DescriptorError> {
        serde_json::from_str(content).map_err(|source| {
            // Well-formed JSON that is not an object
            if source.is_data() {
                DescriptorError::NotAnObject {
                    path: path.to_path_buf(),
                }
            } else {
                DescriptorError::Parse {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })
    }

    pub async fn load(path: &Path) -> Result<Self, DescriptorError> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|source| DescriptorError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        Self::parse(&content, path)
    }

    /// Adapt the template descriptor to the generated project.
    ///
    /// Without git tooling the hook scripts, the lint-staged config and the
    /// tooling devDependencies are dropped. Entries that are already absent
    /// are ignored. `name` is always replaced.
    pub fn transform(mut self, is_git_project: bool, final_name: &str) -> Self {
        if !is_git_project {
            for field in GIT_TOOLING_FIELDS {
                self.0.shift_remove(*field);
            }
            if let Some(Value::Object(deps)) = self.0.get_mut(DEV_DEPENDENCIES) {
                for dep in GIT_TOOLING_DEV_DEPENDENCIES {
                    deps.shift_remove(*dep);
                }
            }
        }

        self.0
            .insert("name".to_string(), Value::String(final_name.to_string()));
        self
    }

    /// Two-space indented JSON with a trailing newline
    pub fn to_pretty_string(&self) -> Result<String, DescriptorError> {
        let mut out = serde_json::to_string_pretty(self).map_err(DescriptorError::Serialize)?;
        out.push('\n');
        Ok(out)
    }

    /// Write next to `path` first, then rename over it
    pub async fn write_atomic(&self, path: &Path) -> Result<(), DescriptorError> {
        let content = self.to_pretty_string()?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| DESCRIPTOR_FILE.to_string());
        let tmp_path = path.with_file_name(format!(".{}.tmp", file_name));

        let write_err = |source: std::io::Error| DescriptorError::Write {
            path: path.to_path_buf(),
            source,
        };
        fs::write(&tmp_path, content).await.map_err(write_err)?;
        if let Err(source) = fs::rename(&tmp_path, path).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(write_err(source));
        }

        Ok(())
    }
}
