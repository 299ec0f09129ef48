//! The questions, their order and when each one is asked

use super::probe::TargetProbe;
use super::FlowState;
use crate::package_name::is_valid_package_name;

/// One question of the flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Only when no directory was passed on the command line
    ProjectName,
    /// Only when the target exists and has content
    Overwrite,
    /// Only when the target is not a git repository yet
    IsGit,
    /// Only when the project name is not a valid package name
    PackageName,
}

/// Questions in the order they are considered
pub const SLOTS: [Slot; 4] = [Slot::ProjectName, Slot::Overwrite, Slot::IsGit, Slot::PackageName];

impl Slot {
    /// Whether the question is asked, given earlier answers and the target as it is now
    pub fn is_active(self, state: &FlowState, probe: &TargetProbe) -> bool {
        match self {
            Slot::ProjectName => !state.target_from_args,
            Slot::Overwrite => probe.has_content(),
            Slot::IsGit => !probe.is_git_repo,
            Slot::PackageName => !is_valid_package_name(&state.target.project_name),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Slot::ProjectName => "project name",
            Slot::Overwrite => "overwrite confirmation",
            Slot::IsGit => "git setup",
            Slot::PackageName => "package name",
        }
    }
}
