// ============================================================================
// error.rs — the core's error model
// ============================================================================
//
// Three errors originate in resolution/parsing (DuplicateProvider,
// DependencyCycle, InvalidFilter); BuildFailed is the distinct,
// externally-originated error the build loop wraps with a project name.
// ============================================================================

use thiserror::Error;

use crate::identity::RequirementIdentity;
use crate::project::ProjectInfo;

#[derive(Debug, Error)]
pub enum Error {
    #[error("both {first} and {second} build {identity}")]
    DuplicateProvider {
        identity: RequirementIdentity,
        first: String,
        second: String,
    },

    #[error("dependency cycle detected: {0}")]
    DependencyCycle(DependencyCycle),

    #[error("{message}")]
    InvalidFilter {
        position: usize,
        token: String,
        message: String,
    },

    #[error("problem building project {project}: {source}")]
    BuildFailed {
        project: String,
        #[source]
        source: anyhow::Error,
    },
}

impl Error {
    pub fn invalid_filter_modifier_before_project(position: usize, token: &str) -> Error {
        Error::InvalidFilter {
            position,
            token: token.to_string(),
            message: format!("modifier token {:?} must come after a project name", token),
        }
    }

    pub fn invalid_filter_malformed(position: usize, token: &str) -> Error {
        Error::InvalidFilter {
            position,
            token: token.to_string(),
            message: "invalid filter".to_string(),
        }
    }
}

/// The cycle witness carried by DependencyCycle: a non-empty sequence of
/// the projects that form the cycle, in the order the cycle was walked.
#[derive(Debug, Clone)]
pub struct DependencyCycle {
    projects: Vec<ProjectInfo>,
}

impl DependencyCycle {
    pub fn new(projects: Vec<ProjectInfo>) -> Self {
        DependencyCycle { projects }
    }

    /// A fresh copy of the cycle, so callers can't mutate the error's state.
    pub fn projects(&self) -> Vec<ProjectInfo> {
        self.projects.clone()
    }
}

impl std::fmt::Display for DependencyCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.projects.iter().map(|p| p.name.as_str()).collect();
        write!(f, "{:?}", names)
    }
}
