// ============================================================================
// project.rs — Project capability trait and human-facing identity
// ============================================================================
//
// A Project is a polymorphic value with four capabilities: it can describe
// itself (info), say what it consumes and produces, and build itself. The
// core never inspects a project beyond these four capabilities — the real
// ecosystem analyzer and build executor live outside this crate.
// ============================================================================

use crate::identity::{Requirement, RequirementVersion};
use crate::log_sink::LogSink;
use crate::session::BuildContext;

/// Human-facing identity, used for display and for name-based filter matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
pub struct ProjectInfo {
    pub name: String,
    pub version: String,
}

impl ProjectInfo {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        ProjectInfo {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// A buildable unit: declares what it consumes and produces, and can be
/// invoked to build itself. `uses()`/`builds()` alone determine dependency
/// graph edges (see ProjectSuite); `deps()` is a supplemental, purely
/// informational declared-dependency list carried from the source ecosystem
/// metadata (e.g. a multi-module descriptor's own module list) and is never
/// consulted when building the graph.
pub trait Project {
    fn info(&self) -> ProjectInfo;

    fn uses(&self) -> Vec<Box<dyn Requirement>>;

    fn builds(&self) -> Vec<RequirementVersion>;

    /// Declared dependencies, for reporting only. Default: none declared.
    fn deps(&self) -> Vec<ProjectInfo> {
        Vec::new()
    }

    /// Runs the native build tool for this project. Implementations should
    /// honor `ctx`'s cancellation token and deadline, and stream progress to
    /// `log`. A non-zero exit or I/O failure should be returned as an error;
    /// the build loop wraps it with the project name (see Error::BuildFailed).
    fn build(&self, ctx: &BuildContext, log: &mut dyn LogSink) -> Result<(), anyhow::Error>;
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::identity::RequirementIdentity;

    /// An in-memory Project used throughout the test suite, grounded on the
    /// `P(name, builds=[...], uses=[...])` shorthand from the spec's
    /// end-to-end scenarios.
    pub struct StubProject {
        pub name: String,
        pub builds: Vec<&'static str>,
        pub uses: Vec<&'static str>,
        pub fail: bool,
    }

    impl StubProject {
        pub fn new(name: &str, builds: Vec<&'static str>, uses: Vec<&'static str>) -> Self {
            StubProject {
                name: name.to_string(),
                builds,
                uses,
                fail: false,
            }
        }

        pub fn failing(name: &str) -> Self {
            StubProject {
                name: name.to_string(),
                builds: Vec::new(),
                uses: Vec::new(),
                fail: true,
            }
        }
    }

    impl Project for StubProject {
        fn info(&self) -> ProjectInfo {
            ProjectInfo::new(self.name.clone(), "0.1.0")
        }

        fn uses(&self) -> Vec<Box<dyn Requirement>> {
            self.uses
                .iter()
                .map(|id| Box::new(RequirementIdentity::new(*id)) as Box<dyn Requirement>)
                .collect()
        }

        fn builds(&self) -> Vec<RequirementVersion> {
            self.builds
                .iter()
                .map(|id| RequirementVersion::new(RequirementIdentity::new(*id)))
                .collect()
        }

        fn build(&self, _ctx: &BuildContext, log: &mut dyn LogSink) -> Result<(), anyhow::Error> {
            log.line(Some(&self.name), crate::log_sink::LogLevel::Info, "building");
            if self.fail {
                anyhow::bail!("simulated failure");
            }
            Ok(())
        }
    }
}
