// ============================================================================
// identity.rs — requirement identity and the satisfies relation
// ============================================================================
//
// A RequirementIdentity is the logical name of a buildable artifact.
// Today it wraps a single opaque string (conventionally `group:artifact`
// for Maven-style ecosystems, but the core never inspects the contents).
// The newtype leaves room for an ecosystem tag without an API break.
// ============================================================================

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct RequirementIdentity(String);

impl RequirementIdentity {
    pub fn new(name: impl Into<String>) -> Self {
        RequirementIdentity(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequirementIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RequirementIdentity {
    fn from(s: &str) -> Self {
        RequirementIdentity::new(s)
    }
}

impl From<String> for RequirementIdentity {
    fn from(s: String) -> Self {
        RequirementIdentity::new(s)
    }
}

/// What a project consumes. Reserved for a future `accepts(version)`
/// capability once RequirementVersion grows a real version field.
pub trait Requirement {
    fn id(&self) -> RequirementIdentity;
}

impl Requirement for RequirementIdentity {
    fn id(&self) -> RequirementIdentity {
        self.clone()
    }
}

/// What a project produces. Version is a reserved future field: today two
/// RequirementVersions are equal iff their identities are equal.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RequirementVersion {
    pub id: RequirementIdentity,
}

impl RequirementVersion {
    pub fn new(id: impl Into<RequirementIdentity>) -> Self {
        RequirementVersion { id: id.into() }
    }
}

impl Requirement for RequirementVersion {
    fn id(&self) -> RequirementIdentity {
        self.id.clone()
    }
}

/// A produced version satisfies a consumed requirement iff their identities
/// match. When versions are added, the producer's version must also be
/// accepted by the consumer's requirement.
pub fn satisfies(version: &RequirementVersion, requirement: &dyn Requirement) -> bool {
    version.id == requirement.id()
}
