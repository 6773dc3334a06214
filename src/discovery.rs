// ============================================================================
// discovery.rs — glob-based enumeration of local manifests
// ============================================================================
//
// Grounded on config.rs's glob-based source file expansion (the teacher
// expands `sources: ["src/**/*.cpp"]` patterns against the filesystem); here
// the same `glob` crate enumerates `crucible.toml` manifests under a synced
// workspace root, standing in for the external repository synchronizer's
// "supplies named local clones" contract (spec.md §4.4).
// ============================================================================

use std::path::{Path, PathBuf};

use crate::manifest::ManifestProject;
use crate::project::Project;

/// Finds every manifest matching `pattern` (e.g. `*/crucible.toml`) rooted
/// at `workspace`, and loads each into a `ManifestProject`. Manifests that
/// fail to parse are collected as errors rather than silently skipped,
/// since a skipped manifest would silently drop a project from the suite.
pub fn discover(workspace: &Path, pattern: &str) -> Result<Vec<Box<dyn Project>>, anyhow::Error> {
    let full_pattern = workspace.join(pattern);
    let full_pattern = full_pattern
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("workspace path is not valid UTF-8"))?;

    let mut projects: Vec<Box<dyn Project>> = Vec::new();
    for entry in glob::glob(full_pattern)? {
        let path: PathBuf = entry?;
        let project = ManifestProject::load(&path)
            .map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))?;
        projects.push(Box::new(project));
    }
    Ok(projects)
}
