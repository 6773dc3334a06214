// ============================================================================
// manifest.rs — crucible.toml manifest loading, the demo project analyzer
// ============================================================================
//
// A concrete, demo-grade stand-in for the per-ecosystem project analyzer
// spec.md names as an external collaborator (only its contract matters to
// the core): given a local clone, produce a Project whose uses()/builds()
// reflect the project's declared requirements. Grounded on config.rs's TOML
// deserialization style and multimaven/project.go's "group:artifact"
// identity shape.
// ============================================================================

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::identity::{Requirement, RequirementIdentity, RequirementVersion};
use crate::log_sink::{LogLevel, LogSink};
use crate::project::{Project, ProjectInfo};
use crate::session::BuildContext;

/// On-disk shape of a `crucible.toml` manifest. `builds` and `uses` are
/// plain identity strings, mirroring `multimaven`'s flattened
/// `groupID:artifactID` convention without committing the core to any
/// particular ecosystem's naming.
#[derive(Debug, Deserialize)]
pub struct ManifestConfig {
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub builds: Vec<String>,
    #[serde(default)]
    pub uses: Vec<String>,
    /// Native build command, split on whitespace, run via std::process::Command.
    #[serde(default = "default_build_command")]
    pub build_command: Vec<String>,
}

fn default_version() -> String {
    "0.0.0".to_string()
}

fn default_build_command() -> Vec<String> {
    Vec::new()
}

/// A Project loaded from a `crucible.toml` manifest. `build` runs the
/// configured command inside `root`, streaming stdout/stderr through the
/// log sink with the `"{name} | "` prefix — the demo realization of the
/// external build executor contract.
pub struct ManifestProject {
    info: ProjectInfo,
    builds: Vec<String>,
    uses: Vec<String>,
    build_command: Vec<String>,
    root: PathBuf,
}

impl ManifestProject {
    pub fn load(path: &Path) -> Result<Self, anyhow::Error> {
        let text = fs::read_to_string(path)?;
        let config: ManifestConfig = toml::from_str(&text)?;
        let root = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Ok(ManifestProject {
            info: ProjectInfo::new(config.name, config.version),
            builds: config.builds,
            uses: config.uses,
            build_command: config.build_command,
            root,
        })
    }
}

impl Project for ManifestProject {
    fn info(&self) -> ProjectInfo {
        self.info.clone()
    }

    fn uses(&self) -> Vec<Box<dyn Requirement>> {
        self.uses
            .iter()
            .map(|id| Box::new(RequirementIdentity::new(id.clone())) as Box<dyn Requirement>)
            .collect()
    }

    fn builds(&self) -> Vec<RequirementVersion> {
        self.builds
            .iter()
            .map(|id| RequirementVersion::new(RequirementIdentity::new(id.clone())))
            .collect()
    }

    fn build(&self, ctx: &BuildContext, log: &mut dyn LogSink) -> Result<(), anyhow::Error> {
        if self.build_command.is_empty() {
            log.line(
                Some(&self.info.name),
                LogLevel::Warn,
                "no build_command configured, skipping",
            );
            return Ok(());
        }
        if ctx.is_cancelled() {
            anyhow::bail!("build cancelled before start");
        }

        let (program, args) = self
            .build_command
            .split_first()
            .expect("checked non-empty above");
        let output = std::process::Command::new(program)
            .args(args)
            .current_dir(&self.root)
            .output()?;

        for line in String::from_utf8_lossy(&output.stdout).lines() {
            log.line(Some(&self.info.name), LogLevel::Info, line);
        }
        for line in String::from_utf8_lossy(&output.stderr).lines() {
            log.line(Some(&self.info.name), LogLevel::Warn, line);
        }

        if !output.status.success() {
            anyhow::bail!("{} exited with {}", program, output.status);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log_sink::RecordingSink;
    use std::io::Write;

    #[test]
    fn loads_name_builds_and_uses_from_toml() {
        let dir = tempfile::tempdir().unwrap();
        let manifest_path = dir.path().join("crucible.toml");
        let mut f = fs::File::create(&manifest_path).unwrap();
        writeln!(
            f,
            r#"
            name = "lib"
            builds = ["com.example:lib"]
            uses = []
            "#
        )
        .unwrap();

        let project = ManifestProject::load(&manifest_path).unwrap();
        assert_eq!(project.info().name, "lib");
        assert_eq!(project.builds().len(), 1);
        assert!(project.uses().is_empty());
    }

    #[test]
    fn missing_build_command_is_a_noop_build() {
        let dir = tempfile::tempdir().unwrap();
        let manifest_path = dir.path().join("crucible.toml");
        fs::write(&manifest_path, r#"name = "app""#).unwrap();

        let project = ManifestProject::load(&manifest_path).unwrap();
        let ctx = BuildContext::new();
        let mut log = RecordingSink::new();
        assert!(project.build(&ctx, &mut log).is_ok());
    }
}
