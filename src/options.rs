// ============================================================================
// options.rs — Command-line arguments (CLI)
// ============================================================================
//
// Grounded on the teacher's clap-derive BuildOptions, with the flag set
// replaced per spec.md §6 / SPEC_FULL.md §6: auth/group/branches/timeout
// describe the external sync+list collaborators' contract; workspace and
// manifest are this crate's own demo stand-in for them.
// ============================================================================

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

/// A comma-separated list flag, grounded on cmd/unibuild/comma_list.go's
/// flag.Value implementation.
#[derive(Debug, Clone)]
pub struct CommaList(pub Vec<String>);

impl std::str::FromStr for CommaList {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CommaList(
            s.split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(str::to_string)
                .collect(),
        ))
    }
}

fn parse_timeout(s: &str) -> Result<Duration, String> {
    humantime_duration(s).map_err(|e| e.to_string())
}

/// A minimal `30s` / `5m` / `1h` duration parser, since the teacher's
/// Cargo.toml doesn't carry a dedicated humantime crate and this flag's
/// grammar (cmd/unibuild/main.go's `time.Duration` flag) is small enough
/// not to need one.
fn humantime_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    let split_at = s
        .find(|c: char| !c.is_ascii_digit())
        .ok_or_else(|| format!("missing unit in duration {:?}", s))?;
    let (digits, unit) = s.split_at(split_at);
    let value: u64 = digits
        .parse()
        .map_err(|_| format!("invalid duration {:?}", s))?;
    let seconds = match unit {
        "s" => value,
        "m" => value * 60,
        "h" => value * 3600,
        other => return Err(format!("unknown duration unit {:?}", other)),
    };
    Ok(Duration::from_secs(seconds))
}

#[derive(Parser, Debug)]
#[command(name = "crucible")]
#[command(about = "Cross-repository build orchestrator", long_about = None)]
pub struct Options {
    /// Filter tokens (project names and +deps/+dependent/+exclude modifiers)
    pub filters: Vec<String>,

    /// Credential for the remote repository host (env fallback: CRUCIBLE_AUTH_TOKEN)
    #[arg(long, env = "CRUCIBLE_AUTH_TOKEN")]
    pub auth_token: Option<String>,

    /// Remote group/namespace whose projects should be synced
    #[arg(long)]
    pub group: Option<String>,

    /// Base URL of the remote repository host
    #[arg(long, default_value = "https://gitlab.com/")]
    pub base_url: String,

    /// Comma-separated list of branches to try, first match wins
    #[arg(long, default_value = "main")]
    pub branches: CommaList,

    /// Build session deadline, e.g. "30s", "5m"; absent means no timeout
    #[arg(long, value_parser = parse_timeout)]
    pub timeout: Option<Duration>,

    /// Use UTC timestamps in log output instead of local time
    #[arg(long)]
    pub log_utc: bool,

    /// Local workspace root to discover manifests under
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Glob pattern (relative to workspace) matching project manifests
    #[arg(long, default_value = "*/crucible.toml")]
    pub manifest: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_list_splits_and_trims() {
        let CommaList(parts) = "main, develop,release".parse().unwrap();
        assert_eq!(parts, vec!["main", "develop", "release"]);
    }

    #[test]
    fn comma_list_of_empty_string_is_empty() {
        let CommaList(parts) = "".parse().unwrap();
        assert!(parts.is_empty());
    }

    #[test]
    fn timeout_parses_minutes() {
        assert_eq!(parse_timeout("5m").unwrap(), Duration::from_secs(300));
    }

    #[test]
    fn timeout_rejects_unknown_unit() {
        assert!(parse_timeout("5x").is_err());
    }
}
