//! Configuration file support for scorecard-check.
//!
//! Provides YAML-based configuration through `.scorecard-check.yaml` files:
//! the policy list plus client settings, with discovery, loading and
//! validation.

use anyhow::bail;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

use crate::adapters::outbound::network::DEFAULT_API_URL;
use crate::application::dto::DEFAULT_CONCURRENCY;
use crate::scorecard::domain::{Policy, Rule, RuleTarget};
use crate::scorecard::services::ScopeMatcher;
use crate::shared::error::{EvaluationError, ScorecardCheckError};
use crate::shared::security::{read_regular_file, MAX_METADATA_FILE_SIZE};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = ".scorecard-check.yaml";

/// HTTP timeout used when the config does not set `timeoutSeconds`.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ConfigFile {
    pub api_url: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub concurrency: Option<usize>,
    #[serde(default)]
    pub policies: Vec<PolicyConfig>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// One entry of the `policies` list.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyConfig {
    pub description: String,
    #[serde(default)]
    pub include: Vec<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

/// A minimum score, for one check or (without `check`) the overall score.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleConfig {
    pub check: Option<String>,
    pub minimum_score: f64,
}

impl ConfigFile {
    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency.unwrap_or(DEFAULT_CONCURRENCY)
    }

    /// Converts the policy list into domain policies, in file order.
    pub fn to_policies(&self) -> Vec<Policy> {
        self.policies.iter().map(PolicyConfig::to_policy).collect()
    }
}

impl PolicyConfig {
    fn to_policy(&self) -> Policy {
        let rules = self
            .rules
            .iter()
            .map(|rule| {
                Rule::new(
                    RuleTarget::from_check_name(rule.check.as_deref()),
                    rule.minimum_score,
                )
            })
            .collect();

        Policy::new(self.description.clone(), rules)
            .with_include(self.include.clone())
            .with_exclude(self.exclude.clone())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = read_regular_file(path, MAX_METADATA_FILE_SIZE).map_err(|e| {
        ScorecardCheckError::FileReadError {
            path: path.to_path_buf(),
            details: format!("{:#}", e),
        }
    })?;

    let config: ConfigFile =
        serde_yaml_ng::from_str(&content).map_err(|e| ScorecardCheckError::ConfigParseError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

    validate_config(&config).map_err(|e| ScorecardCheckError::ConfigParseError {
        path: path.to_path_buf(),
        details: format!("{:#}", e),
    })?;
    warn_unknown_fields(&config);

    debug!(path = %path.display(), policies = config.policies.len(), "loaded config");
    Ok(config)
}

/// Candidate config locations, in lookup order.
pub fn config_candidates(cwd: &Path, home: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = vec![cwd.join(CONFIG_FILENAME)];
    if let Some(home) = home {
        let in_home = home.join(CONFIG_FILENAME);
        if !candidates.contains(&in_home) {
            candidates.push(in_home);
        }
    }
    candidates
}

/// Loads the explicit config if given, otherwise the first config found in
/// `cwd` or `home`.
///
/// # Errors
/// Fails with `ConfigNotFound` listing the searched paths when no candidate
/// exists.
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path, home: Option<&Path>) -> Result<ConfigFile> {
    if let Some(path) = explicit {
        return load_config_from_path(path);
    }

    let candidates = config_candidates(cwd, home);
    match candidates.iter().find(|candidate| candidate.is_file()) {
        Some(path) => load_config_from_path(path),
        None => Err(ScorecardCheckError::ConfigNotFound {
            searched: candidates
                .iter()
                .map(|candidate| candidate.display().to_string())
                .collect::<Vec<_>>()
                .join(", "),
        }
        .into()),
    }
}

/// The user's home directory, from `HOME` (or `USERPROFILE` on Windows).
pub fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.concurrency == Some(0) {
        bail!("concurrency must be at least 1");
    }
    if config.timeout_seconds == Some(0) {
        bail!("timeoutSeconds must be at least 1");
    }
    if config.policies.is_empty() {
        warn!("config defines no policies; every import will pass");
    }

    for (i, policy) in config.policies.iter().enumerate() {
        if policy.description.trim().is_empty() {
            bail!("policies[{}].description must not be empty", i);
        }
        if policy.rules.is_empty() {
            bail!("policies[{}] ({:?}) must define at least one rule", i, policy.description);
        }
        for (j, rule) in policy.rules.iter().enumerate() {
            if !rule.minimum_score.is_finite() {
                bail!("policies[{}].rules[{}].minimumScore must be a finite number", i, j);
            }
        }
        if let Err(EvaluationError::Config { pattern, reason }) = ScopeMatcher::compile(&policy.to_policy()) {
            bail!("policies[{}] has an invalid package pattern {:?}: {}", i, pattern, reason);
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        warn!(field = %key, "unknown config field will be ignored");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "config.yaml",
            r#"
apiUrl: https://scorecard.example.com
timeoutSeconds: 5
concurrency: 4
policies:
  - description: min score
    rules:
      - minimumScore: 5
  - description: maintained
    include: ["github.com/org/*"]
    exclude: ["github.com/org/legacy"]
    rules:
      - check: Maintained
        minimumScore: 7.5
"#,
        );

        let config = load_config_from_path(&path).unwrap();
        assert_eq!(config.api_url(), "https://scorecard.example.com");
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.concurrency(), 4);

        let policies = config.to_policies();
        assert_eq!(policies.len(), 2);
        assert_eq!(policies[0].description(), "min score");
        assert_eq!(policies[0].rules()[0].target(), &RuleTarget::Overall);
        assert_eq!(policies[0].rules()[0].minimum_score(), 5.0);
        assert_eq!(policies[1].include(), ["github.com/org/*".to_string()]);
        assert_eq!(policies[1].exclude(), ["github.com/org/legacy".to_string()]);
        assert_eq!(
            policies[1].rules()[0].target(),
            &RuleTarget::Check("Maintained".to_string())
        );
    }

    #[test]
    fn test_defaults_when_settings_are_omitted() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "config.yaml", "policies: []\n");

        let config = load_config_from_path(&path).unwrap();
        assert_eq!(config.api_url(), DEFAULT_API_URL);
        assert_eq!(config.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECONDS));
        assert_eq!(config.concurrency(), DEFAULT_CONCURRENCY);
        assert!(config.to_policies().is_empty());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yaml"));
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "bad.yaml", "policies: [[[broken");

        let err = format!("{}", load_config_from_path(&path).unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_glob_fails_at_load_time() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "config.yaml",
            r#"
policies:
  - description: broken
    include: ["github.com/[org"]
    rules:
      - minimumScore: 5
"#,
        );

        let err = format!("{}", load_config_from_path(&path).unwrap_err());
        assert!(err.contains("invalid package pattern"));
        assert!(err.contains("github.com/[org"));
    }

    #[test]
    fn test_policy_without_rules_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "config.yaml",
            "policies:\n  - description: empty\n",
        );

        let err = format!("{}", load_config_from_path(&path).unwrap_err());
        assert!(err.contains("must define at least one rule"));
    }

    #[test]
    fn test_blank_description_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "config.yaml",
            "policies:\n  - description: \"  \"\n    rules:\n      - minimumScore: 1\n",
        );

        let err = format!("{}", load_config_from_path(&path).unwrap_err());
        assert!(err.contains("description must not be empty"));
    }

    #[test]
    fn test_zero_concurrency_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "config.yaml", "concurrency: 0\npolicies: []\n");

        let err = format!("{}", load_config_from_path(&path).unwrap_err());
        assert!(err.contains("concurrency must be at least 1"));
    }

    #[test]
    fn test_unknown_fields_are_captured() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "config.yaml",
            "policies: []\nunknown_field: true\nanother_unknown: value\n",
        );

        let config = load_config_from_path(&path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("unknown_field"));
        assert!(config.unknown_fields.contains_key("another_unknown"));
    }

    #[test]
    fn test_resolve_prefers_working_directory_over_home() {
        let cwd = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        write_config(&cwd, CONFIG_FILENAME, "concurrency: 2\npolicies: []\n");
        write_config(&home, CONFIG_FILENAME, "concurrency: 3\npolicies: []\n");

        let config = resolve_config(None, cwd.path(), Some(home.path())).unwrap();
        assert_eq!(config.concurrency(), 2);
    }

    #[test]
    fn test_resolve_falls_back_to_home() {
        let cwd = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        write_config(&home, CONFIG_FILENAME, "concurrency: 3\npolicies: []\n");

        let config = resolve_config(None, cwd.path(), Some(home.path())).unwrap();
        assert_eq!(config.concurrency(), 3);
    }

    #[test]
    fn test_resolve_explicit_path_wins() {
        let cwd = TempDir::new().unwrap();
        write_config(&cwd, CONFIG_FILENAME, "concurrency: 2\npolicies: []\n");
        let explicit = write_config(&cwd, "other.yaml", "concurrency: 5\npolicies: []\n");

        let config = resolve_config(Some(&explicit), cwd.path(), None).unwrap();
        assert_eq!(config.concurrency(), 5);
    }

    #[test]
    fn test_resolve_not_found_lists_searched_paths() {
        let cwd = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();

        let err = format!(
            "{}",
            resolve_config(None, cwd.path(), Some(home.path())).unwrap_err()
        );
        assert!(err.contains("No config file found"));
        assert!(err.contains(&cwd.path().join(CONFIG_FILENAME).display().to_string()));
        assert!(err.contains(&home.path().join(CONFIG_FILENAME).display().to_string()));
    }
}
