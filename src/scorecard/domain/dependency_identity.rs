use reqwest::Url;
use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;

/// Host of the redirect-style package proxy whose URLs hide the real source.
const GOPKG_HOST: &str = "gopkg.in";

/// Host that `gopkg.in` packages are served from.
const GOPKG_SOURCE_HOST: &str = "github.com";

/// Why a VCS root lookup answer could not be turned into an identity.
///
/// Carries no import path: the caller knows which reference it was
/// resolving and attaches it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    #[error("resolved module root is empty")]
    EmptyRoot,

    #[error("invalid repository url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("repository url {url:?} has no host")]
    MissingHost { url: String },
}

/// Canonical identity of a dependency's source repository.
///
/// Two identities are equal when platform, organization, repository and
/// commit agree. `root` records the module root the identity was resolved
/// from and does not take part in equality, so different import paths of
/// one repository share a single score lookup.
#[derive(Debug, Clone)]
pub struct DependencyIdentity {
    platform: String,
    organization: String,
    repository: String,
    root: String,
    commit: Option<String>,
}

impl DependencyIdentity {
    /// Creates an identity from already-canonical parts.
    pub fn new(
        platform: impl Into<String>,
        organization: impl Into<String>,
        repository: impl Into<String>,
        root: impl Into<String>,
    ) -> Result<Self, IdentityError> {
        let root = root.into();
        if root.is_empty() {
            return Err(IdentityError::EmptyRoot);
        }

        Ok(Self {
            platform: platform.into(),
            organization: organization.into(),
            repository: repository.into(),
            root,
            commit: None,
        })
    }

    /// Pins the identity to a commit (SHA-1, hex).
    pub fn with_commit(mut self, commit: impl Into<String>) -> Self {
        self.commit = Some(commit.into());
        self
    }

    /// Builds the identity for a repository URL and module root as reported
    /// by a VCS root lookup.
    ///
    /// `gopkg.in` URLs are rewritten to the GitHub repository they proxy:
    /// version suffixes are stripped from every path segment and single
    /// segment packages map to `go-<name>/<name>`.
    pub fn from_repo_root(repo_url: &str, root: &str) -> Result<Self, IdentityError> {
        let url = Url::parse(repo_url).map_err(|e| IdentityError::InvalidUrl {
            url: repo_url.to_string(),
            reason: e.to_string(),
        })?;

        let mut host = url.host_str().unwrap_or_default().to_string();
        let mut path = url.path().trim_matches('/').to_string();

        if host.contains(GOPKG_HOST) {
            path = rewrite_gopkg_path(&path);
            host = GOPKG_SOURCE_HOST.to_string();
        }

        if host.is_empty() {
            return Err(IdentityError::MissingHost {
                url: repo_url.to_string(),
            });
        }

        let (organization, repository) = path.split_once('/').unwrap_or((path.as_str(), ""));

        Self::new(host.as_str(), organization, repository, root)
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn organization(&self) -> &str {
        &self.organization
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn commit(&self) -> Option<&str> {
        self.commit.as_deref()
    }
}

fn rewrite_gopkg_path(path: &str) -> String {
    let segments: Vec<&str> = path
        .split('/')
        .map(|segment| segment.split_once('.').map_or(segment, |(name, _)| name))
        .collect();

    match segments.as_slice() {
        [name] => format!("go-{name}/{name}"),
        _ => segments.join("/"),
    }
}

impl PartialEq for DependencyIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.platform == other.platform
            && self.organization == other.organization
            && self.repository == other.repository
            && self.commit == other.commit
    }
}

impl Eq for DependencyIdentity {}

impl Hash for DependencyIdentity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.platform.hash(state);
        self.organization.hash(state);
        self.repository.hash(state);
        self.commit.hash(state);
    }
}

impl fmt::Display for DependencyIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.platform, self.organization, self.repository)
    }
}
