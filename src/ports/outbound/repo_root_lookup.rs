use crate::shared::Result;
use async_trait::async_trait;

/// Repository location of a module, as reported by VCS discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRoot {
    /// Clone URL of the repository (e.g. `https://github.com/spf13/cobra`)
    pub repo_url: String,
    /// Import path prefix that corresponds to the repository root
    pub root: String,
}

impl RepoRoot {
    pub fn new(repo_url: impl Into<String>, root: impl Into<String>) -> Self {
        Self {
            repo_url: repo_url.into(),
            root: root.into(),
        }
    }
}

/// RepoRootLookup port for mapping an import path to its repository
///
/// This port abstracts Go's VCS discovery: static rules for well-known
/// hosts and `?go-get=1` meta tags for everything else.
#[async_trait]
pub trait RepoRootLookup: Send + Sync {
    /// Looks up the repository that serves `reference`
    ///
    /// # Errors
    /// Returns an error if the path is malformed or no repository could be
    /// discovered for it.
    async fn lookup(&self, reference: &str) -> Result<RepoRoot>;
}
