use async_trait::async_trait;
use scorecard_check::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock RepoRootLookup with explicit roots and a shared call log
///
/// References without a registered root fall back to their first three
/// path segments on `https://`, like a GitHub-hosted module would.
#[derive(Default, Clone)]
pub struct MockRepoRootLookup {
    roots: HashMap<String, RepoRoot>,
    failures: HashMap<String, String>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockRepoRootLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(mut self, reference: &str, repo_url: &str, root: &str) -> Self {
        self.roots
            .insert(reference.to_string(), RepoRoot::new(repo_url, root));
        self
    }

    pub fn with_failure(mut self, reference: &str, reason: &str) -> Self {
        self.failures
            .insert(reference.to_string(), reason.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl RepoRootLookup for MockRepoRootLookup {
    async fn lookup(&self, reference: &str) -> Result<RepoRoot> {
        self.calls.lock().unwrap().push(reference.to_string());

        if let Some(reason) = self.failures.get(reference) {
            anyhow::bail!("{}", reason);
        }
        if let Some(root) = self.roots.get(reference) {
            return Ok(root.clone());
        }

        let root = reference.split('/').take(3).collect::<Vec<_>>().join("/");
        Ok(RepoRoot::new(format!("https://{}", root), root))
    }
}
