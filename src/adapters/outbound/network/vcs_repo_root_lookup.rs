use crate::ports::outbound::{RepoRoot, RepoRootLookup};
use crate::shared::Result;
use async_trait::async_trait;
use regex::Regex;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::debug;

/// Hosts whose repository root can be derived from the import path alone.
struct StaticRule {
    host: &'static str,
    pattern: &'static LazyLock<Regex>,
}

static GITHUB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<root>github\.com/[A-Za-z0-9_.\-]+/[A-Za-z0-9_.\-]+)(/[A-Za-z0-9_.\-]+)*$")
        .expect("github pattern is valid")
});

static BITBUCKET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<root>bitbucket\.org/[A-Za-z0-9_.\-]+/[A-Za-z0-9_.\-]+)(/[A-Za-z0-9_.\-]+)*$")
        .expect("bitbucket pattern is valid")
});

static GOPKG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<root>gopkg\.in/(?:[A-Za-z0-9_\-]+/)?[A-Za-z0-9_\-]+\.v[0-9]+(?:-unstable)?)(/[A-Za-z0-9_.\-]+)*$")
        .expect("gopkg pattern is valid")
});

/// `example.com/repo.git/sub` style paths with an explicit VCS suffix.
static VCS_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<root>(?:[a-z0-9.\-]+\.)+[a-z0-9.\-]+(?::[0-9]+)?(?:/~?[A-Za-z0-9_.\-]+)+?\.(?:bzr|git|hg|svn))(/~?[A-Za-z0-9_.\-]+)*$")
        .expect("vcs suffix pattern is valid")
});

static STATIC_RULES: [StaticRule; 4] = [
    StaticRule {
        host: "github.com/",
        pattern: &GITHUB,
    },
    StaticRule {
        host: "bitbucket.org/",
        pattern: &BITBUCKET,
    },
    StaticRule {
        host: "gopkg.in/",
        pattern: &GOPKG,
    },
    StaticRule {
        host: "",
        pattern: &VCS_SUFFIX,
    },
];

static META_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<meta\s+([^>]*)>").expect("meta pattern is valid")
});

static META_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\b(name|content)\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
        .expect("attribute pattern is valid")
});

/// VcsRepoRootLookup adapter implementing Go's remote import path rules
///
/// Well-known hosts are resolved from the path itself; any other host is
/// asked for its `go-import` meta tag over HTTPS (`?go-get=1`).
pub struct VcsRepoRootLookup {
    client: reqwest::Client,
    scheme: &'static str,
}

impl VcsRepoRootLookup {
    pub fn new(timeout: Duration) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(format!("scorecard-check/{}", version))
            .build()?;

        Ok(Self {
            client,
            scheme: "https",
        })
    }

    /// Performs meta tag discovery over plain HTTP.
    #[cfg(test)]
    fn insecure(timeout: Duration) -> Result<Self> {
        Ok(Self {
            scheme: "http",
            ..Self::new(timeout)?
        })
    }

    fn validate_import_path(reference: &str) -> Result<()> {
        if reference.is_empty() {
            anyhow::bail!("empty import path");
        }
        if reference.starts_with('/') {
            anyhow::bail!("import path {:?} must not be absolute", reference);
        }
        if reference.contains('\\') || reference.chars().any(char::is_whitespace) {
            anyhow::bail!("invalid import path {:?}", reference);
        }
        if reference.split('/').any(|segment| segment == "..") {
            anyhow::bail!("import path {:?} contains '..'", reference);
        }
        Ok(())
    }

    fn match_static(reference: &str) -> Option<RepoRoot> {
        STATIC_RULES
            .iter()
            .filter(|rule| reference.starts_with(rule.host))
            .find_map(|rule| rule.pattern.captures(reference))
            .and_then(|captures| captures.name("root"))
            .map(|root| {
                let root = root.as_str();
                RepoRoot::new(format!("https://{}", root), root)
            })
    }

    async fn discover(&self, reference: &str) -> Result<RepoRoot> {
        let url = format!("{}://{}?go-get=1", self.scheme, reference);
        debug!(%url, "discovering go-import meta tag");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("unrecognized import path {:?}: {}", reference, e))?;

        if !response.status().is_success() {
            anyhow::bail!(
                "unrecognized import path {:?}: {} returned status {}",
                reference,
                url,
                response.status()
            );
        }

        let body = response.text().await?;
        parse_go_import(&body, reference).ok_or_else(|| {
            anyhow::anyhow!(
                "unrecognized import path {:?}: no go-import meta tag found",
                reference
            )
        })
    }
}

#[async_trait]
impl RepoRootLookup for VcsRepoRootLookup {
    async fn lookup(&self, reference: &str) -> Result<RepoRoot> {
        Self::validate_import_path(reference)?;

        if let Some(repo_root) = Self::match_static(reference) {
            debug!(reference, root = %repo_root.root, "matched static rule");
            return Ok(repo_root);
        }

        self.discover(reference).await
    }
}

/// Finds the `go-import` tag whose prefix covers `reference`.
///
/// `mod` (module proxy) entries are ignored.
fn parse_go_import(html: &str, reference: &str) -> Option<RepoRoot> {
    META_TAG.captures_iter(html).find_map(|tag| {
        let attributes = tag.get(1)?.as_str();
        let mut name = None;
        let mut content = None;
        for attribute in META_ATTRIBUTE.captures_iter(attributes) {
            let value = attribute
                .get(2)
                .or_else(|| attribute.get(3))
                .map(|m| m.as_str());
            match attribute.get(1).map(|m| m.as_str().to_ascii_lowercase()).as_deref() {
                Some("name") => name = value,
                Some("content") => content = value,
                _ => {}
            }
        }

        if name != Some("go-import") {
            return None;
        }

        let fields: Vec<&str> = content?.split_whitespace().collect();
        let [prefix, vcs, repo_url] = fields.as_slice() else {
            return None;
        };
        let covers = reference == *prefix
            || reference
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with('/'));

        (covers && *vcs != "mod").then(|| RepoRoot::new(*repo_url, *prefix))
    })
}
