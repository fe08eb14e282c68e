use crate::ports::outbound::ScoreRepository;
use crate::scorecard::domain::{Check, DependencyIdentity, Documentation, Score};
use crate::shared::error::EvaluationError;
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Public OpenSSF Scorecard API
pub const DEFAULT_API_URL: &str = "https://api.securityscorecards.dev";

#[derive(Debug, Deserialize)]
struct ScorecardResponse {
    #[serde(default)]
    score: f64,
    #[serde(default)]
    checks: Option<Vec<CheckResponse>>,
}

#[derive(Debug, Deserialize)]
struct CheckResponse {
    name: String,
    #[serde(default)]
    score: f64,
    #[serde(default)]
    reason: Option<String>,
    #[serde(default)]
    details: Option<Vec<String>>,
    #[serde(default)]
    documentation: Option<DocumentationResponse>,
}

#[derive(Debug, Deserialize)]
struct DocumentationResponse {
    #[serde(default)]
    short: String,
    #[serde(default)]
    url: String,
}

impl From<ScorecardResponse> for Score {
    fn from(response: ScorecardResponse) -> Self {
        let checks = response
            .checks
            .unwrap_or_default()
            .into_iter()
            .map(|check| {
                let documentation = check
                    .documentation
                    .map(|doc| Documentation {
                        short: doc.short,
                        url: doc.url,
                    })
                    .unwrap_or_default();
                Check::new(check.name, check.score, check.reason.unwrap_or_default())
                    .with_details(check.details.unwrap_or_default())
                    .with_documentation(documentation)
            })
            .collect();
        Score::new(response.score, checks)
    }
}

/// ScorecardClient adapter for the OpenSSF Scorecard REST API
///
/// This adapter implements the ScoreRepository port. Each call is a single
/// GET; there are no retries, so a failed fetch is reported as is.
pub struct ScorecardClient {
    client: reqwest::Client,
    api_url: Url,
}

impl ScorecardClient {
    /// Creates a client for the API at `api_url`
    ///
    /// # Errors
    /// Returns an error if `api_url` is not an absolute URL or the HTTP
    /// client cannot be built
    pub fn new(api_url: &str, timeout: Duration) -> Result<Self> {
        let api_url = Url::parse(api_url)
            .map_err(|e| anyhow::anyhow!("Invalid scorecard API url {:?}: {}", api_url, e))?;
        if api_url.cannot_be_a_base() {
            anyhow::bail!("Invalid scorecard API url {:?}: not a base url", api_url.as_str());
        }

        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("scorecard-check/{}", version);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client, api_url })
    }

    /// `<api>/projects/<platform>/<org>/<repo>[?commit=<sha>]`
    fn project_url(&self, identity: &DependencyIdentity) -> Result<Url, EvaluationError> {
        let mut url = self.api_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| EvaluationError::Fetch {
                status: None,
                reason: format!("invalid scorecard API url {}", self.api_url),
            })?;
            segments
                .pop_if_empty()
                .push("projects")
                .push(identity.platform())
                .push(identity.organization())
                .extend(identity.repository().split('/'));
        }
        if let Some(commit) = identity.commit() {
            url.query_pairs_mut().append_pair("commit", commit);
        }
        Ok(url)
    }
}

#[async_trait]
impl ScoreRepository for ScorecardClient {
    async fn fetch_score(&self, identity: &DependencyIdentity) -> Result<Score, EvaluationError> {
        let url = self.project_url(identity)?;
        debug!(%url, "requesting scorecard");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| EvaluationError::Fetch {
                status: None,
                reason: e.to_string(),
            })?;

        match response.status() {
            StatusCode::OK => {}
            StatusCode::NOT_FOUND => {
                return Err(EvaluationError::NoScore {
                    root: identity.root().to_string(),
                })
            }
            status => {
                return Err(EvaluationError::Fetch {
                    status: Some(status.as_u16()),
                    reason: status.canonical_reason().unwrap_or("unexpected status").to_string(),
                })
            }
        }

        let body = response.bytes().await.map_err(|e| EvaluationError::Fetch {
            status: None,
            reason: e.to_string(),
        })?;

        let decoded: ScorecardResponse =
            serde_json::from_slice(&body).map_err(|e| EvaluationError::Decode {
                reason: e.to_string(),
            })?;

        Ok(decoded.into())
    }
}
