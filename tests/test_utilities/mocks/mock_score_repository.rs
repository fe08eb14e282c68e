use async_trait::async_trait;
use scorecard_check::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock ScoreRepository keyed by `platform/organization/repository`
///
/// Identities without a registered outcome answer like the API does for an
/// unknown repository: `NoScore`.
#[derive(Default, Clone)]
pub struct MockScoreRepository {
    outcomes: HashMap<String, std::result::Result<Score, EvaluationError>>,
    delay: Duration,
    pub requests: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockScoreRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_score(mut self, identity: &str, score: Score) -> Self {
        self.outcomes.insert(identity.to_string(), Ok(score));
        self
    }

    pub fn with_error(mut self, identity: &str, error: EvaluationError) -> Self {
        self.outcomes.insert(identity.to_string(), Err(error));
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl ScoreRepository for MockScoreRepository {
    async fn fetch_score(
        &self,
        identity: &DependencyIdentity,
    ) -> std::result::Result<Score, EvaluationError> {
        self.requests.lock().unwrap().push(identity.to_string());
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        self.outcomes
            .get(&identity.to_string())
            .cloned()
            .unwrap_or_else(|| {
                Err(EvaluationError::NoScore {
                    root: identity.root().to_string(),
                })
            })
    }
}
