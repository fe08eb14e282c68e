use crate::application::caches::{IdentityCache, ScoreCache};
use crate::ports::inbound::PolicyEvaluationPort;
use crate::ports::outbound::{RepoRootLookup, ScoreRepository};
use crate::scorecard::domain::{DependencyEvaluation, DependencyIdentity, Policy, Score};
use crate::scorecard::services::{RuleEvaluator, ScopeMatcher};
use crate::shared::error::EvaluationError;
use crate::shared::CancellationToken;
use async_trait::async_trait;
use tracing::{debug, warn};

/// A policy together with its compiled scope.
///
/// Scope compilation errors are kept rather than raised so that a broken
/// pattern only disables its own policy.
struct ScopedPolicy {
    policy: Policy,
    scope: Result<ScopeMatcher, EvaluationError>,
}

/// PolicyEngine - Core use case for evaluating one dependency reference
///
/// Resolves the reference to a repository identity, fetches that
/// repository's score, and checks it against every policy whose scope
/// covers the dependency. Identities and scores are memoised for the
/// engine's lifetime; policies are fixed at construction.
///
/// # Type Parameters
/// * `L` - RepoRootLookup implementation
/// * `S` - ScoreRepository implementation
pub struct PolicyEngine<L: RepoRootLookup, S: ScoreRepository> {
    policies: Vec<ScopedPolicy>,
    identities: IdentityCache<L>,
    scores: ScoreCache<S>,
}

impl<L: RepoRootLookup, S: ScoreRepository> PolicyEngine<L, S> {
    /// Creates an engine, compiling every policy's include/exclude scope
    pub fn new(policies: Vec<Policy>, lookup: L, repository: S) -> Self {
        let policies = policies
            .into_iter()
            .map(|policy| {
                let scope = ScopeMatcher::compile(&policy);
                if let Err(e) = &scope {
                    warn!(policy = policy.description(), error = %e, "policy disabled");
                }
                ScopedPolicy { policy, scope }
            })
            .collect();

        Self {
            policies,
            identities: IdentityCache::new(lookup),
            scores: ScoreCache::new(repository),
        }
    }

    /// Evaluates `reference` against every policy in configuration order
    ///
    /// # Returns
    /// A `DependencyEvaluation` holding:
    /// - the resolved identity, unless resolution failed
    /// - violations in policy order, then rule order
    /// - errors: a resolution error (alone), a `Config` error per policy with
    ///   an invalid scope, and at most one fetch error. After a fetch error
    ///   later policies are not evaluated, but their `Config` errors are
    ///   still reported.
    pub async fn evaluate(&self, reference: &str, cancel: &CancellationToken) -> DependencyEvaluation {
        let identity = match self.identities.resolve(reference, cancel).await {
            Ok(identity) => identity,
            Err(e) => {
                debug!(reference, error = %e, "resolution failed");
                return DependencyEvaluation::failed(e);
            }
        };

        let mut evaluation = DependencyEvaluation {
            identity: Some(identity.clone()),
            ..DependencyEvaluation::default()
        };
        let mut score: Option<Score> = None;
        let mut fetch_failed = false;

        for scoped in &self.policies {
            let scope = match &scoped.scope {
                Ok(scope) => scope,
                Err(e) => {
                    evaluation.errors.push(e.clone());
                    continue;
                }
            };

            if fetch_failed {
                continue;
            }

            if !scope.applies(identity.root()) {
                debug!(root = identity.root(), policy = scoped.policy.description(), "policy out of scope");
                continue;
            }

            if score.is_none() {
                match self.scores.get_score(&identity, cancel).await {
                    Ok(fetched) => score = Some(fetched),
                    Err(e) => {
                        evaluation.errors.push(e);
                        fetch_failed = true;
                        continue;
                    }
                }
            }

            if let Some(score) = &score {
                evaluation
                    .violations
                    .extend(RuleEvaluator::evaluate(identity.root(), &scoped.policy, score));
            }
        }

        evaluation
    }

    /// Resolves `reference` and returns its identity and score
    ///
    /// # Errors
    /// The resolution or fetch error for this reference, or `Cancelled`
    pub async fn get_score_for_reference(
        &self,
        reference: &str,
        cancel: &CancellationToken,
    ) -> Result<(DependencyIdentity, Score), EvaluationError> {
        let identity = self.identities.resolve(reference, cancel).await?;
        let score = self.scores.get_score(&identity, cancel).await?;
        Ok((identity, score))
    }

    /// Policies in configuration order
    pub fn policies(&self) -> impl Iterator<Item = &Policy> {
        self.policies.iter().map(|scoped| &scoped.policy)
    }

    /// Number of distinct references the identity cache has seen
    pub fn resolved_references(&self) -> usize {
        self.identities.len()
    }

    /// Number of distinct identities the score cache has seen
    pub fn fetched_scores(&self) -> usize {
        self.scores.len()
    }
}

#[async_trait]
impl<L: RepoRootLookup, S: ScoreRepository> PolicyEvaluationPort for PolicyEngine<L, S> {
    async fn evaluate(&self, reference: &str, cancel: &CancellationToken) -> DependencyEvaluation {
        PolicyEngine::evaluate(self, reference, cancel).await
    }
}
