//! scorecard-check - lint Go imports against OpenSSF Scorecard policies
//!
//! This library resolves each third-party import of a Go module to its
//! source repository, fetches the repository's OpenSSF Scorecard, and checks
//! the score against configured policies. It follows hexagonal architecture
//! and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`scorecard`): Identities, scores, policies and the
//!   pure services that evaluate them
//! - **Application Layer** (`application`): Caches, the policy engine and
//!   the lint use case
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Errors, cancellation and single-flight caching
//!
//! # Example
//!
//! ```no_run
//! use scorecard_check::prelude::*;
//! use std::path::PathBuf;
//! use std::time::Duration;
//!
//! # async fn run() -> Result<()> {
//! // Create adapters
//! let lookup = VcsRepoRootLookup::new(Duration::from_secs(30))?;
//! let repository = ScorecardClient::new(DEFAULT_API_URL, Duration::from_secs(30))?;
//! let policies = vec![Policy::new("min score", vec![Rule::overall(5.0)])];
//!
//! // Create use case
//! let use_case = LintSourcesUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemReader::new(),
//!     PolicyEngine::new(policies, lookup, repository),
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute
//! let request = LintRequest::new(PathBuf::from("."), vec!["./...".to_string()]);
//! let response = use_case.execute(request, &CancellationToken::new()).await?;
//!
//! // Format output
//! let output = TextFormatter::new().format(&response.issues)?;
//! print!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod scorecard;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{CheckstyleFormatter, TextFormatter};
    pub use crate::adapters::outbound::network::{
        ScorecardClient, VcsRepoRootLookup, DEFAULT_API_URL,
    };
    pub use crate::application::caches::{IdentityCache, ScoreCache};
    pub use crate::application::dto::{LintRequest, LintResponse, ReportFormat};
    pub use crate::application::read_models::{Issue, IssueKind};
    pub use crate::application::use_cases::{LintSourcesUseCase, PolicyEngine};
    pub use crate::ports::inbound::PolicyEvaluationPort;
    pub use crate::ports::outbound::{
        IssueFormatter, ModuleFileReader, OutputPresenter, ProgressReporter, RepoRoot,
        RepoRootLookup, ScoreRepository, SourceReader,
    };
    pub use crate::scorecard::domain::{
        Check, DependencyEvaluation, DependencyIdentity, ImportReference, Policy, Rule,
        RuleTarget, Score, Violation,
    };
    pub use crate::scorecard::services::{
        GoImportParser, ImportFilter, RuleEvaluator, ScopeMatcher,
    };
    pub use crate::shared::error::{EvaluationError, ExitCode, ScorecardCheckError};
    pub use crate::shared::{CancellationToken, Result, SingleFlight};
}
