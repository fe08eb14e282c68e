/// Use cases module containing application business logic orchestration
mod evaluate_dependency;
mod lint_sources;

pub use evaluate_dependency::PolicyEngine;
pub use lint_sources::LintSourcesUseCase;
