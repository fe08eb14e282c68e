use crate::application::dto::{LintRequest, LintResponse};
use crate::application::read_models::Issue;
use crate::ports::inbound::PolicyEvaluationPort;
use crate::ports::outbound::{ModuleFileReader, ProgressReporter, SourceReader};
use crate::scorecard::domain::{DependencyEvaluation, ImportReference};
use crate::scorecard::services::{GoImportParser, ImportFilter};
use crate::shared::{CancellationToken, Result};
use futures::stream::{self, StreamExt};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::{debug, warn};

/// Imports of one source file that need evaluating.
struct SourceFile {
    display_name: String,
    outcome: SourceOutcome,
}

enum SourceOutcome {
    Imports(Vec<ImportReference>),
    Unreadable(String),
    InvalidSyntax(String),
}

/// LintSourcesUseCase - Lints the imports of a Go project against policy
///
/// This use case orchestrates the lint workflow using generic dependency
/// injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `SR` - SourceReader implementation
/// * `MR` - ModuleFileReader implementation
/// * `PE` - PolicyEvaluationPort implementation (normally the `PolicyEngine`)
/// * `PR` - ProgressReporter implementation
pub struct LintSourcesUseCase<SR, MR, PE, PR> {
    source_reader: SR,
    module_reader: MR,
    evaluator: PE,
    progress_reporter: PR,
}

impl<SR, MR, PE, PR> LintSourcesUseCase<SR, MR, PE, PR>
where
    SR: SourceReader,
    MR: ModuleFileReader,
    PE: PolicyEvaluationPort,
    PR: ProgressReporter,
{
    /// Creates a new LintSourcesUseCase with injected dependencies
    pub fn new(source_reader: SR, module_reader: MR, evaluator: PE, progress_reporter: PR) -> Self {
        Self {
            source_reader,
            module_reader,
            evaluator,
            progress_reporter,
        }
    }

    /// Executes the lint use case
    ///
    /// Per-file and per-dependency failures become issues; only problems
    /// that prevent linting altogether (no `go.mod`, invalid targets) are
    /// returned as errors.
    ///
    /// # Errors
    /// Returns an error if the module file cannot be read or a target does
    /// not exist.
    pub async fn execute(&self, request: LintRequest, cancel: &CancellationToken) -> Result<LintResponse> {
        // Step 1: Identify the project's own module
        let module_path = self.module_reader.read_module_path(&request.project_dir)?;
        debug!(module = %module_path, "linting module");

        // Step 2: Find and parse source files
        let files = self
            .source_reader
            .find_source_files(&request.project_dir, &request.targets, request.skip_tests)?;
        let filter = ImportFilter::new(Some(module_path));
        let sources: Vec<SourceFile> = files
            .iter()
            .map(|file| self.load_source(&request, file, &filter))
            .collect();

        // Step 3: Evaluate every distinct import once
        let imports_checked = sources
            .iter()
            .map(|source| match &source.outcome {
                SourceOutcome::Imports(imports) => imports.len(),
                _ => 0,
            })
            .sum();
        let evaluations = self.evaluate_all(&sources, &request, cancel).await;

        // Step 4: Turn evaluations into issues, in file then import order
        let issues = Self::collect_issues(&sources, &evaluations, request.ignore_missing_scores);

        self.progress_reporter.report_completion(&format!(
            "✅ Checked {} import(s) in {} file(s): {} issue(s)",
            imports_checked,
            files.len(),
            issues.len()
        ));

        Ok(LintResponse::new(issues, files.len(), imports_checked))
    }

    fn load_source(&self, request: &LintRequest, file: &Path, filter: &ImportFilter) -> SourceFile {
        let display_name = file.display().to_string();
        let path = request.project_dir.join(file);

        let outcome = match self.source_reader.read_source(&path) {
            Err(e) => SourceOutcome::Unreadable(format!("{:#}", e)),
            Ok(content) => match GoImportParser::parse(&content) {
                Err(e) => SourceOutcome::InvalidSyntax(format!("{:#}", e)),
                Ok(imports) => SourceOutcome::Imports(
                    imports
                        .into_iter()
                        .filter(|import| filter.should_check(import.path()))
                        .collect(),
                ),
            },
        };

        SourceFile {
            display_name,
            outcome,
        }
    }

    async fn evaluate_all(
        &self,
        sources: &[SourceFile],
        request: &LintRequest,
        cancel: &CancellationToken,
    ) -> HashMap<String, DependencyEvaluation> {
        let mut seen = HashSet::new();
        let references: Vec<&str> = sources
            .iter()
            .filter_map(|source| match &source.outcome {
                SourceOutcome::Imports(imports) => Some(imports),
                _ => None,
            })
            .flatten()
            .map(ImportReference::path)
            .filter(|path| seen.insert(*path))
            .collect();

        let total = references.len();
        if total > 0 {
            self.progress_reporter.report(&format!(
                "🔍 Evaluating {} dependency reference(s) from {} file(s)...",
                total,
                sources.len()
            ));
        }

        let mut evaluations = HashMap::with_capacity(total);
        let mut pending = stream::iter(references)
            .map(|reference| async move {
                let evaluation = self.evaluator.evaluate(reference, cancel).await;
                (reference, evaluation)
            })
            .buffer_unordered(request.concurrency.max(1));

        while let Some((reference, evaluation)) = pending.next().await {
            evaluations.insert(reference.to_string(), evaluation);
            self.progress_reporter
                .report_progress(evaluations.len(), total, Some(reference));
        }

        if cancel.is_cancelled() {
            warn!("evaluation cancelled; remaining dependencies reported as errors");
        }

        evaluations
    }

    fn collect_issues(
        sources: &[SourceFile],
        evaluations: &HashMap<String, DependencyEvaluation>,
        ignore_missing_scores: bool,
    ) -> Vec<Issue> {
        let mut issues = Vec::new();

        for source in sources {
            let name = &source.display_name;
            let imports = match &source.outcome {
                SourceOutcome::Unreadable(reason) => {
                    issues.push(Issue::error(
                        name,
                        0,
                        0,
                        format!("unable to read file, file cannot be linted: {}", reason),
                    ));
                    continue;
                }
                SourceOutcome::InvalidSyntax(reason) => {
                    issues.push(Issue::error(
                        name,
                        0,
                        0,
                        format!("invalid syntax, file cannot be linted ({})", reason),
                    ));
                    continue;
                }
                SourceOutcome::Imports(imports) => imports,
            };

            for import in imports {
                let Some(evaluation) = evaluations.get(import.path()) else {
                    continue;
                };
                let (line, column) = (import.line(), import.column());

                for error in &evaluation.errors {
                    if ignore_missing_scores && error.is_no_score() {
                        debug!(import = import.path(), "ignoring missing scorecard");
                        continue;
                    }
                    issues.push(Issue::error(
                        name,
                        line,
                        column,
                        format!("unable to get scorecard for package: {}", error),
                    ));
                }
                for violation in &evaluation.violations {
                    issues.push(Issue::violation(name, line, column, violation.message()));
                }
            }
        }

        issues
    }
}
