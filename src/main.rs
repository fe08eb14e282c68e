use clap::Parser;
use scorecard_check::adapters::outbound::console::StderrProgressReporter;
use scorecard_check::adapters::outbound::filesystem::FileSystemReader;
use scorecard_check::adapters::outbound::network::{ScorecardClient, VcsRepoRootLookup};
use scorecard_check::application::dto::LintRequest;
use scorecard_check::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use scorecard_check::application::use_cases::{LintSourcesUseCase, PolicyEngine};
use scorecard_check::cli::Args;
use scorecard_check::config::{home_dir, resolve_config};
use scorecard_check::shared::error::{ExitCode, ScorecardCheckError};
use scorecard_check::shared::logging::init_tracing;
use scorecard_check::shared::{CancellationToken, Result};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;
use tracing::warn;

#[tokio::main]
async fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    init_tracing(args.verbose);

    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let project_path = args.path.as_deref().map_or_else(|| cwd.clone(), PathBuf::from);

    validate_project_path(&project_path)?;
    let project_path = project_path.canonicalize()?;

    let config = resolve_config(args.config.as_deref(), &cwd, home_dir().as_deref())?;

    // Create adapters (Dependency Injection)
    let lookup = VcsRepoRootLookup::new(config.timeout())?;
    let repository = ScorecardClient::new(config.api_url(), config.timeout())?;
    let engine = PolicyEngine::new(config.to_policies(), lookup, repository);

    let use_case = LintSourcesUseCase::new(
        FileSystemReader::new(),
        FileSystemReader::new(),
        engine,
        StderrProgressReporter::new(),
    );

    let cancel = CancellationToken::new();
    let _deadline = args
        .timeout
        .map(|seconds| cancel.cancel_after(Duration::from_secs(seconds)));
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("interrupted, cancelling outstanding lookups");
                cancel.cancel();
            }
        });
    }

    let request = LintRequest::new(project_path, args.targets)
        .with_skip_tests(args.no_tests)
        .with_ignore_missing_scores(args.ignore_missing_scores)
        .with_concurrency(config.concurrency());

    let response = use_case.execute(request, &cancel).await?;

    eprintln!("{}", FormatterFactory::progress_message(args.format));
    let formatter = FormatterFactory::create(args.format);
    let report = formatter.format(&response.issues)?;

    let presenter = PresenterFactory::create(PresenterType::from_report_path(&args.report));
    presenter.present(&report)?;

    if response.has_issues() {
        Ok(ExitCode::IssuesFound)
    } else {
        Ok(ExitCode::Success)
    }
}

fn validate_project_path(path: &Path) -> Result<()> {
    let invalid = |reason: String| ScorecardCheckError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason,
    };

    if !path.exists() {
        return Err(invalid("Directory does not exist".to_string()).into());
    }

    // Security check: Reject symbolic links for project paths
    let metadata = std::fs::symlink_metadata(path)
        .map_err(|e| invalid(format!("Failed to read path metadata: {}", e)))?;

    if metadata.is_symlink() {
        return Err(invalid(
            "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed."
                .to_string(),
        )
        .into());
    }

    if !path.is_dir() {
        return Err(invalid("Not a directory".to_string()).into());
    }

    Ok(())
}
