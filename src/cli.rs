use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::ReportFormat;

/// Lint Go imports against OpenSSF Scorecard policies
#[derive(Parser, Debug)]
#[command(name = "scorecard-check")]
#[command(version)]
#[command(
    about = "Lint Go imports against OpenSSF Scorecard policies",
    long_about = "Checks every third-party import of a Go module against the policies in \
                  .scorecard-check.yaml and reports imports whose OpenSSF Scorecard score \
                  falls below a policy threshold."
)]
pub struct Args {
    /// Files, directories, or `dir/...` patterns to lint (defaults to ./...)
    #[arg(value_name = "TARGETS")]
    pub targets: Vec<String>,

    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<String>,

    /// Skip _test.go files
    #[arg(long)]
    pub no_tests: bool,

    /// Config file (defaults to .scorecard-check.yaml in the current or home directory)
    #[arg(short = 'f', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Report file path, `-` for stdout
    #[arg(short = 'o', long, value_name = "PATH", default_value = "-")]
    pub report: String,

    /// Report format: default or checkstyle
    #[arg(long, default_value = "default")]
    pub format: ReportFormat,

    /// Do not report dependencies the Scorecard API has no score for
    #[arg(long)]
    pub ignore_missing_scores: bool,

    /// Cancel the evaluation after this many seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["scorecard-check"]).unwrap();
        assert!(args.targets.is_empty());
        assert_eq!(args.report, "-");
        assert_eq!(args.format, ReportFormat::Default);
        assert!(!args.no_tests);
        assert!(!args.ignore_missing_scores);
        assert!(args.config.is_none());
        assert!(args.timeout.is_none());
    }

    #[test]
    fn test_all_flags() {
        let args = Args::try_parse_from([
            "scorecard-check",
            "--no-tests",
            "-f",
            "policy.yaml",
            "-o",
            "report.xml",
            "--format",
            "checkstyle",
            "--ignore-missing-scores",
            "--timeout",
            "30",
            "-v",
            "./cmd/...",
            "main.go",
        ])
        .unwrap();

        assert!(args.no_tests);
        assert_eq!(args.config, Some(PathBuf::from("policy.yaml")));
        assert_eq!(args.report, "report.xml");
        assert_eq!(args.format, ReportFormat::Checkstyle);
        assert!(args.ignore_missing_scores);
        assert_eq!(args.timeout, Some(30));
        assert!(args.verbose);
        assert_eq!(args.targets, vec!["./cmd/...", "main.go"]);
    }

    #[test]
    fn test_invalid_format_is_rejected() {
        let error = Args::try_parse_from(["scorecard-check", "--format", "json"]).unwrap_err();
        assert!(error.to_string().contains("Invalid format"));
    }
}
