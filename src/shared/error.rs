use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every import satisfied every applicable policy
    Success = 0,
    /// At least one issue (violation or lookup failure) was reported
    IssuesFound = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (config error, missing go.mod, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::IssuesFound => write!(f, "Issues Found (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Failures produced while evaluating a single dependency reference.
///
/// Outcomes are memoised and replayed to every caller that asks for the same
/// key, so the type is `Clone` and carries only owned, plain data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    /// The dependency's repository could not be determined.
    #[error("unable to resolve {reference:?}: {reason}")]
    Resolution { reference: String, reason: String },

    /// The reputation service has no record for the dependency.
    #[error("no scorecard for import {root}")]
    NoScore { root: String },

    /// Transport failure or unexpected HTTP status.
    #[error("{}", describe_fetch_failure(.status, .reason))]
    Fetch { status: Option<u16>, reason: String },

    /// The reputation service answered with a body we could not read.
    #[error("failed to decode scorecard response: {reason}")]
    Decode { reason: String },

    /// A policy scope pattern is not a valid glob.
    #[error("invalid package match {pattern:?}: {reason}")]
    Config { pattern: String, reason: String },

    /// The caller's cancellation token fired before an outcome was available.
    #[error("evaluation cancelled")]
    Cancelled,
}

fn describe_fetch_failure(status: &Option<u16>, reason: &str) -> String {
    match status {
        Some(code) => format!("scorecard api gave status code {}", code),
        None => format!("error performing scorecard api request: {}", reason),
    }
}

impl EvaluationError {
    pub fn is_no_score(&self) -> bool {
        matches!(self, EvaluationError::NoScore { .. })
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, EvaluationError::Cancelled)
    }
}

/// Application-specific errors surfaced by the CLI.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum ScorecardCheckError {
    #[error("No config file found, searched: {searched}\n\n💡 Hint: Create a .scorecard-check.yaml file or pass --config <path>")]
    ConfigNotFound { searched: String },

    #[error("Failed to parse config file: {path}\nDetails: {details}\n\n💡 Hint: Ensure the file contains valid YAML with a 'policies' list")]
    ConfigParseError { path: PathBuf, details: String },

    #[error("go.mod file not found in {path} or any parent directory\n\n💡 Hint: Run scorecard-check from inside a Go module")]
    ModuleFileNotFound { path: PathBuf },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid directory inside a Go module")]
    InvalidProjectPath { path: PathBuf, reason: String },

    #[error("Invalid target: {path}\nReason: {reason}\n\n💡 Hint: Targets are Go files, directories, or directories ending in /...")]
    InvalidTarget { path: PathBuf, reason: String },
}
