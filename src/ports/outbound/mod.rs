/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console, etc.).
pub mod issue_formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod repo_root_lookup;
pub mod score_repository;
pub mod source_reader;

pub use issue_formatter::IssueFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use repo_root_lookup::{RepoRoot, RepoRootLookup};
pub use score_repository::ScoreRepository;
pub use source_reader::{ModuleFileReader, SourceReader};
