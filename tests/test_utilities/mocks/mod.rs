/// Mock implementations for testing
mod mock_progress_reporter;
mod mock_repo_root_lookup;
mod mock_score_repository;

pub use mock_progress_reporter::MockProgressReporter;
pub use mock_repo_root_lookup::MockRepoRootLookup;
pub use mock_score_repository::MockScoreRepository;
