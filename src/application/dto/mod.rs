/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod lint_request;
mod lint_response;
mod report_format;

pub use lint_request::{LintRequest, DEFAULT_CONCURRENCY};
pub use lint_response::LintResponse;
pub use report_format::ReportFormat;
