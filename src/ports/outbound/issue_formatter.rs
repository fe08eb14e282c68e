use crate::application::read_models::Issue;
use crate::shared::Result;

/// IssueFormatter port for rendering lint issues
///
/// This port abstracts the report format (plain text, Checkstyle XML, etc.).
pub trait IssueFormatter {
    /// Renders all issues into a single report
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, issues: &[Issue]) -> Result<String>;
}
