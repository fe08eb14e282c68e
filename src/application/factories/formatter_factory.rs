use crate::adapters::outbound::formatters::{CheckstyleFormatter, TextFormatter};
use crate::application::dto::ReportFormat;
use crate::ports::outbound::IssueFormatter;

/// Factory for creating issue formatters
///
/// Selects the formatter adapter for a report format. It belongs in the
/// application layer as it orchestrates the selection of infrastructure
/// adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified report format
    ///
    /// # Examples
    /// ```
    /// use scorecard_check::application::dto::ReportFormat;
    /// use scorecard_check::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(ReportFormat::Checkstyle);
    /// ```
    pub fn create(format: ReportFormat) -> Box<dyn IssueFormatter> {
        match format {
            ReportFormat::Default => Box::new(TextFormatter::new()),
            ReportFormat::Checkstyle => Box::new(CheckstyleFormatter::new()),
        }
    }

    /// Returns the progress message for the specified report format
    ///
    /// # Examples
    /// ```
    /// use scorecard_check::application::dto::ReportFormat;
    /// use scorecard_check::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(ReportFormat::Checkstyle);
    /// assert_eq!(message, "📝 Writing Checkstyle XML report...");
    /// ```
    pub fn progress_message(format: ReportFormat) -> &'static str {
        match format {
            ReportFormat::Default => "📝 Writing text report...",
            ReportFormat::Checkstyle => "📝 Writing Checkstyle XML report...",
        }
    }
}
