/// Formatter adapters for the supported report formats
mod checkstyle_formatter;
mod text_formatter;

pub use checkstyle_formatter::CheckstyleFormatter;
pub use text_formatter::TextFormatter;
