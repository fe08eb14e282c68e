/// Report format enumeration
///
/// This enum represents the supported report formats. It belongs in the
/// application layer as both the CLI (inbound adapter) and formatters
/// (outbound adapters) need to understand it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// One `file:line:column reason` line per issue (default)
    #[default]
    Default,
    /// Checkstyle XML, for CI systems that ingest it
    Checkstyle,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" | "text" => Ok(ReportFormat::Default),
            "checkstyle" => Ok(ReportFormat::Checkstyle),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'default' or 'checkstyle'",
                s
            )),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Default => write!(f, "default"),
            ReportFormat::Checkstyle => write!(f, "checkstyle"),
        }
    }
}
