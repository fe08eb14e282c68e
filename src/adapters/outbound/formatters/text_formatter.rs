use crate::application::read_models::Issue;
use crate::ports::outbound::IssueFormatter;
use crate::shared::Result;

/// TextFormatter adapter for the default, line-oriented report
///
/// Each issue becomes one `file:line:column reason` line, a layout most
/// editors and CI log viewers turn into clickable locations.
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl IssueFormatter for TextFormatter {
    fn format(&self, issues: &[Issue]) -> Result<String> {
        let mut output = String::new();
        for issue in issues {
            output.push_str(&issue.to_string());
            output.push('\n');
        }
        Ok(output)
    }
}
