use crate::application::read_models::Issue;
use crate::ports::outbound::IssueFormatter;
use crate::shared::Result;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use std::io::Cursor;

const CHECKSTYLE_VERSION: &str = "5.0";

/// Value of the `source` attribute on every reported error
const SOURCE: &str = "scorecard-check";

/// CheckstyleFormatter adapter for Checkstyle XML reports
///
/// Issues are grouped per file in the order files are first seen; every
/// issue is reported with `severity="error"`.
pub struct CheckstyleFormatter;

impl CheckstyleFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Groups issues by file name, keeping first-seen file order.
    fn group_by_file(issues: &[Issue]) -> Vec<(&str, Vec<&Issue>)> {
        let mut files: Vec<(&str, Vec<&Issue>)> = Vec::new();
        for issue in issues {
            match files.iter_mut().find(|(name, _)| *name == issue.file_name) {
                Some((_, grouped)) => grouped.push(issue),
                None => files.push((issue.file_name.as_str(), vec![issue])),
            }
        }
        files
    }
}

impl Default for CheckstyleFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl IssueFormatter for CheckstyleFormatter {
    fn format(&self, issues: &[Issue]) -> Result<String> {
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        writer.write_event(Event::Start(
            BytesStart::new("checkstyle").with_attributes([("version", CHECKSTYLE_VERSION)]),
        ))?;

        for (file_name, file_issues) in Self::group_by_file(issues) {
            writer.write_event(Event::Start(
                BytesStart::new("file").with_attributes([("name", file_name)]),
            ))?;

            for issue in file_issues {
                let line = issue.line.to_string();
                let column = issue.column.to_string();
                writer.write_event(Event::Empty(BytesStart::new("error").with_attributes([
                    ("line", line.as_str()),
                    ("column", column.as_str()),
                    ("severity", "error"),
                    ("message", issue.reason.as_str()),
                    ("source", SOURCE),
                ])))?;
            }

            writer.write_event(Event::End(BytesEnd::new("file")))?;
        }

        writer.write_event(Event::End(BytesEnd::new("checkstyle")))?;

        let mut output = String::from_utf8(writer.into_inner().into_inner())?;
        output.push('\n');
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_groups_issues_by_file_in_first_seen_order() {
        let issues = vec![
            Issue::violation("b.go", 3, 8, "first"),
            Issue::violation("a.go", 5, 2, "second"),
            Issue::error("b.go", 9, 2, "third"),
        ];

        let output = CheckstyleFormatter::new().format(&issues).unwrap();

        let b = output.find("<file name=\"b.go\">").unwrap();
        let a = output.find("<file name=\"a.go\">").unwrap();
        assert!(b < a);
        assert_eq!(output.matches("<file ").count(), 2);
        assert_eq!(output.matches("<error ").count(), 3);
        let third = output.find("message=\"third\"").unwrap();
        assert!(third < a);
    }

    #[test]
    fn test_format_document_structure() {
        let issues = vec![Issue::violation("main.go", 7, 2, "blocked")];

        let output = CheckstyleFormatter::new().format(&issues).unwrap();

        assert!(output.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(output.contains("<checkstyle version=\"5.0\">"));
        assert!(output.contains(
            "<error line=\"7\" column=\"2\" severity=\"error\" message=\"blocked\" source=\"scorecard-check\"/>"
        ));
        assert!(output.trim_end().ends_with("</checkstyle>"));
    }

    #[test]
    fn test_format_escapes_xml_special_characters() {
        let issues = vec![Issue::violation(
            "dir/<odd>&name.go",
            1,
            1,
            "import of package \"github.com/a/b\" is blocked: <min> & 'max'",
        )];

        let output = CheckstyleFormatter::new().format(&issues).unwrap();

        assert!(output.contains("name=\"dir/&lt;odd&gt;&amp;name.go\""));
        assert!(output.contains("&quot;github.com/a/b&quot;"));
        assert!(output.contains("&lt;min&gt; &amp; &apos;max&apos;"));
        assert!(!output.contains("<min>"));
    }

    #[test]
    fn test_format_without_issues_is_empty_document() {
        let output = CheckstyleFormatter::new().format(&[]).unwrap();

        assert!(output.contains("<checkstyle version=\"5.0\">"));
        assert!(!output.contains("<file"));
    }
}
