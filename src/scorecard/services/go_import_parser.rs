use crate::scorecard::domain::ImportReference;
use crate::shared::Result;
use anyhow::{anyhow, bail, Context};
use tree_sitter::{Node, Parser};

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// GoImportParser extracts import declarations from Go source.
///
/// The whole file is parsed with the tree-sitter Go grammar. A file with a
/// syntax error anywhere, including inside function bodies, is rejected.
pub struct GoImportParser;

impl GoImportParser {
    /// Returns every import in declaration order, positioned at the start of
    /// its import spec (the alias when present, the path otherwise). Lines
    /// and columns are 1-based; columns count bytes.
    ///
    /// # Errors
    /// Returns an error if the source does not parse as Go, or does not
    /// start with a package clause.
    pub fn parse(source: &str) -> Result<Vec<ImportReference>> {
        let source = source.strip_prefix(BYTE_ORDER_MARK).unwrap_or(source);

        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_go::LANGUAGE.into())
            .context("failed to load Go grammar")?;
        let tree = parser
            .parse(source, None)
            .ok_or_else(|| anyhow!("parser produced no syntax tree"))?;
        let root = tree.root_node();

        if root.has_error() {
            match first_error(root) {
                Some(node) => {
                    let (line, column) = position(&node);
                    if node.is_missing() {
                        bail!("{}:{}: syntax error: missing {}", line, column, node.kind());
                    }
                    bail!("{}:{}: syntax error", line, column);
                }
                None => bail!("syntax error"),
            }
        }

        let mut cursor = root.walk();
        let mut declarations = root.named_children(&mut cursor).filter(|n| n.kind() != "comment");
        match declarations.next() {
            Some(node) if node.kind() == "package_clause" => {}
            Some(node) => {
                let (line, column) = position(&node);
                bail!("{}:{}: expected 'package', found {}", line, column, node.kind());
            }
            None => bail!("1:1: expected 'package', found end of file"),
        }

        let source_bytes = source.as_bytes();
        let mut imports = Vec::new();
        for declaration in declarations.filter(|n| n.kind() == "import_declaration") {
            collect_specs(declaration, source_bytes, &mut imports)?;
        }

        Ok(imports)
    }
}

fn collect_specs(node: Node<'_>, source: &[u8], imports: &mut Vec<ImportReference>) -> Result<()> {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "import_spec" => imports.push(import_reference(&child, source)?),
            "import_spec_list" => collect_specs(child, source, imports)?,
            _ => {}
        }
    }
    Ok(())
}

fn import_reference(spec: &Node<'_>, source: &[u8]) -> Result<ImportReference> {
    let (line, column) = position(spec);
    let literal = spec
        .child_by_field_name("path")
        .ok_or_else(|| anyhow!("{}:{}: expected import path", line, column))?;
    let text = literal
        .utf8_text(source)
        .with_context(|| format!("{}:{}: import path is not valid UTF-8", line, column))?;

    // Both literal forms are delimited by a single byte on each side.
    let path = text
        .get(1..text.len().saturating_sub(1))
        .unwrap_or_default()
        .trim();
    if path.is_empty() {
        bail!("{}:{}: empty import path", line, column);
    }

    Ok(ImportReference::new(path, line, column))
}

/// Depth-first search for the first ERROR or MISSING node.
fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    children
        .into_iter()
        .filter(|child| child.has_error())
        .find_map(first_error)
}

fn position(node: &Node<'_>) -> (usize, usize) {
    let point = node.start_position();
    (point.row + 1, point.column + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(imports: &[ImportReference]) -> Vec<&str> {
        imports.iter().map(|i| i.path()).collect()
    }

    #[test]
    fn test_single_import() {
        let source = "package main\n\nimport \"github.com/spf13/cobra\"\n\nfunc main() {}\n";
        let imports = GoImportParser::parse(source).unwrap();

        assert_eq!(imports, vec![ImportReference::new("github.com/spf13/cobra", 3, 8)]);
    }

    #[test]
    fn test_grouped_imports_with_aliases() {
        let source = r#"package app

import (
	"fmt"
	yaml "gopkg.in/yaml.v3"
	_ "github.com/lib/pq"
	. "github.com/onsi/gomega"
)
"#;
        let imports = GoImportParser::parse(source).unwrap();

        assert_eq!(
            paths(&imports),
            vec!["fmt", "gopkg.in/yaml.v3", "github.com/lib/pq", "github.com/onsi/gomega"]
        );
        assert_eq!((imports[1].line(), imports[1].column()), (5, 2));
        assert_eq!((imports[3].line(), imports[3].column()), (7, 2));
    }

    #[test]
    fn test_multiple_declarations_and_comments() {
        let source = r#"// Package app does things.
/* licence
   header */
package app // trailing

import "os"

// grouped
import (
	"net/http" // inline
	/* before */ "golang.org/x/mod/modfile"
)

import `github.com/raw/path`

var x = "github.com/not/an/import"
"#;
        let imports = GoImportParser::parse(source).unwrap();

        assert_eq!(
            paths(&imports),
            vec!["os", "net/http", "golang.org/x/mod/modfile", "github.com/raw/path"]
        );
        assert_eq!((imports[2].line(), imports[2].column()), (11, 15));
    }

    #[test]
    fn test_semicolon_separated_imports() {
        let source = "package a; import (\"a.com/x\"; \"b.com/y\"); import \"c.com/z\"\n";
        let imports = GoImportParser::parse(source).unwrap();
        assert_eq!(paths(&imports), vec!["a.com/x", "b.com/y", "c.com/z"]);
    }

    #[test]
    fn test_no_imports() {
        let imports = GoImportParser::parse("package empty\n\nconst X = 1\n").unwrap();
        assert!(imports.is_empty());
    }

    #[test]
    fn test_byte_order_mark_is_ignored() {
        let source = "\u{FEFF}package main\n\nimport \"github.com/spf13/cobra\"\n";
        let imports = GoImportParser::parse(source).unwrap();

        assert_eq!(imports, vec![ImportReference::new("github.com/spf13/cobra", 3, 8)]);
    }

    #[test]
    fn test_syntax_error_in_function_body_is_error() {
        let source = "package main\n\nimport \"github.com/x/y\"\n\nfunc main() {\n\tif {\n}\n";
        let error = GoImportParser::parse(source).unwrap_err();
        assert!(error.to_string().contains("syntax error"));
    }

    #[test]
    fn test_missing_package_clause_is_error() {
        let error = GoImportParser::parse("import \"fmt\"\n").unwrap_err();
        assert!(error.to_string().contains("expected 'package'"));
    }

    #[test]
    fn test_empty_source_is_error() {
        let error = GoImportParser::parse("").unwrap_err();
        assert!(error.to_string().contains("expected 'package'"));
    }

    #[test]
    fn test_unterminated_import_block_is_error() {
        assert!(GoImportParser::parse("package a\nimport (\n\t\"fmt\"\n").is_err());
    }

    #[test]
    fn test_unterminated_string_is_error() {
        let error = GoImportParser::parse("package a\nimport \"fmt\n").unwrap_err();
        assert!(error.to_string().contains("syntax error"));
    }

    #[test]
    fn test_unterminated_comment_is_error() {
        assert!(GoImportParser::parse("package a\n/* open").is_err());
    }

    #[test]
    fn test_import_without_path_is_error() {
        assert!(GoImportParser::parse("package a\nimport (\n\tfoo bar\n)\n").is_err());
    }
}
