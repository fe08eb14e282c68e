use super::file_search;
use crate::ports::outbound::{ModuleFileReader, SourceReader};
use crate::shared::error::ScorecardCheckError;
use crate::shared::security::{read_regular_file, MAX_METADATA_FILE_SIZE, MAX_SOURCE_FILE_SIZE};
use crate::shared::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

const MODULE_FILE_NAME: &str = "go.mod";

/// FileSystemReader adapter for reading Go projects from the file system
///
/// This adapter implements both SourceReader and ModuleFileReader ports.
/// Every read rejects symbolic links and oversized files.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceReader for FileSystemReader {
    fn find_source_files(&self, root: &Path, targets: &[String], skip_tests: bool) -> Result<Vec<PathBuf>> {
        let files = file_search::find_go_files(root, targets, skip_tests)?;
        debug!(count = files.len(), "found Go source files");
        Ok(files)
    }

    fn read_source(&self, path: &Path) -> Result<String> {
        read_regular_file(path, MAX_SOURCE_FILE_SIZE)
    }
}

impl ModuleFileReader for FileSystemReader {
    fn read_module_path(&self, dir: &Path) -> Result<String> {
        let module_file = find_module_file(dir).ok_or_else(|| ScorecardCheckError::ModuleFileNotFound {
            path: dir.to_path_buf(),
        })?;
        debug!(path = %module_file.display(), "reading module file");

        let content = read_regular_file(&module_file, MAX_METADATA_FILE_SIZE).map_err(|e| {
            ScorecardCheckError::FileReadError {
                path: module_file.clone(),
                details: e.to_string(),
            }
        })?;

        parse_module_directive(&content).ok_or_else(|| {
            ScorecardCheckError::FileReadError {
                path: module_file,
                details: "no module directive found".to_string(),
            }
            .into()
        })
    }
}

fn find_module_file(dir: &Path) -> Option<PathBuf> {
    dir.ancestors()
        .map(|ancestor| ancestor.join(MODULE_FILE_NAME))
        .find(|candidate| candidate.is_file())
}

/// Extracts the module path from `go.mod` content.
fn parse_module_directive(content: &str) -> Option<String> {
    content.lines().find_map(|line| {
        let line = line.split("//").next().unwrap_or_default().trim();
        let rest = line.strip_prefix("module")?;
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        let path = rest.trim().trim_matches(|c| c == '"' || c == '`');
        (!path.is_empty()).then(|| path.to_string())
    })
}
