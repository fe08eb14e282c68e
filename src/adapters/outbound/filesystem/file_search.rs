use crate::shared::error::ScorecardCheckError;
use crate::shared::Result;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Suffix that marks a recursive target (`./...`, `internal/...`)
const RECURSIVE_SUFFIX: &str = "...";
const GO_EXTENSION: &str = "go";
const TEST_FILE_SUFFIX: &str = "_test.go";

/// Expands lint targets into Go source files.
///
/// Each target is resolved against `root`. `dir/...` walks `dir`
/// recursively, skipping hidden directories and `vendor`/`testdata` trees;
/// a plain directory contributes its own `.go` files; a file is taken as
/// given. Results keep target order, are sorted within a target, contain no
/// duplicates, and are relative to `root` where possible.
pub fn find_go_files(root: &Path, targets: &[String], skip_tests: bool) -> Result<Vec<PathBuf>> {
    let default_targets = [format!("./{}", RECURSIVE_SUFFIX)];
    let targets = if targets.is_empty() {
        &default_targets[..]
    } else {
        targets
    };

    let mut seen = HashSet::new();
    let mut found = Vec::new();

    for target in targets {
        for file in expand_target(root, target)? {
            if skip_tests && is_test_file(&file) {
                continue;
            }
            let file = file
                .strip_prefix(root)
                .map(Path::to_path_buf)
                .unwrap_or(file);
            if seen.insert(file.clone()) {
                found.push(file);
            }
        }
    }

    Ok(found)
}

fn expand_target(root: &Path, target: &str) -> Result<Vec<PathBuf>> {
    if let Some(dir) = target.strip_suffix(RECURSIVE_SUFFIX) {
        let dir = match dir.trim_end_matches('/') {
            "" => root.to_path_buf(),
            dir => root.join(dir),
        };
        ensure_directory(&dir, target)?;
        return walk_recursive(&dir, target);
    }

    let path = root.join(target);
    let metadata = std::fs::metadata(&path).map_err(|e| ScorecardCheckError::InvalidTarget {
        path: PathBuf::from(target),
        reason: e.to_string(),
    })?;

    if metadata.is_dir() {
        list_directory(&path, target)
    } else {
        Ok(vec![path])
    }
}

fn ensure_directory(dir: &Path, target: &str) -> Result<()> {
    if !dir.is_dir() {
        return Err(ScorecardCheckError::InvalidTarget {
            path: PathBuf::from(target),
            reason: format!("{} is not a directory", dir.display()),
        }
        .into());
    }
    Ok(())
}

fn walk_recursive(dir: &Path, target: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let walker = WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_skipped_directory(entry));

    for entry in walker {
        let entry = entry.map_err(|e| ScorecardCheckError::InvalidTarget {
            path: PathBuf::from(target),
            reason: e.to_string(),
        })?;
        if entry.file_type().is_file() && is_go_file(entry.path()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

fn list_directory(dir: &Path, target: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| ScorecardCheckError::InvalidTarget {
            path: PathBuf::from(target),
            reason: e.to_string(),
        })?;
        if entry.file_type().is_file() && is_go_file(entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn is_skipped_directory(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || name.starts_with('_') || name == "vendor" || name == "testdata"
}

fn is_go_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == GO_EXTENSION)
}

fn is_test_file(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().ends_with(TEST_FILE_SUFFIX))
}
