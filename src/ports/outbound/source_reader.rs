use crate::shared::Result;
use std::path::{Path, PathBuf};

/// SourceReader port for locating and reading Go source files
pub trait SourceReader {
    /// Expands lint targets into a sorted list of `.go` files
    ///
    /// # Arguments
    /// * `root` - Directory targets are relative to
    /// * `targets` - Files, directories, or directories with a `/...` suffix
    ///   (recursive). Empty means `./...`.
    /// * `skip_tests` - Drop `_test.go` files
    ///
    /// # Errors
    /// Returns an error if a target does not exist.
    fn find_source_files(&self, root: &Path, targets: &[String], skip_tests: bool) -> Result<Vec<PathBuf>>;

    /// Reads one source file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or fails the safety
    /// checks (symlink, size limit).
    fn read_source(&self, path: &Path) -> Result<String>;
}

/// ModuleFileReader port for reading the project's `go.mod`
pub trait ModuleFileReader {
    /// Returns the module path declared by the nearest `go.mod` at or above
    /// `dir`
    ///
    /// # Errors
    /// Returns an error if no `go.mod` exists or it declares no module.
    fn read_module_path(&self, dir: &Path) -> Result<String>;
}
